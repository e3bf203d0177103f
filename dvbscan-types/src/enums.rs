//! Tuning parameter enumerations.
//!
//! Discriminants match the Linux DVB frontend API (DVBv5), so values
//! round-trip unchanged between the scanning engine and this data model.
//! Each enum exposes `name()` returning the canonical constant name used
//! in the XML service-list format.

use serde::{Deserialize, Serialize};

/// Broadcast delivery system of a tuned carrier.
///
/// Assigned once by the scanning engine when the carrier locks and never
/// changed afterwards; the XML output shape is selected by this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DeliverySystem {
    Undefined = 0,
    DvbCAnnexA = 1,
    DvbCAnnexB = 2,
    DvbT = 3,
    Dss = 4,
    DvbS = 5,
    DvbS2 = 6,
    DvbH = 7,
    IsdbT = 8,
    IsdbS = 9,
    IsdbC = 10,
    Atsc = 11,
    AtscMh = 12,
    Dtmb = 13,
    Cmmb = 14,
    Dab = 15,
    DvbT2 = 16,
    Turbo = 17,
    DvbCAnnexC = 18,
    DvbC2 = 19,
}

impl DeliverySystem {
    /// Canonical name as it appears in the XML output.
    pub fn name(self) -> &'static str {
        match self {
            DeliverySystem::Undefined => "SYS_UNDEFINED",
            DeliverySystem::DvbCAnnexA => "SYS_DVBC_ANNEX_A",
            DeliverySystem::DvbCAnnexB => "SYS_DVBC_ANNEX_B",
            DeliverySystem::DvbT => "SYS_DVBT",
            DeliverySystem::Dss => "SYS_DSS",
            DeliverySystem::DvbS => "SYS_DVBS",
            DeliverySystem::DvbS2 => "SYS_DVBS2",
            DeliverySystem::DvbH => "SYS_DVBH",
            DeliverySystem::IsdbT => "SYS_ISDBT",
            DeliverySystem::IsdbS => "SYS_ISDBS",
            DeliverySystem::IsdbC => "SYS_ISDBC",
            DeliverySystem::Atsc => "SYS_ATSC",
            DeliverySystem::AtscMh => "SYS_ATSCMH",
            DeliverySystem::Dtmb => "SYS_DTMB",
            DeliverySystem::Cmmb => "SYS_CMMB",
            DeliverySystem::Dab => "SYS_DAB",
            DeliverySystem::DvbT2 => "SYS_DVBT2",
            DeliverySystem::Turbo => "SYS_TURBO",
            DeliverySystem::DvbCAnnexC => "SYS_DVBC_ANNEX_C",
            DeliverySystem::DvbC2 => "SYS_DVBC2",
        }
    }
}

/// Constellation / modulation scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Modulation {
    Qpsk = 0,
    Qam16 = 1,
    Qam32 = 2,
    Qam64 = 3,
    Qam128 = 4,
    Qam256 = 5,
    QamAuto = 6,
    Vsb8 = 7,
    Vsb16 = 8,
    Psk8 = 9,
    Apsk16 = 10,
    Apsk32 = 11,
    Dqpsk = 12,
}

impl Modulation {
    pub fn name(self) -> &'static str {
        match self {
            Modulation::Qpsk => "QPSK",
            Modulation::Qam16 => "QAM_16",
            Modulation::Qam32 => "QAM_32",
            Modulation::Qam64 => "QAM_64",
            Modulation::Qam128 => "QAM_128",
            Modulation::Qam256 => "QAM_256",
            Modulation::QamAuto => "QAM_AUTO",
            Modulation::Vsb8 => "VSB_8",
            Modulation::Vsb16 => "VSB_16",
            Modulation::Psk8 => "PSK_8",
            Modulation::Apsk16 => "APSK_16",
            Modulation::Apsk32 => "APSK_32",
            Modulation::Dqpsk => "DQPSK",
        }
    }
}

/// Forward error correction code rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CodeRate {
    None = 0,
    Fec1_2 = 1,
    Fec2_3 = 2,
    Fec3_4 = 3,
    Fec4_5 = 4,
    Fec5_6 = 5,
    Fec6_7 = 6,
    Fec7_8 = 7,
    Fec8_9 = 8,
    Auto = 9,
    Fec3_5 = 10,
    Fec9_10 = 11,
    Fec2_5 = 12,
}

impl CodeRate {
    pub fn name(self) -> &'static str {
        match self {
            CodeRate::None => "FEC_NONE",
            CodeRate::Fec1_2 => "FEC_1_2",
            CodeRate::Fec2_3 => "FEC_2_3",
            CodeRate::Fec3_4 => "FEC_3_4",
            CodeRate::Fec4_5 => "FEC_4_5",
            CodeRate::Fec5_6 => "FEC_5_6",
            CodeRate::Fec6_7 => "FEC_6_7",
            CodeRate::Fec7_8 => "FEC_7_8",
            CodeRate::Fec8_9 => "FEC_8_9",
            CodeRate::Auto => "FEC_AUTO",
            CodeRate::Fec3_5 => "FEC_3_5",
            CodeRate::Fec9_10 => "FEC_9_10",
            CodeRate::Fec2_5 => "FEC_2_5",
        }
    }
}

/// OFDM transmission mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TransmissionMode {
    Mode2k = 0,
    Mode8k = 1,
    Auto = 2,
    Mode4k = 3,
    Mode1k = 4,
    Mode16k = 5,
    Mode32k = 6,
    ModeC1 = 7,
    ModeC3780 = 8,
}

impl TransmissionMode {
    pub fn name(self) -> &'static str {
        match self {
            TransmissionMode::Mode2k => "TRANSMISSION_MODE_2K",
            TransmissionMode::Mode8k => "TRANSMISSION_MODE_8K",
            TransmissionMode::Auto => "TRANSMISSION_MODE_AUTO",
            TransmissionMode::Mode4k => "TRANSMISSION_MODE_4K",
            TransmissionMode::Mode1k => "TRANSMISSION_MODE_1K",
            TransmissionMode::Mode16k => "TRANSMISSION_MODE_16K",
            TransmissionMode::Mode32k => "TRANSMISSION_MODE_32K",
            TransmissionMode::ModeC1 => "TRANSMISSION_MODE_C1",
            TransmissionMode::ModeC3780 => "TRANSMISSION_MODE_C3780",
        }
    }
}

/// OFDM guard interval, including the DTMB PN modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum GuardInterval {
    Guard1_32 = 0,
    Guard1_16 = 1,
    Guard1_8 = 2,
    Guard1_4 = 3,
    Auto = 4,
    Guard1_128 = 5,
    Guard19_128 = 6,
    Guard19_256 = 7,
    GuardPn420 = 8,
    GuardPn595 = 9,
    GuardPn945 = 10,
}

impl GuardInterval {
    pub fn name(self) -> &'static str {
        match self {
            GuardInterval::Guard1_32 => "GUARD_INTERVAL_1_32",
            GuardInterval::Guard1_16 => "GUARD_INTERVAL_1_16",
            GuardInterval::Guard1_8 => "GUARD_INTERVAL_1_8",
            GuardInterval::Guard1_4 => "GUARD_INTERVAL_1_4",
            GuardInterval::Auto => "GUARD_INTERVAL_AUTO",
            GuardInterval::Guard1_128 => "GUARD_INTERVAL_1_128",
            GuardInterval::Guard19_128 => "GUARD_INTERVAL_19_128",
            GuardInterval::Guard19_256 => "GUARD_INTERVAL_19_256",
            GuardInterval::GuardPn420 => "GUARD_INTERVAL_PN420",
            GuardInterval::GuardPn595 => "GUARD_INTERVAL_PN595",
            GuardInterval::GuardPn945 => "GUARD_INTERVAL_PN945",
        }
    }
}

/// Hierarchical transmission mode (DVB-T).
///
/// `None` means a single stream; any other value means a high- and a
/// low-priority stream are multiplexed at different robustness levels,
/// which is what makes the alpha/interleaver/coderate_LP/priority group
/// meaningful in the XML output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Hierarchy {
    None = 0,
    H1 = 1,
    H2 = 2,
    H4 = 3,
    Auto = 4,
}

impl Hierarchy {
    pub fn name(self) -> &'static str {
        match self {
            Hierarchy::None => "HIERARCHY_NONE",
            Hierarchy::H1 => "HIERARCHY_1",
            Hierarchy::H2 => "HIERARCHY_2",
            Hierarchy::H4 => "HIERARCHY_4",
            Hierarchy::Auto => "HIERARCHY_AUTO",
        }
    }
}

/// Hierarchy alpha value (EN 300 468 table 46).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Alpha {
    Auto = 0,
    Alpha1 = 1,
    Alpha2 = 2,
    Alpha4 = 3,
}

impl Alpha {
    pub fn name(self) -> &'static str {
        match self {
            Alpha::Auto => "ALPHA_AUTO",
            Alpha::Alpha1 => "ALPHA_1",
            Alpha::Alpha2 => "ALPHA_2",
            Alpha::Alpha4 => "ALPHA_4",
        }
    }
}

/// Terrestrial interleaver selection (EN 300 468 table 46).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Interleaver {
    Auto = 0,
    Native = 1,
    InDepth = 2,
}

impl Interleaver {
    pub fn name(self) -> &'static str {
        match self {
            Interleaver::Auto => "INTERLEAVE_AUTO",
            Interleaver::Native => "INTERLEAVE_NATIVE",
            Interleaver::InDepth => "INTERLEAVE_IN_DEPTH",
        }
    }
}

/// Satellite rolloff factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rolloff {
    Rolloff35 = 0,
    Rolloff20 = 1,
    Rolloff25 = 2,
    Auto = 3,
}

impl Rolloff {
    pub fn name(self) -> &'static str {
        match self {
            Rolloff::Rolloff35 => "ROLLOFF_35",
            Rolloff::Rolloff20 => "ROLLOFF_20",
            Rolloff::Rolloff25 => "ROLLOFF_25",
            Rolloff::Auto => "ROLLOFF_AUTO",
        }
    }
}

/// DVB-S2 pilot tones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Pilot {
    On = 0,
    Off = 1,
    Auto = 2,
}

impl Pilot {
    pub fn name(self) -> &'static str {
        match self {
            Pilot::On => "PILOT_ON",
            Pilot::Off => "PILOT_OFF",
            Pilot::Auto => "PILOT_AUTO",
        }
    }
}

/// Satellite signal polarization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Polarization {
    Horizontal = 0,
    Vertical = 1,
    CircularLeft = 2,
    CircularRight = 3,
}

impl Polarization {
    pub fn name(self) -> &'static str {
        match self {
            Polarization::Horizontal => "POLARIZATION_HORIZONTAL",
            Polarization::Vertical => "POLARIZATION_VERTICAL",
            Polarization::CircularLeft => "POLARIZATION_CIRCULAR_LEFT",
            Polarization::CircularRight => "POLARIZATION_CIRCULAR_RIGHT",
        }
    }
}

/// Boolean-style flag rendering for the XML output.
pub fn bool_name(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_system_names() {
        assert_eq!(DeliverySystem::DvbT2.name(), "SYS_DVBT2");
        assert_eq!(DeliverySystem::DvbS.name(), "SYS_DVBS");
        assert_eq!(DeliverySystem::DvbCAnnexA.name(), "SYS_DVBC_ANNEX_A");
    }

    #[test]
    fn test_dvb_api_discriminants() {
        // These values cross the boundary to the scanning engine unchanged.
        assert_eq!(DeliverySystem::DvbT as u8, 3);
        assert_eq!(DeliverySystem::DvbT2 as u8, 16);
        assert_eq!(Modulation::QamAuto as u8, 6);
        assert_eq!(CodeRate::Auto as u8, 9);
        assert_eq!(GuardInterval::Guard19_256 as u8, 7);
        assert_eq!(Hierarchy::None as u8, 0);
    }

    #[test]
    fn test_bool_name() {
        assert_eq!(bool_name(true), "true");
        assert_eq!(bool_name(false), "false");
    }
}
