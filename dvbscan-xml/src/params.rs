//! Default-suppression table for XML tuning parameters.
//!
//! Every tuning parameter that can appear in the XML output has one table
//! entry per (name, default) combination: the set of delivery systems the
//! parameter applies to, and the value that is considered the default for
//! those systems. A parameter is written to the output only when it applies
//! to the transponder's delivery system and its value differs from the
//! default, which keeps the documents minimal and diffable.

use std::collections::HashMap;

use log::warn;
use once_cell::sync::Lazy;

use dvbscan_types::{
    CodeRate, DeliverySystem, GuardInterval, Hierarchy, Interleaver, Modulation, Pilot, Rolloff,
    TransmissionMode, NO_AUTO,
};

/// DTMB time interleaving default (fe_interleaving INTERLEAVING_AUTO).
const INTERLEAVING_AUTO: u16 = 1;
/// DVB-C2 tuning frequency type default (centre frequency).
const C2_SYSTEM_CENTER_FREQUENCY: u16 = 0;
/// DVB-C2 active OFDM symbol duration default (4k FFT, 8 MHz).
const FFT_4K_8MHZ: u16 = 0;

/// A finite set of delivery systems, one bit per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliverySystemSet(u32);

impl DeliverySystemSet {
    /// Build a set from a list of delivery systems.
    pub const fn of(systems: &[DeliverySystem]) -> Self {
        let mut bits = 0u32;
        let mut i = 0;
        while i < systems.len() {
            bits |= 1 << (systems[i] as u32);
            i += 1;
        }
        Self(bits)
    }

    /// Membership test.
    pub const fn contains(self, system: DeliverySystem) -> bool {
        self.0 & (1 << (system as u32)) != 0
    }

    /// Number of member systems.
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// One entry of the default-suppression table.
#[derive(Debug, Clone, Copy)]
pub struct ParamDefault {
    /// Parameter name as referenced by the emission engine.
    pub name: &'static str,
    /// Delivery systems this entry applies to; never empty.
    pub delsys: DeliverySystemSet,
    /// Default value; fields equal to it are suppressed.
    pub default: u16,
}

use DeliverySystem::*;

/// The table, in consultation order. For a repeated name only the first
/// entry is ever consulted.
pub static PARAM_DEFAULTS: &[ParamDefault] = &[
    // terrestrial_delivery_system_descriptor
    ParamDefault {
        name: "bandwidth",
        delsys: DeliverySystemSet::of(&[DvbT, DvbT2]),
        default: NO_AUTO,
    },
    ParamDefault {
        name: "priority",
        delsys: DeliverySystemSet::of(&[DvbT, DvbT2]),
        default: 1,
    },
    // EN 301 192
    ParamDefault {
        name: "time_slicing",
        delsys: DeliverySystemSet::of(&[DvbT]),
        default: 0,
    },
    ParamDefault {
        name: "mpe_fec",
        delsys: DeliverySystemSet::of(&[DvbT, DvbT2]),
        default: 0,
    },
    ParamDefault {
        name: "modulation",
        delsys: DeliverySystemSet::of(&[
            DvbCAnnexA, DvbCAnnexB, DvbCAnnexC, DvbT, DvbT2, DvbS, DvbS2, Dss, Turbo, DvbH, IsdbT,
            IsdbS, IsdbC, Atsc, AtscMh, Dtmb, Cmmb, Dab,
        ]),
        default: Modulation::QamAuto as u16,
    },
    ParamDefault {
        name: "hierarchy",
        delsys: DeliverySystemSet::of(&[DvbT, DvbT2]),
        default: Hierarchy::None as u16,
    },
    // EN 300 468 table 46: alpha values and the used interleaver
    ParamDefault {
        name: "alpha",
        delsys: DeliverySystemSet::of(&[DvbT, DvbT2]),
        default: NO_AUTO,
    },
    ParamDefault {
        name: "terr_interleaver",
        delsys: DeliverySystemSet::of(&[DvbT, DvbT2]),
        default: Interleaver::Auto as u16,
    },
    ParamDefault {
        name: "coderate",
        delsys: DeliverySystemSet::of(&[
            DvbT, DvbT2, DvbS, DvbS2, Dss, Turbo, DvbCAnnexA, DvbCAnnexB, DvbCAnnexC, Dtmb,
        ]),
        default: CodeRate::Auto as u16,
    },
    ParamDefault {
        name: "coderate_LP",
        delsys: DeliverySystemSet::of(&[DvbT, DvbT2]),
        default: CodeRate::None as u16,
    },
    ParamDefault {
        name: "guard",
        delsys: DeliverySystemSet::of(&[DvbT, DvbT2, Dtmb]),
        default: GuardInterval::Auto as u16,
    },
    ParamDefault {
        name: "transmission",
        delsys: DeliverySystemSet::of(&[DvbT, DvbT2, Dtmb]),
        default: TransmissionMode::Auto as u16,
    },
    ParamDefault {
        name: "other_frequency_flag",
        delsys: DeliverySystemSet::of(&[DvbT, DvbT2]),
        default: 0,
    },
    // T2_delivery_system_descriptor
    ParamDefault {
        name: "plp_id",
        delsys: DeliverySystemSet::of(&[DvbT2, DvbC2]),
        default: 0,
    },
    ParamDefault {
        name: "system_id",
        delsys: DeliverySystemSet::of(&[DvbT2, DvbC2]),
        default: 0,
    },
    // present only when descriptor_length > 4
    ParamDefault {
        name: "extended_info",
        delsys: DeliverySystemSet::of(&[DvbT2]),
        default: 1,
    },
    ParamDefault {
        name: "siso_miso",
        delsys: DeliverySystemSet::of(&[DvbT2]),
        default: 0,
    },
    ParamDefault {
        name: "tfs_flag",
        delsys: DeliverySystemSet::of(&[DvbT2]),
        default: 0,
    },
    // satellite_delivery_system_descriptor
    ParamDefault {
        name: "orbital_position",
        delsys: DeliverySystemSet::of(&[DvbS, DvbS2, Dss, Turbo]),
        default: 0x0192,
    },
    ParamDefault {
        name: "west_east_flag",
        delsys: DeliverySystemSet::of(&[DvbS, DvbS2, Dss, Turbo]),
        default: b'E' as u16,
    },
    ParamDefault {
        name: "polarization",
        delsys: DeliverySystemSet::of(&[DvbS, DvbS2, Dss, Turbo]),
        default: NO_AUTO,
    },
    ParamDefault {
        name: "rolloff",
        delsys: DeliverySystemSet::of(&[DvbS2]),
        default: Rolloff::Auto as u16,
    },
    ParamDefault {
        name: "symbolrate",
        delsys: DeliverySystemSet::of(&[
            DvbS, DvbS2, Dss, Turbo, DvbCAnnexA, DvbCAnnexB, DvbCAnnexC,
        ]),
        default: NO_AUTO,
    },
    // S2_satellite_delivery_system_descriptor
    ParamDefault {
        name: "multiple_input_stream_flag",
        delsys: DeliverySystemSet::of(&[DvbS2]),
        default: 0,
    },
    ParamDefault {
        name: "scrambling_sequence_selector",
        delsys: DeliverySystemSet::of(&[DvbS2]),
        default: 0,
    },
    ParamDefault {
        name: "scrambling_sequence_index",
        delsys: DeliverySystemSet::of(&[DvbS2]),
        default: 0,
    },
    ParamDefault {
        name: "input_stream_id",
        delsys: DeliverySystemSet::of(&[DvbS2]),
        default: NO_AUTO,
    },
    ParamDefault {
        name: "pilot",
        delsys: DeliverySystemSet::of(&[DvbS2]),
        default: Pilot::Auto as u16,
    },
    ParamDefault {
        name: "interleave",
        delsys: DeliverySystemSet::of(&[Dtmb]),
        default: INTERLEAVING_AUTO,
    },
    // C2_delivery_system_descriptor
    ParamDefault {
        name: "data_slice_id",
        delsys: DeliverySystemSet::of(&[DvbC2]),
        default: 0,
    },
    ParamDefault {
        name: "C2_System_tuning_frequency_type",
        delsys: DeliverySystemSet::of(&[DvbC2]),
        default: C2_SYSTEM_CENTER_FREQUENCY,
    },
    ParamDefault {
        name: "active_OFDM_symbol_duration",
        delsys: DeliverySystemSet::of(&[DvbC2]),
        default: FFT_4K_8MHZ,
    },
];

/// Lookup map built once: parameter name to its (set, default) pairs in
/// table order.
static PARAM_LOOKUP: Lazy<HashMap<&'static str, Vec<(DeliverySystemSet, u16)>>> =
    Lazy::new(|| {
        let mut map: HashMap<&'static str, Vec<(DeliverySystemSet, u16)>> = HashMap::new();
        for p in PARAM_DEFAULTS {
            map.entry(p.name).or_default().push((p.delsys, p.default));
        }
        map
    });

/// Decide from an ordered pair list whether a value must be emitted.
///
/// Only the first pair is consulted, even when later pairs would match the
/// delivery system. First-match, not best-match.
fn decide(pairs: &[(DeliverySystemSet, u16)], delsys: DeliverySystem, value: u16) -> bool {
    match pairs.first() {
        Some(&(applicable, default)) => applicable.contains(delsys) && value != default,
        None => false,
    }
}

/// Decide whether `param` with the given value must appear in the output
/// for a transponder on `delsys`.
///
/// A name missing from the table is a configuration defect: it is reported
/// as a warning and the field is suppressed, failing toward smaller output.
pub fn should_emit(param: &str, delsys: DeliverySystem, value: u16) -> bool {
    match PARAM_LOOKUP.get(param) {
        Some(pairs) => decide(pairs, delsys, value),
        None => {
            warn!("could not find \"{param}\" in the list of xml params");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_membership() {
        let set = DeliverySystemSet::of(&[DvbT, DvbT2]);
        assert!(set.contains(DvbT));
        assert!(set.contains(DvbT2));
        assert!(!set.contains(DvbS));
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert!(DeliverySystemSet::of(&[]).is_empty());
    }

    #[test]
    fn test_default_value_is_suppressed() {
        assert!(!should_emit(
            "modulation",
            DvbT2,
            Modulation::QamAuto as u16
        ));
        assert!(!should_emit("plp_id", DvbT2, 0));
        assert!(!should_emit("hierarchy", DvbT, Hierarchy::None as u16));
    }

    #[test]
    fn test_non_default_value_is_emitted() {
        assert!(should_emit("modulation", DvbT2, Modulation::Qam64 as u16));
        assert!(should_emit("plp_id", DvbT2, 1));
        assert!(should_emit("guard", DvbT, GuardInterval::Guard19_256 as u16));
        // NO_AUTO defaults: any live value differs.
        assert!(should_emit("bandwidth", DvbT, 8000));
    }

    #[test]
    fn test_inapplicable_delivery_system_is_suppressed() {
        // bandwidth applies to DVB-T/T2 only; value is irrelevant for DVB-S.
        assert!(!should_emit("bandwidth", DvbS, 8000));
        assert!(!should_emit("bandwidth", DvbS, NO_AUTO));
        assert!(!should_emit("pilot", DvbS, Pilot::On as u16));
    }

    #[test]
    fn test_unknown_parameter_is_suppressed() {
        assert!(!should_emit("no_such_param", DvbT, 1));
    }

    #[test]
    fn test_first_match_determinism() {
        // Two entries for the same name: only the first is consulted, so a
        // delivery system covered only by the second never emits.
        let pairs = [
            (DeliverySystemSet::of(&[DvbT]), 0u16),
            (DeliverySystemSet::of(&[DvbS]), 5u16),
        ];
        assert!(decide(&pairs, DvbT, 1));
        assert!(!decide(&pairs, DvbT, 0));
        assert!(!decide(&pairs, DvbS, 1));
        assert!(!decide(&pairs, DvbS, 99));
    }

    #[test]
    fn test_every_table_entry_has_members() {
        for p in PARAM_DEFAULTS {
            assert!(!p.name.is_empty());
            assert!(!p.delsys.is_empty(), "{} has no delivery systems", p.name);
        }
    }
}
