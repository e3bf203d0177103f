//! Transponder (tuned carrier) records produced by the scanning engine.

use serde::{Deserialize, Serialize};

use crate::enums::{
    Alpha, CodeRate, DeliverySystem, GuardInterval, Hierarchy, Interleaver, Modulation, Pilot,
    Polarization, Rolloff, TransmissionMode,
};

/// Marker default for parameters the scan never filled in.
///
/// No live tuning value ever equals this, so a parameter carrying it in the
/// default-suppression table is emitted whenever the scan assigned a real
/// value, and suppressed only while still unset.
pub const NO_AUTO: u16 = 1 << 15;

/// An alternate-frequency cell grouping (EN 300 468 cell list).
///
/// Only meaningful when the owning transponder's `other_frequency_flag`
/// is set; list order follows the order signalled in the NIT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Cell id from the cell frequency link descriptor.
    pub cell_id: u16,
    /// Centre frequencies in Hz, signalled order.
    pub center_frequencies: Vec<u32>,
}

/// A tuned carrier and its delivery-system parameters.
///
/// Populated by the scanning engine before serialization; the XML writer
/// treats every field as read-only. Which fields end up in the output is
/// decided per delivery system by the default-suppression table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transponder {
    /// Original network id from the SDT/NIT.
    pub original_network_id: u16,
    /// Network id from the NIT.
    pub network_id: u16,
    /// Transport stream id.
    pub transport_stream_id: u16,
    /// Centre frequency in Hz.
    pub frequency: u32,
    /// Delivery system; immutable once the carrier locked.
    pub delivery_system: DeliverySystem,

    pub modulation: Modulation,
    /// Bandwidth in Hz, or [`NO_AUTO`] while unset.
    pub bandwidth: u32,
    pub coderate: CodeRate,
    /// Code rate of the low-priority stream (hierarchical modes only).
    pub coderate_lp: CodeRate,
    /// Symbol rate in symbols per second (satellite and cable).
    pub symbolrate: u32,
    pub transmission: TransmissionMode,
    pub guard: GuardInterval,
    pub hierarchy: Hierarchy,
    pub alpha: Alpha,
    pub terr_interleaver: Interleaver,
    /// High-priority stream selected (hierarchical modes only).
    pub priority: bool,
    pub mpe_fec: bool,
    pub time_slicing: bool,
    pub rolloff: Rolloff,
    pub pilot: Pilot,
    pub polarization: Polarization,
    /// DVB-T2 / DVB-C2 system id.
    pub system_id: u16,
    /// Physical layer pipe id (DVB-T2 / DVB-C2).
    pub plp_id: u8,
    /// Set when the NIT signals the carrier on additional frequencies.
    pub other_frequency_flag: bool,
    /// Time-frequency slicing in use (DVB-T2).
    pub tfs_flag: bool,
    /// Alternate-frequency cells, signalled order.
    pub cells: Vec<Cell>,
}

impl Transponder {
    /// Create a transponder with every tuning parameter at its
    /// variant-neutral auto/unset value.
    ///
    /// The scanning engine overwrites fields as descriptors come in; a
    /// field still at its seed value is suppressed from the XML output
    /// when the seed matches the table default for the delivery system.
    pub fn new(
        original_network_id: u16,
        network_id: u16,
        transport_stream_id: u16,
        delivery_system: DeliverySystem,
    ) -> Self {
        Self {
            original_network_id,
            network_id,
            transport_stream_id,
            frequency: 0,
            delivery_system,
            modulation: Modulation::QamAuto,
            bandwidth: NO_AUTO as u32,
            coderate: CodeRate::Auto,
            coderate_lp: CodeRate::None,
            symbolrate: 0,
            transmission: TransmissionMode::Auto,
            guard: GuardInterval::Auto,
            hierarchy: Hierarchy::None,
            alpha: Alpha::Auto,
            terr_interleaver: Interleaver::Auto,
            priority: true,
            mpe_fec: false,
            time_slicing: false,
            rolloff: Rolloff::Auto,
            pilot: Pilot::Auto,
            polarization: Polarization::Horizontal,
            system_id: 0,
            plp_id: 0,
            other_frequency_flag: false,
            tfs_flag: false,
            cells: Vec::new(),
        }
    }
}
