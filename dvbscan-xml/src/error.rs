//! Error types for XML emission.

use thiserror::Error;

use dvbscan_types::DeliverySystem;

/// Errors that abort an XML emission sequence.
///
/// Both variants are fatal to the current document: a failed sink write is
/// propagated immediately with whatever partial output already reached the
/// sink, and a delivery system with no known output shape cannot be emitted
/// even partially.
#[derive(Error, Debug)]
pub enum DumpError {
    /// The output sink refused a write.
    #[error("XML output write failed: {0}")]
    Io(#[from] std::io::Error),

    /// No XML output shape is defined for this delivery system.
    #[error("unimplemented delivery system {} for XML output", .0.name())]
    UnsupportedDeliverySystem(DeliverySystem),
}
