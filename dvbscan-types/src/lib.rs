//! Tuning and service data model for dvbscan XML output.
//!
//! This crate defines the in-memory representation of scanned broadcast
//! reception metadata: the delivery-system and tuning-parameter enumerations
//! (with discriminants compatible with the Linux DVB frontend API), the
//! [`Transponder`] record describing a tuned carrier, and the [`Service`]
//! record describing a broadcast service carried on it.
//!
//! The scanning engine populates these records; the `dvbscan-xml` crate
//! serializes them. Everything here is plain read-only data with no
//! behaviour beyond name lookup for the enumerated constants.
//!
//! ```rust
//! use dvbscan_types::{DeliverySystem, Modulation, Transponder};
//!
//! let mut t = Transponder::new(8438, 13100, 13057, DeliverySystem::DvbT2);
//! t.frequency = 177_500_000;
//! assert_eq!(t.modulation, Modulation::QamAuto);
//! assert_eq!(t.delivery_system.name(), "SYS_DVBT2");
//! ```

pub mod enums;
pub mod service;
pub mod transponder;

pub use enums::{
    bool_name, Alpha, CodeRate, DeliverySystem, GuardInterval, Hierarchy, Interleaver, Modulation,
    Pilot, Polarization, Rolloff, TransmissionMode,
};
pub use service::{
    stream_type, stream_type_description, AudioStream, Service, Subtitle, AC3_CHAN_MAX,
    AUDIO_CHAN_MAX, CA_SYSTEM_ID_MAX, SUBTITLES_MAX,
};
pub use transponder::{Cell, Transponder, NO_AUTO};
