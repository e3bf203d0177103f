//! Delivery-system aware XML service-list writer.
//!
//! Serializes scanned transponder and service records into the
//! `service_list` XML format. Output is conditional and data-driven: a
//! tuning parameter only appears when it applies to the transponder's
//! delivery system and its value differs from the system's default, so the
//! documents stay minimal and diffable between scans.
//!
//! Three pieces, leaves first:
//! - [`params`]: the static default-suppression table and
//!   [`should_emit`], the per-field decision function;
//! - [`escape`]: entity escaping for free-text attribute values;
//! - [`dump`]: [`XmlDumper`], which walks the record lists and writes the
//!   indented document to any [`std::io::Write`] sink.
//!
//! # Example
//!
//! ```rust
//! use dvbscan_types::{DeliverySystem, Transponder};
//! use dvbscan_xml::XmlDumper;
//!
//! let mut t = Transponder::new(8438, 13100, 13057, DeliverySystem::DvbT2);
//! t.frequency = 177_500_000;
//!
//! let mut out = Vec::new();
//! let mut dumper = XmlDumper::new(&mut out);
//! dumper.dump_prolog().unwrap();
//! dumper.dump_transponders(std::slice::from_ref(&t)).unwrap();
//! dumper.dump_epilog().unwrap();
//!
//! let xml = String::from_utf8(out).unwrap();
//! assert!(xml.contains("<transponder ONID=\"8438\" NID=\"13100\" TSID=\"13057\">"));
//! ```

pub mod dump;
pub mod error;
pub mod escape;
pub mod params;

pub use dump::XmlDumper;
pub use error::DumpError;
pub use escape::encode_entities;
pub use params::{should_emit, DeliverySystemSet, ParamDefault, PARAM_DEFAULTS};
