//! XML service-list emission.
//!
//! [`XmlDumper`] walks transponder and service records and writes the
//! service-list XML document to any [`std::io::Write`] sink. Fields are
//! gated per delivery system through [`should_emit`]; free text goes
//! through [`encode_entities`]. Elements are indented three spaces per
//! nesting level, never with tabs.
//!
//! A full document is one sequence of calls on the same dumper:
//! prolog, transponder list and/or service blocks, epilog. The sink must
//! not be shared with other writers for the duration of the sequence.

use std::io::Write;

use dvbscan_types::{
    bool_name, stream_type_description, DeliverySystem, Hierarchy, Polarization, Service,
    Transponder,
};

use crate::error::DumpError;
use crate::escape::encode_entities;
use crate::params::should_emit;

/// Spaces per nesting level.
const INDENT_STEP: &str = "   ";

/// Writer for the service-list XML format.
pub struct XmlDumper<W: Write> {
    dest: W,
    indent: usize,
}

impl<W: Write> XmlDumper<W> {
    /// Create a dumper writing to `dest`, starting at nesting depth 0.
    pub fn new(dest: W) -> Self {
        Self { dest, indent: 0 }
    }

    /// Current nesting depth. 0 before the prolog and after the epilog;
    /// every balanced open/close pair restores it.
    pub fn depth(&self) -> usize {
        self.indent
    }

    /// Consume the dumper and hand back the sink.
    pub fn into_inner(self) -> W {
        self.dest
    }

    fn pad(&self) -> String {
        INDENT_STEP.repeat(self.indent)
    }

    /// Write the XML declaration and open the `service_list` root.
    pub fn dump_prolog(&mut self) -> Result<(), DumpError> {
        writeln!(
            self.dest,
            "<?xml version=\"1.0\" encoding=\"iso-8859-1\" standalone=\"yes\"?>"
        )?;
        writeln!(self.dest, "{}<service_list>", self.pad())?;
        self.indent += 1;
        Ok(())
    }

    /// Close the `service_list` root.
    pub fn dump_epilog(&mut self) -> Result<(), DumpError> {
        self.indent -= 1;
        writeln!(self.dest, "{}</service_list>", self.pad())?;
        Ok(())
    }

    /// Write the `transponders` block, one `transponder` element per list
    /// entry in list order.
    ///
    /// Fails with [`DumpError::UnsupportedDeliverySystem`] on the first
    /// transponder whose delivery system has no defined output shape;
    /// whatever was already written stays on the sink.
    pub fn dump_transponders(&mut self, transponders: &[Transponder]) -> Result<(), DumpError> {
        writeln!(self.dest, "{}<transponders>", self.pad())?;

        for t in transponders {
            self.indent += 1;
            writeln!(
                self.dest,
                "{}<transponder ONID=\"{}\" NID=\"{}\" TSID=\"{}\">",
                self.pad(),
                t.original_network_id,
                t.network_id,
                t.transport_stream_id
            )?;
            self.indent += 1;
            writeln!(
                self.dest,
                "{}<delivery_system>{}</delivery_system>",
                self.pad(),
                t.delivery_system.name()
            )?;
            writeln!(
                self.dest,
                "{}<frequency>{:.3}</frequency>",
                self.pad(),
                f64::from(t.frequency) / 1e6
            )?;

            match t.delivery_system {
                DeliverySystem::DvbT | DeliverySystem::DvbT2 => self.dump_terrestrial(t)?,
                DeliverySystem::DvbS | DeliverySystem::DvbS2 => self.dump_satellite(t)?,
                other => return Err(DumpError::UnsupportedDeliverySystem(other)),
            }

            self.indent -= 1;
            writeln!(self.dest, "{}</transponder>", self.pad())?;
            self.indent -= 1;
        }

        writeln!(self.dest, "{}</transponders>", self.pad())?;
        Ok(())
    }

    /// DVB-T / DVB-T2 parameter block.
    fn dump_terrestrial(&mut self, t: &Transponder) -> Result<(), DumpError> {
        let ds = t.delivery_system;

        writeln!(
            self.dest,
            "{}<modulation>{}</modulation>",
            self.pad(),
            t.modulation.name()
        )?;
        if should_emit("bandwidth", ds, t.bandwidth as u16) {
            writeln!(
                self.dest,
                "{}<bandwidth>{:.3}</bandwidth>",
                self.pad(),
                f64::from(t.bandwidth) / 1e6
            )?;
        }
        if should_emit("coderate", ds, t.coderate as u16) {
            writeln!(
                self.dest,
                "{}<coderate>{}</coderate>",
                self.pad(),
                t.coderate.name()
            )?;
        }
        if should_emit("transmission", ds, t.transmission as u16) {
            writeln!(
                self.dest,
                "{}<transmission>{}</transmission>",
                self.pad(),
                t.transmission.name()
            )?;
        }
        if should_emit("guard", ds, t.guard as u16) {
            writeln!(self.dest, "{}<guard>{}</guard>", self.pad(), t.guard.name())?;
        }
        if t.hierarchy != Hierarchy::None {
            // These are only meaningful while hierarchy is in use.
            if should_emit("hierarchy", ds, t.hierarchy as u16) {
                writeln!(
                    self.dest,
                    "{}<hierarchy>{}</hierarchy>",
                    self.pad(),
                    t.hierarchy.name()
                )?;
            }
            if should_emit("alpha", ds, t.alpha as u16) {
                writeln!(self.dest, "{}<alpha>{}</alpha>", self.pad(), t.alpha.name())?;
            }
            if should_emit("terr_interleaver", ds, t.terr_interleaver as u16) {
                writeln!(
                    self.dest,
                    "{}<terr_interleaver>{}</terr_interleaver>",
                    self.pad(),
                    t.terr_interleaver.name()
                )?;
            }
            if should_emit("coderate_LP", ds, t.coderate_lp as u16) {
                writeln!(
                    self.dest,
                    "{}<coderate_LP>{}</coderate_LP>",
                    self.pad(),
                    t.coderate_lp.name()
                )?;
            }
            if should_emit("priority", ds, t.priority as u16) {
                writeln!(
                    self.dest,
                    "{}<priority>{}</priority>",
                    self.pad(),
                    bool_name(t.priority)
                )?;
            }
        }
        if should_emit("mpe_fec", ds, t.mpe_fec as u16) {
            writeln!(
                self.dest,
                "{}<mpe_fec>{}</mpe_fec>",
                self.pad(),
                bool_name(t.mpe_fec)
            )?;
        }
        if should_emit("time_slicing", ds, t.time_slicing as u16) {
            writeln!(
                self.dest,
                "{}<time_slicing>{}</time_slicing>",
                self.pad(),
                bool_name(t.time_slicing)
            )?;
        }
        if should_emit("system_id", ds, t.system_id) {
            writeln!(
                self.dest,
                "{}<system_id>{}</system_id>",
                self.pad(),
                t.system_id
            )?;
        }
        if should_emit("plp_id", ds, u16::from(t.plp_id)) {
            writeln!(self.dest, "{}<plp_id>{}</plp_id>", self.pad(), t.plp_id)?;
        }

        if t.other_frequency_flag
            && !t.cells.is_empty()
            && should_emit("other_frequency_flag", ds, t.other_frequency_flag as u16)
        {
            writeln!(
                self.dest,
                "{}<other_frequency_flag>{}</other_frequency_flag>",
                self.pad(),
                bool_name(true)
            )?;
            writeln!(self.dest, "{}<frequency_list>", self.pad())?;
            self.indent += 1;
            for cell in &t.cells {
                for &freq in &cell.center_frequencies {
                    if t.tfs_flag {
                        writeln!(
                            self.dest,
                            "{}<tfs_center>{:.3}</tfs_center>",
                            self.pad(),
                            f64::from(freq) / 1e6
                        )?;
                    } else {
                        writeln!(
                            self.dest,
                            "{}<frequency>{:.3}</frequency>",
                            self.pad(),
                            f64::from(freq) / 1e6
                        )?;
                    }
                }
            }
            self.indent -= 1;
            writeln!(self.dest, "{}</frequency_list>", self.pad())?;
        }

        Ok(())
    }

    /// DVB-S / DVB-S2 parameter block.
    ///
    /// Modulation, coderate and symbolrate are written unconditionally;
    /// the receiver cannot tune a satellite mux without them, so suppressing
    /// them is never useful.
    fn dump_satellite(&mut self, t: &Transponder) -> Result<(), DumpError> {
        writeln!(
            self.dest,
            "{}<modulation>{}</modulation>",
            self.pad(),
            t.modulation.name()
        )?;
        writeln!(
            self.dest,
            "{}<coderate>{}</coderate>",
            self.pad(),
            t.coderate.name()
        )?;
        // kilosymbols per second
        writeln!(
            self.dest,
            "{}<symbolrate>{}</symbolrate>",
            self.pad(),
            t.symbolrate / 1000
        )?;

        let pol = match t.polarization {
            Polarization::Horizontal => "H",
            Polarization::Vertical => "V",
            _ => "",
        };
        writeln!(
            self.dest,
            "{}<polarization>{}</polarization>",
            self.pad(),
            pol
        )?;

        Ok(())
    }

    /// Open the `services` container.
    pub fn dump_services_open(&mut self) -> Result<(), DumpError> {
        writeln!(self.dest, "{}<services>", self.pad())?;
        self.indent += 1;
        Ok(())
    }

    /// Close the `services` container.
    pub fn dump_services_close(&mut self) -> Result<(), DumpError> {
        self.indent -= 1;
        writeln!(self.dest, "{}</services>", self.pad())?;
        Ok(())
    }

    /// Write one `service` element, associated with its originating
    /// transponder through the ONID/TSID attributes.
    pub fn dump_service(&mut self, s: &Service, t: &Transponder) -> Result<(), DumpError> {
        writeln!(
            self.dest,
            "{}<service ONID=\"{}\" TSID=\"{}\" SID=\"{}\">",
            self.pad(),
            t.original_network_id,
            t.transport_stream_id,
            s.service_id
        )?;
        self.indent += 1;

        writeln!(
            self.dest,
            "{}<name char256=\"{}\"/>",
            self.pad(),
            encode_entities(&s.service_name)
        )?;
        writeln!(
            self.dest,
            "{}<provider char256=\"{}\"/>",
            self.pad(),
            encode_entities(&s.provider_name)
        )?;
        writeln!(self.dest, "{}<pcr pid=\"{}\"/>", self.pad(), s.pcr_pid)?;
        writeln!(
            self.dest,
            "{}<logical channel_number=\"{}\"/>",
            self.pad(),
            s.logical_channel_number
        )?;

        writeln!(self.dest, "{}<streams>", self.pad())?;
        self.indent += 1;
        writeln!(
            self.dest,
            "{}<stream type=\"{}\" pid=\"{}\" description=\"{}\"/>",
            self.pad(),
            s.video_stream_type,
            s.video_pid,
            stream_type_description(s.video_stream_type)
        )?;
        for a in s.audio.iter().chain(s.ac3.iter()) {
            if a.stream_type == 0 {
                continue;
            }
            writeln!(
                self.dest,
                "{}<stream type=\"{}\" pid=\"{}\" description=\"{}\" language_code=\"{}\"/>",
                self.pad(),
                a.stream_type,
                a.pid,
                stream_type_description(a.stream_type),
                a.lang
            )?;
        }
        self.indent -= 1;
        writeln!(self.dest, "{}</streams>", self.pad())?;

        writeln!(self.dest, "{}<subtitles>", self.pad())?;
        self.indent += 1;
        for sub in &s.subtitles {
            if sub.pid == 0 {
                continue;
            }
            writeln!(
                self.dest,
                "{}<subtitle pid=\"{}\" type=\"{}\" composition_page=\"{}\" ancillary_page=\"{}\" language_code=\"{}\"/>",
                self.pad(),
                sub.pid,
                sub.subtitling_type,
                sub.composition_page_id,
                sub.ancillary_page_id,
                sub.lang
            )?;
        }
        self.indent -= 1;
        writeln!(self.dest, "{}</subtitles>", self.pad())?;

        writeln!(self.dest, "{}<CA_systems>", self.pad())?;
        self.indent += 1;
        for &ca_id in &s.ca_ids {
            if ca_id == 0 {
                continue;
            }
            writeln!(
                self.dest,
                "{}<CA_system ca_id=\"0x{:04X}\"/>",
                self.pad(),
                ca_id
            )?;
        }
        self.indent -= 1;
        writeln!(self.dest, "{}</CA_systems>", self.pad())?;

        writeln!(self.dest, "{}<comment char256=\"\"/>", self.pad())?;

        self.indent -= 1;
        writeln!(self.dest, "{}</service>", self.pad())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dvbscan_types::{
        AudioStream, Cell, CodeRate, GuardInterval, Modulation, Subtitle, TransmissionMode,
    };

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut XmlDumper<&mut Vec<u8>>) -> Result<(), DumpError>,
    {
        let mut buf = Vec::new();
        let mut dumper = XmlDumper::new(&mut buf);
        f(&mut dumper).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_t2_transponder_with_defaults_suppressed() {
        let mut t = Transponder::new(8438, 13100, 13057, DeliverySystem::DvbT2);
        t.frequency = 177_500_000;

        let out = render(|d| d.dump_transponders(std::slice::from_ref(&t)));
        assert_eq!(
            out,
            "<transponders>\n\
             \x20\x20\x20<transponder ONID=\"8438\" NID=\"13100\" TSID=\"13057\">\n\
             \x20\x20\x20\x20\x20\x20<delivery_system>SYS_DVBT2</delivery_system>\n\
             \x20\x20\x20\x20\x20\x20<frequency>177.500</frequency>\n\
             \x20\x20\x20\x20\x20\x20<modulation>QAM_AUTO</modulation>\n\
             \x20\x20\x20</transponder>\n\
             </transponders>\n"
        );
        // modulation is always present; everything at its default is not
        assert!(!out.contains("<bandwidth>"));
        assert!(!out.contains("<hierarchy>"));
        assert!(!out.contains("<plp_id>"));
    }

    #[test]
    fn test_t2_transponder_with_non_defaults_emitted() {
        let mut t = Transponder::new(8438, 13100, 13057, DeliverySystem::DvbT2);
        t.frequency = 177_500_000;
        t.bandwidth = 8_000_000;
        t.coderate = CodeRate::Fec2_3;
        t.transmission = TransmissionMode::Mode32k;
        t.guard = GuardInterval::Guard19_256;
        t.system_id = 12_345;
        t.plp_id = 1;

        let out = render(|d| d.dump_transponders(std::slice::from_ref(&t)));
        assert!(out.contains("<bandwidth>8.000</bandwidth>"));
        assert!(out.contains("<coderate>FEC_2_3</coderate>"));
        assert!(out.contains("<transmission>TRANSMISSION_MODE_32K</transmission>"));
        assert!(out.contains("<guard>GUARD_INTERVAL_19_256</guard>"));
        assert!(out.contains("<system_id>12345</system_id>"));
        assert!(out.contains("<plp_id>1</plp_id>"));
    }

    #[test]
    fn test_hierarchy_group_only_when_hierarchy_in_use() {
        let mut t = Transponder::new(1, 2, 3, DeliverySystem::DvbT);
        t.hierarchy = Hierarchy::H2;
        t.coderate_lp = CodeRate::Fec1_2;
        t.priority = false;

        let out = render(|d| d.dump_transponders(std::slice::from_ref(&t)));
        assert!(out.contains("<hierarchy>HIERARCHY_2</hierarchy>"));
        assert!(out.contains("<coderate_LP>FEC_1_2</coderate_LP>"));
        assert!(out.contains("<priority>false</priority>"));

        t.hierarchy = Hierarchy::None;
        let out = render(|d| d.dump_transponders(std::slice::from_ref(&t)));
        assert!(!out.contains("<hierarchy>"));
        assert!(!out.contains("<coderate_LP>"));
        assert!(!out.contains("<priority>"));
    }

    #[test]
    fn test_frequency_list_preserves_cell_order() {
        let mut t = Transponder::new(1, 2, 3, DeliverySystem::DvbT2);
        t.other_frequency_flag = true;
        t.cells = vec![
            Cell {
                cell_id: 1,
                center_frequencies: vec![474_000_000, 482_000_000],
            },
            Cell {
                cell_id: 2,
                center_frequencies: vec![490_000_000],
            },
        ];

        let out = render(|d| d.dump_transponders(std::slice::from_ref(&t)));
        assert!(out.contains("<other_frequency_flag>true</other_frequency_flag>"));
        let a = out.find("<frequency>474.000</frequency>").unwrap();
        let b = out.find("<frequency>482.000</frequency>").unwrap();
        let c = out.find("<frequency>490.000</frequency>").unwrap();
        assert!(a < b && b < c);

        t.tfs_flag = true;
        let out = render(|d| d.dump_transponders(std::slice::from_ref(&t)));
        assert!(out.contains("<tfs_center>474.000</tfs_center>"));
        assert!(!out.contains("<frequency>474.000</frequency>"));
    }

    #[test]
    fn test_no_frequency_list_without_cells() {
        let mut t = Transponder::new(1, 2, 3, DeliverySystem::DvbT2);
        t.other_frequency_flag = true;

        let out = render(|d| d.dump_transponders(std::slice::from_ref(&t)));
        assert!(!out.contains("<other_frequency_flag>"));
        assert!(!out.contains("<frequency_list>"));
    }

    #[test]
    fn test_satellite_block_is_unconditional() {
        let mut t = Transponder::new(1, 2, 3, DeliverySystem::DvbS);
        t.frequency = 11_362_000;
        t.modulation = Modulation::Qpsk;
        t.coderate = CodeRate::Fec3_4;
        t.symbolrate = 27_500_000;
        t.polarization = Polarization::Vertical;

        let out = render(|d| d.dump_transponders(std::slice::from_ref(&t)));
        assert!(out.contains("<modulation>QPSK</modulation>"));
        assert!(out.contains("<coderate>FEC_3_4</coderate>"));
        assert!(out.contains("<symbolrate>27500</symbolrate>"));
        assert!(out.contains("<polarization>V</polarization>"));

        // Circular polarization has no single-character code.
        t.polarization = Polarization::CircularLeft;
        let out = render(|d| d.dump_transponders(std::slice::from_ref(&t)));
        assert!(out.contains("<polarization></polarization>"));
    }

    #[test]
    fn test_unsupported_delivery_system_is_fatal() {
        let t = Transponder::new(1, 2, 3, DeliverySystem::Atsc);
        let mut buf = Vec::new();
        let mut dumper = XmlDumper::new(&mut buf);
        let err = dumper.dump_transponders(std::slice::from_ref(&t)).unwrap_err();
        match err {
            DumpError::UnsupportedDeliverySystem(ds) => assert_eq!(ds, DeliverySystem::Atsc),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_service_element() {
        let t = Transponder::new(8438, 13100, 13057, DeliverySystem::DvbT2);
        let mut s = Service::new(102);
        s.service_name = "Nelonen \"Pro\" 2".to_string();
        s.provider_name = "DNA".to_string();
        s.logical_channel_number = 24;
        s.pcr_pid = 213;
        s.video_pid = 213;
        s.video_stream_type = 27;
        s.audio = vec![
            AudioStream {
                pid: 330,
                stream_type: 4,
                lang: "fin".to_string(),
            },
            // empty slot, must be skipped
            AudioStream::default(),
        ];
        s.ac3 = vec![AudioStream {
            pid: 331,
            stream_type: 0x81,
            lang: "swe".to_string(),
        }];
        s.subtitles = vec![Subtitle {
            pid: 700,
            subtitling_type: 16,
            composition_page_id: 1,
            ancillary_page_id: 2,
            lang: "fin".to_string(),
        }];
        s.ca_ids = vec![0x0B00, 0, 0x0B02];

        let out = render(|d| d.dump_service(&s, &t));
        assert!(out.starts_with("<service ONID=\"8438\" TSID=\"13057\" SID=\"102\">"));
        assert!(out.contains("<name char256=\"Nelonen &quot;Pro&quot; 2\"/>"));
        assert!(out.contains("<provider char256=\"DNA\"/>"));
        assert!(out.contains("<pcr pid=\"213\"/>"));
        assert!(out.contains("<logical channel_number=\"24\"/>"));
        assert!(out.contains(
            "<stream type=\"27\" pid=\"213\" description=\"AVC Video stream, \
             ITU-T Rec. H.264 | ISO/IEC 14496-10\"/>"
        ));
        assert!(out.contains("language_code=\"fin\""));
        assert!(out.contains("<stream type=\"129\" pid=\"331\""));
        assert_eq!(out.matches("<stream ").count(), 3);
        assert!(out.contains(
            "<subtitle pid=\"700\" type=\"16\" composition_page=\"1\" \
             ancillary_page=\"2\" language_code=\"fin\"/>"
        ));
        assert!(out.contains("<CA_system ca_id=\"0x0B00\"/>"));
        assert!(out.contains("<CA_system ca_id=\"0x0B02\"/>"));
        assert_eq!(out.matches("<CA_system ").count(), 2);
        assert!(out.contains("<comment char256=\"\"/>"));
        assert!(out.trim_end().ends_with("</service>"));
    }

    #[test]
    fn test_full_document_depth_balance() {
        let mut t = Transponder::new(8438, 13100, 13057, DeliverySystem::DvbT2);
        t.frequency = 177_500_000;
        let s = Service::new(102);

        let mut buf = Vec::new();
        let mut dumper = XmlDumper::new(&mut buf);
        assert_eq!(dumper.depth(), 0);
        dumper.dump_prolog().unwrap();
        dumper.dump_transponders(std::slice::from_ref(&t)).unwrap();
        dumper.dump_services_open().unwrap();
        dumper.dump_service(&s, &t).unwrap();
        dumper.dump_services_close().unwrap();
        dumper.dump_epilog().unwrap();
        assert_eq!(dumper.depth(), 0);

        let out = String::from_utf8(buf).unwrap();
        assert!(out.starts_with(
            "<?xml version=\"1.0\" encoding=\"iso-8859-1\" standalone=\"yes\"?>\n<service_list>\n"
        ));
        assert!(out.ends_with("</service_list>\n"));
        // container tags line up with their openers
        assert!(out.contains("\n   <transponders>\n"));
        assert!(out.contains("\n   </transponders>\n"));
        assert!(out.contains("\n   <services>\n"));
        assert!(out.contains("\n   </services>\n"));
        assert!(out.contains("\n      <service ONID="));
        assert!(!out.contains('\t'));
    }

    #[test]
    fn test_transponder_list_order_is_preserved() {
        let mut ts = Vec::new();
        for tsid in [30, 10, 20] {
            let mut t = Transponder::new(1, 1, tsid, DeliverySystem::DvbT);
            t.frequency = 474_000_000;
            ts.push(t);
        }

        let out = render(|d| d.dump_transponders(&ts));
        let a = out.find("TSID=\"30\"").unwrap();
        let b = out.find("TSID=\"10\"").unwrap();
        let c = out.find("TSID=\"20\"").unwrap();
        assert!(a < b && b < c);
        assert_eq!(out.matches("<transponder ").count(), 3);
    }

    #[test]
    fn test_write_failure_propagates() {
        struct FailingSink;
        impl Write for FailingSink {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut dumper = XmlDumper::new(FailingSink);
        match dumper.dump_prolog() {
            Err(DumpError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
