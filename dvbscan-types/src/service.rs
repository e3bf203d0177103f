//! Service records assembled from PSI/SI tables (PAT/PMT/SDT).

use serde::{Deserialize, Serialize};

/// Maximum number of plain audio stream slots per service.
pub const AUDIO_CHAN_MAX: usize = 32;
/// Maximum number of AC-3 stream slots per service.
pub const AC3_CHAN_MAX: usize = 32;
/// Maximum number of subtitle slots per service.
pub const SUBTITLES_MAX: usize = 32;
/// Maximum number of conditional-access system ids per service.
pub const CA_SYSTEM_ID_MAX: usize = 32;

/// Stream type constants (ISO/IEC 13818-1 table 2-34 and ATSC additions).
pub mod stream_type {
    /// MPEG-1 Video.
    pub const MPEG1_VIDEO: u8 = 0x01;
    /// MPEG-2 Video.
    pub const MPEG2_VIDEO: u8 = 0x02;
    /// MPEG-1 Audio.
    pub const MPEG1_AUDIO: u8 = 0x03;
    /// MPEG-2 Audio.
    pub const MPEG2_AUDIO: u8 = 0x04;
    /// PES packets carrying private data (DVB subtitles, AC-3, teletext).
    pub const PES_PRIVATE_DATA: u8 = 0x06;
    /// AAC Audio (ADTS).
    pub const AAC_AUDIO: u8 = 0x0F;
    /// AAC Audio (LATM).
    pub const AAC_LATM: u8 = 0x11;
    /// H.264/AVC Video.
    pub const H264_VIDEO: u8 = 0x1B;
    /// H.265/HEVC Video.
    pub const H265_VIDEO: u8 = 0x24;
    /// AC-3 Audio (ATSC).
    pub const AC3_AUDIO: u8 = 0x81;
}

/// Human-readable description for a PMT stream type.
///
/// Total over all inputs; unknown ids get a stable placeholder so the
/// XML `description` attribute is never missing.
pub fn stream_type_description(ty: u8) -> &'static str {
    match ty {
        stream_type::MPEG1_VIDEO => "MPEG-1 Video stream, ISO/IEC 11172-2",
        stream_type::MPEG2_VIDEO => "MPEG-2 Video stream, ITU-T Rec. H.262 | ISO/IEC 13818-2",
        stream_type::MPEG1_AUDIO => "MPEG-1 Audio stream, ISO/IEC 11172-3",
        stream_type::MPEG2_AUDIO => "MPEG-2 Audio stream, ISO/IEC 13818-3",
        stream_type::PES_PRIVATE_DATA => "PES packets containing private data",
        stream_type::AAC_AUDIO => "AAC Audio stream, ISO/IEC 13818-7",
        stream_type::AAC_LATM => "AAC Audio stream (LATM), ISO/IEC 14496-3",
        stream_type::H264_VIDEO => "AVC Video stream, ITU-T Rec. H.264 | ISO/IEC 14496-10",
        stream_type::H265_VIDEO => "HEVC Video stream, ITU-T Rec. H.265 | ISO/IEC 23008-2",
        stream_type::AC3_AUDIO => "AC-3 Audio stream (ATSC)",
        _ => "unknown stream type",
    }
}

/// One audio (or AC-3) elementary stream of a service.
///
/// A slot with `stream_type == 0` is empty and skipped during emission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioStream {
    pub pid: u16,
    pub stream_type: u8,
    /// ISO 639-2 language code.
    pub lang: String,
}

/// One DVB subtitle entry of a service.
///
/// A slot with `pid == 0` is empty and skipped during emission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtitle {
    pub pid: u16,
    pub subtitling_type: u8,
    pub composition_page_id: u16,
    pub ancillary_page_id: u16,
    /// ISO 639-2 language code.
    pub lang: String,
}

/// A broadcast service within a transponder.
///
/// Read-only from the serializer's perspective. Stream, subtitle and CA
/// arrays are bounded by the `*_MAX` constants and keep PMT order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub service_id: u16,
    pub service_name: String,
    pub provider_name: String,
    /// Logical channel number from the LCN descriptor, 0 if unassigned.
    pub logical_channel_number: u16,
    pub pcr_pid: u16,
    pub video_pid: u16,
    pub video_stream_type: u8,
    pub audio: Vec<AudioStream>,
    pub ac3: Vec<AudioStream>,
    pub subtitles: Vec<Subtitle>,
    pub ca_ids: Vec<u16>,
}

impl Service {
    /// Create a service with the given id and empty stream tables.
    pub fn new(service_id: u16) -> Self {
        Self {
            service_id,
            ..Self::default()
        }
    }
}
