//! # Lane Audio Packet
//!
//! Compact binary packets carrying one fixed-length audio frame per named lane.
//!
//! ## Packet Layout
//!
//! ```text
//! ┌──────────┬────────────────┬──────────┬──────────────────────────┬─────────────────┐
//! │ TypeId   │ LaneName       │ ExtLen   │ AudioPayload             │ ExtensionBytes  │
//! │ 1 byte   │ 3 bytes ASCII  │ 1 byte   │ FRAME_LENGTH x i16 LE    │ ExtLen bytes    │
//! │ 0x10 /   │ 0x00 padded    │ 0..=255  │ (NORMAL packets only)    │ opaque          │
//! │ 0x11     │                │          │                          │                 │
//! └──────────┴────────────────┴──────────┴──────────────────────────┴─────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! ```text
//!   Frame (f32 x FRAME_LENGTH)
//!        │
//!        ▼
//!   ┌───────────┐    ┌──────────────────┐
//!   │ Quantizer │───▶│ Silence Detector │── silent ──▶ [0x11|lane|ext_len|ext]
//!   └───────────┘    └────────┬─────────┘
//!                             │ audible
//!                             ▼
//!                    ┌──────────────────┐
//!                    │   Frame Codec    │──────────▶ [0x10|lane|ext_len|pcm|ext]
//!                    └──────────────────┘
//!
//!   raw bytes ──▶ Validator ──▶ Decoder ──▶ (Frame, LaneName, ext bytes)
//! ```
//!
//! Every codec function is pure: no state survives between calls, so any
//! number of lanes can be encoded or decoded concurrently.

pub mod codec;
pub mod config;
pub mod error;
pub mod protocol;

pub use codec::{
    decode, encode, ensure_audio_packet, inspect, is_audio_packet, is_valid_packet, validate,
    PacketEncoder,
};
pub use error::{Error, MalformedPacket, PacketError, Result};
pub use protocol::{DecodedPacket, Frame, LaneName, PacketSummary, PacketType};

/// Wire-format constants shared by the encoder, decoder and validator
pub mod constants {
    /// Number of samples carried by one packet
    pub const FRAME_LENGTH: usize = 1024;

    /// Nominal sample rate of the lanes (informational, the codec ignores it)
    pub const SAMPLE_RATE: u32 = 44_100;

    /// Type id of a packet carrying audio
    pub const AUDIO_PACKET_TYPE_ID: u8 = 0x10;

    /// Type id of a packet whose frame quantized to silence
    pub const SILENT_AUDIO_PACKET_TYPE_ID: u8 = 0x11;

    /// Size of the lane name field in bytes
    pub const LANE_NAME_SIZE: usize = 3;

    /// TypeId + LaneName + ExtLen
    pub const HEADER_SIZE: usize = 1 + LANE_NAME_SIZE + 1;

    /// Offset of the extension length byte
    pub const EXT_LEN_OFFSET: usize = 1 + LANE_NAME_SIZE;

    /// Size of the audio payload of a normal packet
    pub const AUDIO_PAYLOAD_SIZE: usize = FRAME_LENGTH * 2;

    /// Maximum number of extension bytes
    pub const MAX_EXT_LEN: usize = u8::MAX as usize;

    /// Scale between a normalized sample and its 16-bit representation
    pub const QUANTIZE_SCALE: f32 = 32767.0;

    /// Reported level of an all-zero audio payload, below any non-zero frame
    pub const LEVEL_FLOOR_DBFS: f32 = -150.0;

    /// Suggested threshold for the dBFS silence policy
    pub const DEFAULT_SILENT_THRESHOLD_DBFS: f32 = -20.0;
}
