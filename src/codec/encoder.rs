//! Audio packet encoder
//!
//! Quantizes a frame, drops the payload when the silence policy says so,
//! and lays out header, payload and extension bytes.

use bytes::{BufMut, Bytes, BytesMut};

use super::frame::write_frame;
use super::quantize::quantize_frame;
use crate::config::CodecConfig;
use crate::constants::MAX_EXT_LEN;
use crate::error::PacketError;
use crate::protocol::{Frame, LaneName, PacketType};

/// Packet encoder holding an immutable codec configuration
#[derive(Debug, Clone, Default)]
pub struct PacketEncoder {
    config: CodecConfig,
}

impl PacketEncoder {
    /// Create a new encoder with the specified configuration
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Encode one frame into an audio or silent audio packet
    ///
    /// `lane_name` must be at most 3 ASCII characters and `ext` at most
    /// 255 bytes. Nothing is written before both checks pass.
    pub fn encode(&self, audio: &Frame, lane_name: &str, ext: &[u8]) -> Result<Bytes, PacketError> {
        let lane_name = LaneName::new(lane_name)?;
        self.encode_lane(audio, &lane_name, ext)
    }

    /// Encode for an already validated lane name
    pub fn encode_lane(
        &self,
        audio: &Frame,
        lane_name: &LaneName,
        ext: &[u8],
    ) -> Result<Bytes, PacketError> {
        if ext.len() > MAX_EXT_LEN {
            return Err(PacketError::ExtBytesTooLong);
        }

        let quantized = quantize_frame(audio.samples());
        let packet_type = if self.config.silence.is_silent(&quantized) {
            PacketType::Silent
        } else {
            PacketType::Normal
        };

        let mut buf = BytesMut::with_capacity(packet_type.packet_len(ext.len()));
        buf.put_u8(packet_type.type_id());
        buf.put_slice(&lane_name.wire_bytes());
        buf.put_u8(ext.len() as u8);
        if packet_type == PacketType::Normal {
            write_frame(&quantized, &mut buf);
        }
        buf.put_slice(ext);

        tracing::trace!(
            lane = %lane_name,
            ?packet_type,
            len = buf.len(),
            "encoded audio packet"
        );

        Ok(buf.freeze())
    }

    /// Get current configuration
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }
}

/// Encode with the default configuration (digital-zero silence detection)
pub fn encode(audio: &Frame, lane_name: &str, ext: &[u8]) -> Result<Bytes, PacketError> {
    PacketEncoder::default().encode(audio, lane_name, ext)
}
