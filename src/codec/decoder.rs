//! Audio packet decoder

use bytes::Bytes;

use super::frame::read_frame;
use super::quantize::dequantize_frame;
use super::silence::dbfs;
use super::validator::validate;
use crate::constants::*;
use crate::error::PacketError;
use crate::protocol::{DecodedPacket, Frame, LaneName, PacketSummary, PacketType};

/// Unpack an audio or silent audio packet
///
/// Structural failures are reported coarsely: not an audio packet, too
/// short, or too long. Use [`super::ensure_audio_packet`] for the precise
/// reason.
pub fn decode(raw: &[u8]) -> Result<DecodedPacket, PacketError> {
    let packet_type = validate(raw).map_err(|reason| {
        tracing::debug!(%reason, len = raw.len(), "failed to decode audio packet");
        reason.into_decode_error()
    })?;

    let (frame, ext) = split_body(packet_type, raw);
    let frame = match frame {
        Some(payload) => Frame::new(dequantize_frame(&read_frame(payload)))?,
        None => Frame::silent(),
    };

    Ok(DecodedPacket {
        packet_type,
        frame,
        lane_name: LaneName::from_wire(lane_field(raw)),
        ext: Bytes::copy_from_slice(ext),
    })
}

/// Decode and describe a packet
pub fn inspect(raw: &[u8]) -> Result<PacketSummary, PacketError> {
    let packet_type = validate(raw)?;
    let (payload, ext) = split_body(packet_type, raw);

    Ok(PacketSummary {
        packet_type,
        lane_name: LaneName::from_wire(lane_field(raw)),
        ext_len: ext.len(),
        total_len: raw.len(),
        // An all-zero payload would be -inf, which JSON cannot carry
        level_dbfs: payload.map(|p| dbfs(&read_frame(p)).max(LEVEL_FLOOR_DBFS)),
    })
}

fn lane_field(raw: &[u8]) -> [u8; LANE_NAME_SIZE] {
    let mut field = [0u8; LANE_NAME_SIZE];
    field.copy_from_slice(&raw[1..1 + LANE_NAME_SIZE]);
    field
}

/// Split a validated packet into its audio payload and extension bytes
fn split_body(packet_type: PacketType, raw: &[u8]) -> (Option<&[u8]>, &[u8]) {
    let body = &raw[HEADER_SIZE..];
    match packet_type {
        PacketType::Normal => {
            let (payload, ext) = body.split_at(AUDIO_PAYLOAD_SIZE);
            (Some(payload), ext)
        }
        PacketType::Silent => (None, body),
    }
}
