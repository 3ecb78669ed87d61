//! Packet-level types shared by the encoder, decoder and validator

use bytes::Bytes;
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::constants::*;
use crate::error::PacketError;

/// Packet variant, identified by the first byte on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PacketType {
    /// Audio payload present
    Normal,
    /// Audio payload omitted, frame decodes to zeros
    Silent,
}

impl PacketType {
    pub fn from_type_id(type_id: u8) -> Option<Self> {
        match type_id {
            AUDIO_PACKET_TYPE_ID => Some(PacketType::Normal),
            SILENT_AUDIO_PACKET_TYPE_ID => Some(PacketType::Silent),
            _ => None,
        }
    }

    pub fn type_id(self) -> u8 {
        match self {
            PacketType::Normal => AUDIO_PACKET_TYPE_ID,
            PacketType::Silent => SILENT_AUDIO_PACKET_TYPE_ID,
        }
    }

    /// Size of the audio payload carried by this variant
    pub fn payload_len(self) -> usize {
        match self {
            PacketType::Normal => AUDIO_PAYLOAD_SIZE,
            PacketType::Silent => 0,
        }
    }

    /// Exact packet length for the given extension length
    pub fn packet_len(self, ext_len: usize) -> usize {
        HEADER_SIZE + self.payload_len() + ext_len
    }
}

/// Lane identifier: up to 3 printable ASCII characters
///
/// On the wire the name occupies a fixed 3-byte field; unused trailing
/// bytes are `0x00`. Control characters are refused so the padding stays
/// unambiguous.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LaneName {
    bytes: [u8; LANE_NAME_SIZE],
    len: u8,
}

impl LaneName {
    /// Validate a lane name
    ///
    /// The ASCII check runs before the length check, so a single
    /// multi-byte character reports as non-ASCII.
    pub fn new(name: &str) -> Result<Self, PacketError> {
        if !name.is_ascii() {
            return Err(PacketError::NonAsciiLaneName);
        }
        if name.len() > LANE_NAME_SIZE {
            return Err(PacketError::LaneNameTooLong);
        }
        if !name.bytes().all(is_printable) {
            return Err(PacketError::NonPrintableLaneName);
        }

        let mut bytes = [0u8; LANE_NAME_SIZE];
        bytes[..name.len()].copy_from_slice(name.as_bytes());
        Ok(Self {
            bytes,
            len: name.len() as u8,
        })
    }

    /// Rebuild a lane name from its received wire field
    ///
    /// Trailing `0x00` padding is stripped. Non-printable bytes become `?`.
    pub fn from_wire(field: [u8; LANE_NAME_SIZE]) -> Self {
        let len = field.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        let mut bytes = [0u8; LANE_NAME_SIZE];
        for (dst, &src) in bytes.iter_mut().zip(&field[..len]) {
            *dst = if is_printable(src) { src } else { b'?' };
        }
        if bytes[..len] != field[..len] {
            tracing::debug!(?field, "replaced non-printable bytes in lane name field");
        }
        Self {
            bytes,
            len: len as u8,
        }
    }

    /// The padded 3-byte field written to the wire
    pub fn wire_bytes(&self) -> [u8; LANE_NAME_SIZE] {
        self.bytes
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII bytes are ever stored
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

fn is_printable(b: u8) -> bool {
    b.is_ascii_graphic() || b == b' '
}

impl FromStr for LaneName {
    type Err = PacketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for LaneName {
    type Error = PacketError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl fmt::Display for LaneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for LaneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LaneName({:?})", self.as_str())
    }
}

impl PartialEq<str> for LaneName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for LaneName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Serialize for LaneName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Exactly `FRAME_LENGTH` normalized samples
#[derive(Clone, PartialEq, Debug)]
pub struct Frame {
    samples: Vec<f32>,
}

impl Frame {
    /// Wrap a sample vector, rejecting any length other than `FRAME_LENGTH`
    pub fn new(samples: Vec<f32>) -> Result<Self, PacketError> {
        if samples.len() != FRAME_LENGTH {
            return Err(PacketError::InvalidFrameLength {
                expected: FRAME_LENGTH,
                actual: samples.len(),
            });
        }
        Ok(Self { samples })
    }

    /// All-zero frame
    pub fn silent() -> Self {
        Self {
            samples: vec![0.0; FRAME_LENGTH],
        }
    }

    /// Build a frame by evaluating `f` at every sample index
    pub fn from_fn(f: impl FnMut(usize) -> f32) -> Self {
        Self {
            samples: (0..FRAME_LENGTH).map(f).collect(),
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::silent()
    }
}

impl Deref for Frame {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        &self.samples
    }
}

impl AsRef<[f32]> for Frame {
    fn as_ref(&self) -> &[f32] {
        &self.samples
    }
}

impl TryFrom<Vec<f32>> for Frame {
    type Error = PacketError;

    fn try_from(samples: Vec<f32>) -> Result<Self, Self::Error> {
        Self::new(samples)
    }
}

impl TryFrom<&[f32]> for Frame {
    type Error = PacketError;

    fn try_from(samples: &[f32]) -> Result<Self, Self::Error> {
        Self::new(samples.to_vec())
    }
}

/// Contents of a decoded packet
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedPacket {
    pub packet_type: PacketType,
    pub frame: Frame,
    pub lane_name: LaneName,
    pub ext: Bytes,
}

impl DecodedPacket {
    pub fn into_parts(self) -> (Frame, LaneName, Bytes) {
        (self.frame, self.lane_name, self.ext)
    }
}

/// Human-facing description of a packet
#[derive(Debug, Clone, Serialize)]
pub struct PacketSummary {
    pub packet_type: PacketType,
    pub lane_name: LaneName,
    pub ext_len: usize,
    pub total_len: usize,
    /// RMS level of the carried frame, never below `LEVEL_FLOOR_DBFS`;
    /// `None` for silent packets
    pub level_dbfs: Option<f32>,
}
