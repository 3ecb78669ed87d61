//! Error types for the lane audio packet codec

use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum Error {
    #[error("Packet error: {0}")]
    Packet(#[from] PacketError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Codec errors
///
/// Every variant is a value error: the input had the right type but an
/// out-of-domain value or a malformed byte layout. None are retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PacketError {
    #[error("audio_pcm must contain exactly {expected} samples, but got {actual}")]
    InvalidFrameLength { expected: usize, actual: usize },

    #[error("For lane_name, non ascii characters are not allowed")]
    NonAsciiLaneName,

    #[error("For lane_name, over 3 characters string is not allowed")]
    LaneNameTooLong,

    #[error("For lane_name, control characters are not allowed")]
    NonPrintableLaneName,

    #[error("For ext_bytes, over 255 bytes data is not allowed")]
    ExtBytesTooLong,

    /// Strict validation failure
    #[error(transparent)]
    Malformed(#[from] MalformedPacket),

    #[error("Invalid packet, it is not an audio packet")]
    NotAudioPacket,

    #[error("Invalid packet, too short bytes received")]
    TooShort,

    #[error("Invalid packet, too long bytes received")]
    TooLong,
}

/// Reason a byte sequence is not a well-formed audio packet
///
/// Produced by [`crate::codec::validate`]; the first failing structural
/// check decides the variant.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedPacket {
    #[error("Empty array passed")]
    Empty,

    #[error("It is not an audio packet or silent audio packet")]
    UnknownType(u8),

    #[error("Too short bytes received, external bytes length missing")]
    MissingExtLen,

    #[error("Too short bytes as audio packet")]
    AudioTooShort,

    #[error("Too long bytes as audio packet")]
    AudioTooLong,

    #[error("Too short bytes as silent audio packet")]
    SilentTooShort,

    #[error("Too long bytes as silent audio packet")]
    SilentTooLong,
}

impl MalformedPacket {
    /// Collapse into the coarser error reported by the decoder
    pub fn into_decode_error(self) -> PacketError {
        match self {
            MalformedPacket::Empty | MalformedPacket::UnknownType(_) => PacketError::NotAudioPacket,
            MalformedPacket::MissingExtLen
            | MalformedPacket::AudioTooShort
            | MalformedPacket::SilentTooShort => PacketError::TooShort,
            MalformedPacket::AudioTooLong | MalformedPacket::SilentTooLong => PacketError::TooLong,
        }
    }
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FRAME_LENGTH;

    #[test]
    fn test_strict_messages() {
        assert_eq!(MalformedPacket::Empty.to_string(), "Empty array passed");
        assert_eq!(
            MalformedPacket::UnknownType(0x20).to_string(),
            "It is not an audio packet or silent audio packet"
        );
        assert_eq!(
            PacketError::from(MalformedPacket::SilentTooLong).to_string(),
            "Too long bytes as silent audio packet"
        );
    }

    #[test]
    fn test_decode_error_mapping() {
        assert_eq!(MalformedPacket::Empty.into_decode_error(), PacketError::NotAudioPacket);
        assert_eq!(MalformedPacket::UnknownType(0).into_decode_error(), PacketError::NotAudioPacket);
        assert_eq!(MalformedPacket::MissingExtLen.into_decode_error(), PacketError::TooShort);
        assert_eq!(MalformedPacket::SilentTooShort.into_decode_error(), PacketError::TooShort);
        assert_eq!(MalformedPacket::AudioTooLong.into_decode_error(), PacketError::TooLong);
    }

    fn check_packet(raw: &[u8]) -> Result<()> {
        crate::codec::ensure_audio_packet(raw)?;
        Ok(())
    }

    #[test]
    fn test_packet_error_converts_into_app_error() {
        let err = check_packet(&[]).unwrap_err();
        assert!(matches!(
            err,
            Error::Packet(PacketError::Malformed(MalformedPacket::Empty))
        ));
        assert_eq!(err.to_string(), "Packet error: Empty array passed");

        let err = Error::from(PacketError::LaneNameTooLong);
        assert_eq!(
            err.to_string(),
            "Packet error: For lane_name, over 3 characters string is not allowed"
        );
    }

    #[test]
    fn test_frame_length_message() {
        let err = PacketError::InvalidFrameLength { expected: FRAME_LENGTH, actual: 3 };
        assert_eq!(
            err.to_string(),
            format!("audio_pcm must contain exactly {} samples, but got 3", FRAME_LENGTH)
        );
    }
}
