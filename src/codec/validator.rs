//! Structural validation of raw audio packets
//!
//! [`validate`] runs the ordered checks once and reports the first failure.
//! [`is_audio_packet`] and [`ensure_audio_packet`] are the boolean and the
//! strict views of the same outcome.

use crate::constants::*;
use crate::error::{MalformedPacket, PacketError};
use crate::protocol::PacketType;

/// Check that `raw` is a well-formed audio or silent audio packet
pub fn validate(raw: &[u8]) -> Result<PacketType, MalformedPacket> {
    let &type_id = raw.first().ok_or(MalformedPacket::Empty)?;
    let packet_type =
        PacketType::from_type_id(type_id).ok_or(MalformedPacket::UnknownType(type_id))?;

    if raw.len() < HEADER_SIZE {
        return Err(MalformedPacket::MissingExtLen);
    }

    let ext_len = raw[EXT_LEN_OFFSET] as usize;
    let expected_len = packet_type.packet_len(ext_len);

    match (packet_type, raw.len().cmp(&expected_len)) {
        (PacketType::Normal, std::cmp::Ordering::Less) => Err(MalformedPacket::AudioTooShort),
        (PacketType::Normal, std::cmp::Ordering::Greater) => Err(MalformedPacket::AudioTooLong),
        (PacketType::Silent, std::cmp::Ordering::Less) => Err(MalformedPacket::SilentTooShort),
        (PacketType::Silent, std::cmp::Ordering::Greater) => Err(MalformedPacket::SilentTooLong),
        (_, std::cmp::Ordering::Equal) => Ok(packet_type),
    }
}

/// Non-throwing check: any failure is `false`
pub fn is_audio_packet(raw: &[u8]) -> bool {
    match validate(raw) {
        Ok(_) => true,
        Err(reason) => {
            tracing::trace!(%reason, len = raw.len(), "rejected audio packet");
            false
        }
    }
}

/// Strict check: the first failing structural check becomes the error
pub fn ensure_audio_packet(raw: &[u8]) -> Result<(), PacketError> {
    validate(raw).map(|_| ()).map_err(PacketError::from)
}

/// Validate in either mode
///
/// With `strict == false` this never fails and reports `Ok(false)` for an
/// invalid packet; with `strict == true` an invalid packet is an error.
pub fn is_valid_packet(raw: &[u8], strict: bool) -> Result<bool, PacketError> {
    if strict {
        ensure_audio_packet(raw).map(|()| true)
    } else {
        Ok(is_audio_packet(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normal_packet(ext: &[u8]) -> Vec<u8> {
        let mut raw = vec![AUDIO_PACKET_TYPE_ID, b'A', b'B', b'C', ext.len() as u8];
        raw.extend(std::iter::repeat(0x7F).take(AUDIO_PAYLOAD_SIZE));
        raw.extend_from_slice(ext);
        raw
    }

    fn silent_packet(ext: &[u8]) -> Vec<u8> {
        let mut raw = vec![SILENT_AUDIO_PACKET_TYPE_ID, b'A', b'B', b'C', ext.len() as u8];
        raw.extend_from_slice(ext);
        raw
    }

    #[test]
    fn test_valid_packets() {
        assert_eq!(validate(&normal_packet(&[])), Ok(PacketType::Normal));
        assert_eq!(validate(&normal_packet(&[1, 2, 3])), Ok(PacketType::Normal));
        assert_eq!(validate(&silent_packet(&[])), Ok(PacketType::Silent));
        assert_eq!(validate(&silent_packet(&[0; 255])), Ok(PacketType::Silent));
    }

    #[test]
    fn test_check_order() {
        assert_eq!(validate(&[]), Err(MalformedPacket::Empty));
        // Type id is checked before the header length
        assert_eq!(validate(&[0x20]), Err(MalformedPacket::UnknownType(0x20)));
        assert_eq!(
            validate(&[AUDIO_PACKET_TYPE_ID, b'A', b'B', b'C']),
            Err(MalformedPacket::MissingExtLen)
        );
    }

    #[test]
    fn test_length_mismatch() {
        let normal = normal_packet(&[]);
        assert_eq!(validate(&normal[..normal.len() - 1]), Err(MalformedPacket::AudioTooShort));

        let mut long = normal.clone();
        long.push(0);
        assert_eq!(validate(&long), Err(MalformedPacket::AudioTooLong));

        let silent = silent_packet(&[]);
        assert_eq!(
            validate(&silent[..silent.len() - 1]),
            Err(MalformedPacket::MissingExtLen)
        );

        let silent_ext = silent_packet(&[1, 2, 3, 4]);
        assert_eq!(
            validate(&silent_ext[..silent_ext.len() - 1]),
            Err(MalformedPacket::SilentTooShort)
        );

        let mut long_silent = silent;
        long_silent.push(0);
        assert_eq!(validate(&long_silent), Err(MalformedPacket::SilentTooLong));
    }

    #[test]
    fn test_boolean_and_strict_modes() {
        let valid = normal_packet(&[1, 2, 3, 4]);
        assert!(is_audio_packet(&valid));
        assert_eq!(is_valid_packet(&valid, false), Ok(true));
        assert_eq!(is_valid_packet(&valid, true), Ok(true));

        let invalid = [0x20, b'A', b'B', b'C', 0];
        assert!(!is_audio_packet(&invalid));
        assert_eq!(is_valid_packet(&invalid, false), Ok(false));

        let err = is_valid_packet(&invalid, true).unwrap_err();
        assert_eq!(err.to_string(), "It is not an audio packet or silent audio packet");
        assert_eq!(ensure_audio_packet(&[]).unwrap_err().to_string(), "Empty array passed");
    }
}
