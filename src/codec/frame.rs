//! Raw audio payload: `FRAME_LENGTH` signed 16-bit little-endian samples

use bytes::{Buf, BufMut};

use crate::constants::AUDIO_PAYLOAD_SIZE;

/// Append the quantized frame to `dst`
pub fn write_frame<B: BufMut>(quantized: &[i16], dst: &mut B) {
    for &q in quantized {
        dst.put_i16_le(q);
    }
}

/// Read quantized samples from a payload slice
///
/// The caller guarantees `payload` holds exactly `AUDIO_PAYLOAD_SIZE` bytes.
pub fn read_frame(mut payload: &[u8]) -> Vec<i16> {
    debug_assert_eq!(payload.len(), AUDIO_PAYLOAD_SIZE);
    let mut quantized = Vec::with_capacity(payload.len() / 2);
    while payload.remaining() >= 2 {
        quantized.push(payload.get_i16_le());
    }
    quantized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FRAME_LENGTH;

    #[test]
    fn test_little_endian_layout() {
        let mut buf = Vec::new();
        write_frame(&[1, -2, 0x1234], &mut buf);
        assert_eq!(buf, vec![0x01, 0x00, 0xFE, 0xFF, 0x34, 0x12]);
    }

    #[test]
    fn test_read_full_payload() {
        let quantized: Vec<i16> = (0..FRAME_LENGTH).map(|i| i as i16 - 512).collect();
        let mut buf = Vec::with_capacity(AUDIO_PAYLOAD_SIZE);
        write_frame(&quantized, &mut buf);
        assert_eq!(buf.len(), AUDIO_PAYLOAD_SIZE);
        assert_eq!(read_frame(&buf), quantized);
    }
}
