//! Audio packet codec
//!
//! Quantization, silence detection, packet encoding, validation and
//! decoding. All functions are pure and thread-safe.

pub mod decoder;
pub mod encoder;
pub mod frame;
pub mod quantize;
pub mod silence;
pub mod validator;

pub use decoder::{decode, inspect};
pub use encoder::{encode, PacketEncoder};
pub use quantize::{dequantize, quantize, QUANTIZE_TOLERANCE};
pub use silence::{dbfs, is_silent, SilencePolicy};
pub use validator::{ensure_audio_packet, is_audio_packet, is_valid_packet, validate};
