//! Custom base64/base32 alphabets for I2P destination addresses.
//!
//! I2P uses standard base64 semantics with `+` replaced by `-` and `/`
//! replaced by `~` (no line wrapping, `=` padding), and RFC 4648 base32
//! in lowercase (`a`-`z`, `2`-`7`) for the short hash form. Both encoders
//! are immutable instances; nothing here holds mutable state.

#![forbid(unsafe_code)]

use std::sync::OnceLock;

use base64::alphabet::Alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use data_encoding::{Encoding, Specification};
use thiserror::Error;

/// Decode failure under either custom alphabet.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid base64 encoding: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("invalid base32 encoding: {0}")]
    InvalidBase32(#[from] data_encoding::DecodeError),
}

const B64_SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-~";
const B32_SYMBOLS: &str = "abcdefghijklmnopqrstuvwxyz234567";

const B64_ALPHABET: Alphabet = match Alphabet::new(B64_SYMBOLS) {
    Ok(a) => a,
    Err(_) => panic!("static base64 alphabet is well formed"),
};

// Encoding always pads; decoding also accepts input whose padding was
// trimmed by the producer.
const B64_CONFIG: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

const B64_ENGINE: GeneralPurpose = GeneralPurpose::new(&B64_ALPHABET, B64_CONFIG);

fn b32_engine() -> &'static Encoding {
    static ENGINE: OnceLock<Encoding> = OnceLock::new();
    ENGINE.get_or_init(|| {
        let mut spec = Specification::new();
        spec.symbols.push_str(B32_SYMBOLS);
        spec.padding = Some('=');
        spec.encoding().expect("static base32 specification is well formed")
    })
}

/// Encode bytes under the I2P base64 alphabet, with padding.
pub fn b64_encode(data: &[u8]) -> String {
    B64_ENGINE.encode(data)
}

/// Decode text under the I2P base64 alphabet.
///
/// Padding may be present or omitted. A dangling final character that
/// cannot carry a full byte is ignored; destinations in the wild are
/// sometimes truncated to an odd length and the reference router treats
/// the remainder as insignificant.
pub fn b64_decode(text: &str) -> Result<Vec<u8>, CodecError> {
    let bytes = text.as_bytes();
    let usable = match bytes.len() % 4 {
        1 => &bytes[..bytes.len() - 1],
        _ => bytes,
    };
    Ok(B64_ENGINE.decode(usable)?)
}

/// Padded base64 length for `raw_len` input bytes.
pub fn b64_encoded_len(raw_len: usize) -> usize {
    raw_len.div_ceil(3) * 4
}

/// Encode bytes under the lowercase base32 alphabet, with padding.
pub fn b32_encode(data: &[u8]) -> String {
    b32_engine().encode(data)
}

/// Decode text under the lowercase base32 alphabet. Padding is required.
pub fn b32_decode(text: &str) -> Result<Vec<u8>, CodecError> {
    Ok(b32_engine().decode(text.as_bytes())?)
}
