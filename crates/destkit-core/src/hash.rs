//! The 32-byte short form of a destination.

use std::fmt;

use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::error;

use destkit_codec as codec;

/// Reserved domain suffix of the short hash form.
pub const B32_SUFFIX: &str = ".b32.i2p";

/// Textual length of the short form: 52 significant base32 characters
/// plus the suffix.
pub const B32_ADDR_LEN: usize = 60;

/// Errors from parsing or constructing a [`DestHash`].
#[derive(Debug, Error)]
pub enum HashError {
    #[error("expected a {B32_ADDR_LEN} character address ending in {B32_SUFFIX}")]
    InvalidFormat,
    #[error("expected 32 hash bytes, got {len}")]
    InvalidLength { len: usize },
    #[error("hash text does not decode: {0}")]
    Decode(#[from] codec::CodecError),
}

/// SHA-256 digest of a destination's raw bytes: the `.b32.i2p` address.
///
/// One-way derived; a hash never reconstructs the destination it was
/// computed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DestHash([u8; 32]);

impl DestHash {
    /// Digest arbitrary destination bytes into their hash.
    pub fn of(data: &[u8]) -> Self {
        let digest = Sha256::digest(data);
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    /// Parse a `<52 chars>.b32.i2p` address.
    pub fn from_base32(text: &str) -> Result<Self, HashError> {
        if text.len() != B32_ADDR_LEN || !text.ends_with(B32_SUFFIX) {
            error!(len = text.len(), "invalid desthash format");
            return Err(HashError::InvalidFormat);
        }
        // 32 bytes encode to 56 base32 characters; the canonical text
        // keeps the 52 significant ones, so padding is restored here.
        let mut padded = String::with_capacity(56);
        padded.push_str(&text[..52]);
        padded.push_str("====");
        let raw = codec::b32_decode(&padded)?;
        Self::from_bytes(&raw)
    }

    /// Wrap exactly 32 trusted bytes.
    pub fn from_bytes(raw: &[u8]) -> Result<Self, HashError> {
        let bytes: [u8; 32] = raw
            .try_into()
            .map_err(|_| HashError::InvalidLength { len: raw.len() })?;
        Ok(Self(bytes))
    }

    /// The canonical textual form.
    pub fn to_base32(&self) -> String {
        let full = codec::b32_encode(&self.0);
        format!("{}{}", &full[..52], B32_SUFFIX)
    }

    /// Coarse 44-character display fingerprint: the custom-base64 text of
    /// SHA-256 over the hash bytes. Display/dedup only; carries no meaning
    /// beyond collision resistance.
    pub fn fingerprint(&self) -> String {
        codec::b64_encode(&Sha256::digest(self.0))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn network(&self) -> &'static str {
        "I2P"
    }
}

impl From<[u8; 32]> for DestHash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for DestHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_form_is_60_chars_with_suffix() {
        let h = DestHash::from([7u8; 32]);
        let text = h.to_base32();
        assert_eq!(text.len(), B32_ADDR_LEN);
        assert!(text.ends_with(B32_SUFFIX));
    }

    #[test]
    fn text_round_trip() {
        let h = DestHash::from_bytes(&(0u8..32).collect::<Vec<_>>()).unwrap();
        let parsed = DestHash::from_base32(&h.to_base32()).unwrap();
        assert_eq!(parsed, h);
    }

    #[test]
    fn rejects_wrong_length_text() {
        assert!(matches!(
            DestHash::from_base32("short.b32.i2p"),
            Err(HashError::InvalidFormat)
        ));
        let too_long = format!("{}{}", "a".repeat(53), B32_SUFFIX);
        assert!(DestHash::from_base32(&too_long).is_err());
    }

    #[test]
    fn rejects_missing_suffix() {
        let text = "a".repeat(B32_ADDR_LEN);
        assert!(matches!(
            DestHash::from_base32(&text),
            Err(HashError::InvalidFormat)
        ));
    }

    #[test]
    fn rejects_foreign_symbols_in_text() {
        let text = format!("{}{}", "A".repeat(52), B32_SUFFIX);
        assert!(matches!(
            DestHash::from_base32(&text),
            Err(HashError::Decode(_))
        ));
    }

    #[test]
    fn from_bytes_requires_exactly_32() {
        assert!(matches!(
            DestHash::from_bytes(&[0u8; 31]),
            Err(HashError::InvalidLength { len: 31 })
        ));
        assert!(DestHash::from_bytes(&[0u8; 32]).is_ok());
    }

    #[test]
    fn fingerprint_is_44_chars() {
        let fp = DestHash::from([0u8; 32]).fingerprint();
        assert_eq!(fp.len(), 44);
        // sha256(32 zero bytes) under the custom alphabet
        assert_eq!(fp, "Zmh6rfhivXdsj8GLjp-OIAiXFIVu4jOzkCpZHQ1fKSU=");
    }
}
