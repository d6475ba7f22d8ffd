//! The full base64 form of a destination address.

use std::fmt;

use thiserror::Error;
use tracing::{debug, error, warn};

use destkit_codec as codec;

use crate::display::{display_mode, DisplayMode};
use crate::hash::{DestHash, B32_SUFFIX};

/// Minimum length of the base64 address text.
pub const MIN_ENCODED_LEN: usize = 516;
/// Maximum length of the base64 address text.
pub const MAX_ENCODED_LEN: usize = 4096;

/// Generic domain label stripped from textual input before validation.
const DOMAIN_SUFFIX: &str = ".i2p";

/// Errors from constructing a [`Destination`] or recovering its bytes.
#[derive(Debug, Error)]
pub enum AddrError {
    /// The short hash form is one-way derived; it cannot be turned back
    /// into the full destination without a network lookup.
    #[error("cannot convert a .b32.i2p address to a full destination")]
    UnsupportedConversion,
    #[error("destination text length {len} outside {MIN_ENCODED_LEN}..={MAX_ENCODED_LEN}")]
    InvalidLength { len: usize },
    #[error("destination is not valid base64: {0}")]
    NotBase64(#[from] codec::CodecError),
    #[error("destination decodes to no bytes")]
    Empty,
}

/// An I2P destination, almost equivalent to an IP address: the custom
/// base64 text of a pair of public keys and maybe a certificate. The
/// router hides what the bytes mean; they are treated as an opaque blob.
///
/// Immutable once constructed. The untrusted paths ([`Destination::from_base64`],
/// [`Destination::from_bytes`]) validate; [`Destination::unchecked`] does not,
/// so [`Destination::to_bytes`] re-checks the decode.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Destination(String);

impl Destination {
    /// Wrap already-trusted base64 text without validation.
    pub fn unchecked(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Parse and validate base64 address text.
    ///
    /// A trailing `.i2p` label is stripped and surrounding whitespace
    /// trimmed before validation. `.b32.i2p` input is rejected as
    /// [`AddrError::UnsupportedConversion`].
    pub fn from_base64(text: &str) -> Result<Self, AddrError> {
        debug!(len = text.len(), "parsing destination from base64 text");
        if text.ends_with(B32_SUFFIX) {
            warn!("cannot convert .b32.i2p to full destination");
            return Err(AddrError::UnsupportedConversion);
        }
        let text = text.strip_suffix(DOMAIN_SUFFIX).unwrap_or(text);
        let text = text.trim_matches(['\t', '\n', '\r', '\x0c', ' ']);
        let len = text.len();
        if !(MIN_ENCODED_LEN..=MAX_ENCODED_LEN).contains(&len) {
            error!(len, "invalid destination address length");
            return Err(AddrError::InvalidLength { len });
        }
        let raw = codec::b64_decode(text)?;
        if raw.is_empty() {
            return Err(AddrError::Empty);
        }
        Ok(Self(text.to_owned()))
    }

    /// Encode raw destination bytes. The inverse of [`Destination::to_bytes`].
    pub fn from_bytes(raw: &[u8]) -> Result<Self, AddrError> {
        let len = codec::b64_encoded_len(raw.len());
        if !(MIN_ENCODED_LEN..=MAX_ENCODED_LEN).contains(&len) {
            error!(len, "invalid destination address length");
            return Err(AddrError::InvalidLength { len });
        }
        Ok(Self(codec::b64_encode(raw)))
    }

    /// The base64 address text.
    pub fn as_base64(&self) -> &str {
        &self.0
    }

    /// Decode the stored text back into raw destination bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, AddrError> {
        Ok(codec::b64_decode(&self.0)?)
    }

    /// The SHA-256 short form of this destination.
    ///
    /// Total by design: if the stored text does not decode (possible only
    /// through [`Destination::unchecked`]), this logs a warning and
    /// returns the all-zero hash. Callers that need the failure should go
    /// through [`Destination::to_bytes`] and [`DestHash::of`] instead.
    pub fn dest_hash(&self) -> DestHash {
        match self.to_bytes() {
            Ok(raw) => DestHash::of(&raw),
            Err(err) => {
                warn!(%err, "destination text does not decode, returning zero hash");
                DestHash::from([0u8; 32])
            }
        }
    }

    /// The `<52 chars>.b32.i2p` address of this destination. One-way; see
    /// [`DestHash`].
    pub fn to_base32(&self) -> String {
        self.dest_hash().to_base32()
    }

    pub fn network(&self) -> &'static str {
        "I2P"
    }
}

impl fmt::Display for Destination {
    /// Base64 or base32 text, per the process-wide display mode.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match display_mode() {
            DisplayMode::Base64 => f.write_str(&self.0),
            DisplayMode::Base32 => f.write_str(&self.to_base32()),
        }
    }
}

/// The canonical minimum-plausible destination: 517 repeated `A`s run
/// through the validating parser. Semantically meaningless, but useful
/// as a fixture wherever a well-formed address is needed.
pub fn five_hundred_as() -> Destination {
    debug!("generating destination of 517 'A's");
    let text = "A".repeat(517);
    Destination::from_base64(&text).unwrap_or_else(|_| Destination::unchecked(""))
}
