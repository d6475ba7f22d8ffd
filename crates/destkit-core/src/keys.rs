//! Generated destination keypairs and their Ed25519 signing view.

use std::fmt;

use ed25519_dalek::{Signature, Signer, SigningKey, VerifyingKey};
use thiserror::Error;
use tracing::debug;
use zeroize::Zeroizing;

use destkit_codec as codec;

use crate::addr::Destination;
use crate::sigtype::SigType;

/// Size of an Ed25519 keypair blob (seed followed by public key).
const ED25519_KEYPAIR_LEN: usize = 64;

/// Errors from key extraction and signing.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("combined key blob does not start with the destination text")]
    MismatchedAddress,
    /// The private section failed to decode. The offending text is never
    /// carried in the error.
    #[error("private key section is not valid base64")]
    InvalidPrivateKey,
    #[error("expected a {expected}-byte Ed25519 keypair, got {got} bytes")]
    UnexpectedKeyType { expected: usize, got: usize },
    #[error("empty hostname")]
    EmptyHostname,
}

/// The public and private keys of a destination.
///
/// `both` is the public base64 text immediately followed by the private
/// text with no delimiter, exactly as the bridge hands it out; the
/// private section is whatever follows the address's own text.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    address: Destination,
    both: String,
}

impl KeyPair {
    /// Pair a destination with its combined public+private blob.
    pub fn new(address: Destination, both: impl Into<String>) -> Self {
        debug!(addr_len = address.as_base64().len(), "creating keypair");
        Self {
            address,
            both: both.into(),
        }
    }

    /// The public half, as an address.
    pub fn address(&self) -> &Destination {
        &self.address
    }

    /// The combined public+private text. This is what gets persisted and
    /// what sessions are created from.
    pub fn both(&self) -> &str {
        &self.both
    }

    pub fn network(&self) -> &'static str {
        self.address.network()
    }

    /// Decode the private key bytes: everything in `both` after the
    /// address's own text.
    pub fn private(&self) -> Result<Zeroizing<Vec<u8>>, KeyError> {
        let priv_text = self
            .both
            .strip_prefix(self.address.as_base64())
            .ok_or(KeyError::MismatchedAddress)?;
        let raw = codec::b64_decode(priv_text).map_err(|_| KeyError::InvalidPrivateKey)?;
        Ok(Zeroizing::new(raw))
    }

    /// Type-safe Ed25519 view of the private key. Fails unless the
    /// private section is exactly an Ed25519 keypair blob.
    pub fn secret_key(&self) -> Result<SecretKey, KeyError> {
        let raw = self.private()?;
        let bytes: &[u8; ED25519_KEYPAIR_LEN] =
            raw.as_slice()
                .try_into()
                .map_err(|_| KeyError::UnexpectedKeyType {
                    expected: ED25519_KEYPAIR_LEN,
                    got: raw.len(),
                })?;
        let key =
            SigningKey::from_keypair_bytes(bytes).map_err(|_| KeyError::InvalidPrivateKey)?;
        Ok(SecretKey { key })
    }

    /// Sign a message with the destination's Ed25519 key.
    pub fn sign(&self, message: &[u8]) -> Result<Signature, KeyError> {
        Ok(self.secret_key()?.sign(message))
    }

    /// A signed hostname entry: the custom-base64 signature over the
    /// hostname bytes.
    pub fn hostname_entry(&self, hostname: &str) -> Result<String, KeyError> {
        if hostname.is_empty() {
            return Err(KeyError::EmptyHostname);
        }
        let sig = self.sign(hostname.as_bytes())?;
        Ok(codec::b64_encode(&sig.to_bytes()))
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("address", &self.address)
            .field("both", &"<private>")
            .finish()
    }
}

/// An Ed25519 secret key extracted from a [`KeyPair`].
pub struct SecretKey {
    key: SigningKey,
}

impl SecretKey {
    pub fn sign(&self, message: &[u8]) -> Signature {
        self.key.sign(message)
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        self.key.verifying_key()
    }

    pub fn sig_type(&self) -> SigType {
        SigType::EdDsaSha512Ed25519
    }

    /// The raw 64-byte keypair blob, zeroized on drop.
    pub fn to_keypair_bytes(&self) -> Zeroizing<[u8; 64]> {
        Zeroizing::new(self.key.to_keypair_bytes())
    }
}
