//! Protocol client errors.

use std::io;

use thiserror::Error;

use destkit_core::KeystoreError;

/// Failure of a generation attempt, naming the step that failed.
///
/// Key segment errors carry lengths and reasons only, never the key text
/// itself.
#[derive(Debug, Error)]
pub enum SamError {
    #[error("connecting to SAM bridge: {0}")]
    Connect(#[source] io::Error),
    #[error("writing command to SAM bridge: {0}")]
    Write(#[source] io::Error),
    #[error("reading SAM bridge response: {0}")]
    Read(#[source] io::Error),
    /// The handshake line did not contain `RESULT=OK`. The rejected line
    /// is carried verbatim; it holds no key material.
    #[error("SAM handshake rejected: {0}")]
    Handshake(String),
    #[error("malformed key response: {0}")]
    Parse(&'static str),
    #[error("invalid {which} key segment: {len} characters")]
    InvalidKeyResponse { which: &'static str, len: usize },
    #[error("SAM response line exceeded 4096 bytes")]
    ResponseTooLarge,
    #[error("SAM operation timed out")]
    Timeout,
    #[error("key file error: {0}")]
    Keystore(#[from] KeystoreError),
}
