//! Two-line key-file persistence.
//!
//! Line 1 is the address's base64 text, line 2 the combined
//! public+private blob. No trailing metadata. Existing files are
//! overwritten in place.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::addr::Destination;
use crate::keys::KeyPair;

/// Errors from reading or writing persisted keys.
#[derive(Debug, Error)]
pub enum KeystoreError {
    #[error("malformed key file: expected an address line and a key line")]
    MalformedKeyFile,
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Read a keypair from a two-line byte stream. The address line is taken
/// as trusted; validate through [`Destination::from_base64`] if the
/// source is not.
pub fn read_keypair<R: Read>(mut reader: R) -> Result<KeyPair, KeystoreError> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    let mut lines = buf.split('\n');
    let address = lines.next().ok_or(KeystoreError::MalformedKeyFile)?;
    let both = lines.next().ok_or(KeystoreError::MalformedKeyFile)?;
    debug!(addr_len = address.len(), "loaded keypair");
    Ok(KeyPair::new(Destination::unchecked(address), both))
}

/// Write a keypair as the two-line format.
pub fn write_keypair<W: Write>(keys: &KeyPair, mut writer: W) -> Result<(), KeystoreError> {
    writer.write_all(keys.address().as_base64().as_bytes())?;
    writer.write_all(b"\n")?;
    writer.write_all(keys.both().as_bytes())?;
    Ok(())
}

/// Load a keypair from a key file.
pub fn load_keypair(path: impl AsRef<Path>) -> Result<KeyPair, KeystoreError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading keys from file");
    let file = File::open(path)?;
    read_keypair(BufReader::new(file))
}

/// Store a keypair to a key file, creating it or overwriting in place.
pub fn store_keypair(keys: &KeyPair, path: impl AsRef<Path>) -> Result<(), KeystoreError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "storing keys to file");
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_keypair(keys, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Whether `path` exists and is a regular file (not a directory).
pub fn key_file_exists(path: impl AsRef<Path>) -> Result<bool, KeystoreError> {
    match std::fs::metadata(path.as_ref()) {
        Ok(meta) => Ok(meta.is_file()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err.into()),
    }
}
