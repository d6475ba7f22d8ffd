//! Load persisted keys, generating them on first use.

use std::path::Path;

use tracing::debug;

use destkit_core::{key_file_exists, load_keypair, store_keypair, KeyPair};

use crate::client::SamClient;
use crate::error::SamError;

/// Load a keypair from `path`, or generate a fresh destination through
/// `client` and persist it there when the file does not exist yet.
pub async fn load_or_generate(
    path: impl AsRef<Path>,
    client: &SamClient,
) -> Result<KeyPair, SamError> {
    let path = path.as_ref();
    if key_file_exists(path)? {
        debug!(path = %path.display(), "loading destination keys from file");
        return Ok(load_keypair(path)?);
    }
    debug!(path = %path.display(), "key file missing, generating a fresh destination");
    let keys = client.generate_destination().await?;
    store_keypair(&keys, path)?;
    Ok(keys)
}
