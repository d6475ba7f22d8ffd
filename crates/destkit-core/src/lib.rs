//! Core value types for I2P destination identities.
//!
//! A destination is the public half of an overlay identity: an opaque
//! byte blob (key material, optionally a certificate) carried around in
//! its custom-base64 textual form. This crate provides the full address
//! ([`Destination`]), the 32-byte short form ([`DestHash`]), generated
//! keypairs ([`KeyPair`]) with an Ed25519 signing view, signature-type
//! codes, and the two-line key-file persistence format.

#![forbid(unsafe_code)]

pub mod addr;
pub mod display;
pub mod hash;
pub mod keys;
pub mod keystore;
pub mod sigtype;

pub use addr::{five_hundred_as, AddrError, Destination};
pub use display::{display_mode, set_display_mode, DisplayMode};
pub use hash::{DestHash, HashError};
pub use keys::{KeyError, KeyPair, SecretKey};
pub use keystore::{
    key_file_exists, load_keypair, read_keypair, store_keypair, write_keypair, KeystoreError,
};
pub use sigtype::SigType;

#[cfg(test)]
mod proptests;
