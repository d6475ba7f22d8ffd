//! SAM bridge client.
//!
//! Talks the minimal line-oriented SAM protocol to a local bridge to
//! mint fresh destination keypairs: one connection, a version handshake,
//! one `DEST GENERATE` exchange, then the connection is dropped. Every
//! step failure is terminal; retry policy belongs to the caller.

#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod loader;

pub use client::SamClient;
pub use config::SamConfig;
pub use error::SamError;
pub use loader::load_or_generate;
