//! Client configuration.

use std::time::Duration;

use destkit_core::SigType;

/// Default bridge endpoint on the local machine.
pub const DEFAULT_SAM_ADDR: &str = "127.0.0.1:7656";

/// Default deadline covering connect plus both protocol round trips.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a [`crate::SamClient`].
#[derive(Clone, Debug)]
pub struct SamConfig {
    /// Bridge endpoint, `host:port`.
    pub addr: String,
    /// Single deadline for the whole generation attempt.
    pub timeout: Duration,
    /// Key algorithm requested from the bridge.
    pub signature_type: SigType,
}

impl Default for SamConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_SAM_ADDR.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            signature_type: SigType::default(),
        }
    }
}

impl SamConfig {
    pub fn with_addr(mut self, addr: impl Into<String>) -> Self {
        self.addr = addr.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_signature_type(mut self, signature_type: SigType) -> Self {
        self.signature_type = signature_type;
        self
    }
}
