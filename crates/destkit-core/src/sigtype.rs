//! Signature-type codes used by `DEST GENERATE`.

use std::fmt;

/// Key algorithm of a generated destination, as the small integer code
/// the SAM bridge expects in `SIGNATURE_TYPE=<N>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SigType {
    DsaSha1,
    EcdsaSha256P256,
    EcdsaSha384P384,
    EcdsaSha512P521,
    RsaSha2562048,
    RsaSha3843072,
    RsaSha5124096,
    #[default]
    EdDsaSha512Ed25519,
}

impl SigType {
    /// The wire code for this signature type.
    pub fn code(self) -> u16 {
        match self {
            SigType::DsaSha1 => 0,
            SigType::EcdsaSha256P256 => 1,
            SigType::EcdsaSha384P384 => 2,
            SigType::EcdsaSha512P521 => 3,
            SigType::RsaSha2562048 => 4,
            SigType::RsaSha3843072 => 5,
            SigType::RsaSha5124096 => 6,
            SigType::EdDsaSha512Ed25519 => 7,
        }
    }

    /// Look a signature type up by its wire code.
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            0 => Some(SigType::DsaSha1),
            1 => Some(SigType::EcdsaSha256P256),
            2 => Some(SigType::EcdsaSha384P384),
            3 => Some(SigType::EcdsaSha512P521),
            4 => Some(SigType::RsaSha2562048),
            5 => Some(SigType::RsaSha3843072),
            6 => Some(SigType::RsaSha5124096),
            7 => Some(SigType::EdDsaSha512Ed25519),
            _ => None,
        }
    }
}

impl fmt::Display for SigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ed25519_code_7() {
        assert_eq!(SigType::default(), SigType::EdDsaSha512Ed25519);
        assert_eq!(SigType::default().code(), 7);
        assert_eq!(SigType::default().to_string(), "7");
    }

    #[test]
    fn codes_round_trip() {
        for code in 0..=7 {
            assert_eq!(SigType::from_code(code).unwrap().code(), code);
        }
        assert!(SigType::from_code(8).is_none());
    }
}
