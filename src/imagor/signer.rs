//! HMAC path signing
//!
//! Signs canonical gateway paths with a keyed digest. The gateway accepts
//! HMAC-SHA1, -SHA256 or -SHA512 signatures, base64url-encoded without
//! padding, optionally truncated to a configured length.

use std::str::FromStr;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Sha256, Sha512};

use crate::error::Error;

type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;
type HmacSha512 = Hmac<Sha512>;

/// Digest algorithm used for path signatures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignerType {
    #[default]
    Sha1,
    Sha256,
    Sha512,
}

impl SignerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }

    /// Length of a full base64url-encoded signature, without padding
    pub fn encoded_len(&self) -> usize {
        match self {
            Self::Sha1 => 27,
            Self::Sha256 => 43,
            Self::Sha512 => 86,
        }
    }
}

impl FromStr for SignerType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sha1" => Ok(SignerType::Sha1),
            "sha256" => Ok(SignerType::Sha256),
            "sha512" => Ok(SignerType::Sha512),
            _ => Err(Error::config(format!(
                "invalid signer type '{}': must be sha1, sha256 or sha512",
                s
            ))),
        }
    }
}

/// Signs gateway paths with a secret key
#[derive(Debug, Clone)]
pub struct PathSigner {
    secret: Vec<u8>,
    signer_type: SignerType,
    truncate: Option<usize>,
}

impl PathSigner {
    pub fn new(secret: impl Into<Vec<u8>>, signer_type: SignerType, truncate: Option<usize>) -> Self {
        Self {
            secret: secret.into(),
            signer_type,
            truncate,
        }
    }

    /// Generate the signature for a canonical path
    ///
    /// Returns the base64url-encoded digest without padding, truncated when
    /// a positive truncation length is configured.
    pub fn sign(&self, path: &str) -> String {
        let digest = match self.signer_type {
            SignerType::Sha1 => hmac_sha1(&self.secret, path.as_bytes()),
            SignerType::Sha256 => hmac_sha256(&self.secret, path.as_bytes()),
            SignerType::Sha512 => hmac_sha512(&self.secret, path.as_bytes()),
        };

        let mut signature = URL_SAFE_NO_PAD.encode(digest);
        if let Some(len) = self.truncate {
            if len > 0 && len < signature.len() {
                signature.truncate(len);
            }
        }
        signature
    }

    pub fn signer_type(&self) -> SignerType {
        self.signer_type
    }
}

fn hmac_sha1(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha1::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

fn hmac_sha512(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha512::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}
