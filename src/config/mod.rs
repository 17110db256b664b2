// Configuration module

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{DEFAULT_EXPIRES_IN_SECS, DEFAULT_FIT, DEFAULT_QUALITY, DEFAULT_REGION};
use crate::error::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Default signer algorithm name
fn default_signer_type() -> String {
    "sha1".to_string()
}

/// Default fit mode applied when a transformation does not choose one
fn default_fit() -> Option<String> {
    Some(DEFAULT_FIT.to_string())
}

/// Default quality applied when a transformation does not choose one
fn default_quality() -> Option<u8> {
    Some(DEFAULT_QUALITY)
}

fn default_auto_webp() -> bool {
    true
}

/// Default storage region
fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

/// Default presigned URL lifetime in seconds
fn default_expires_in() -> u64 {
    DEFAULT_EXPIRES_IN_SECS
}

/// Settings for the image gateway URL builder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Base URL of the gateway, e.g. `https://img.example.com`
    pub host: String,

    /// Shared HMAC secret; may stay empty only in unsafe mode
    #[serde(default)]
    pub secret: String,

    /// Signature algorithm: sha1, sha256 or sha512 (default: sha1)
    #[serde(default = "default_signer_type")]
    pub signer_type: String,

    /// Truncate signatures to this many characters when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signer_truncate: Option<usize>,

    /// Emit /unsafe URLs without any signature (default: false)
    #[serde(default)]
    pub unsafe_mode: bool,

    /// Fit mode applied when a transformation leaves it unset (default: fit-in)
    #[serde(default = "default_fit")]
    pub default_fit: Option<String>,

    /// Quality applied when a transformation leaves it unset (default: 80)
    #[serde(default = "default_quality")]
    pub default_quality: Option<u8>,

    /// Format applied when a transformation leaves it unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_format: Option<String>,

    /// Append format(webp) for transformations that allow it (default: true)
    #[serde(default = "default_auto_webp")]
    pub auto_webp: bool,

    /// Append format(avif) for transformations that allow it (default: false)
    #[serde(default)]
    pub auto_avif: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig {
            host: String::new(),
            secret: String::new(),
            signer_type: default_signer_type(),
            signer_truncate: None,
            unsafe_mode: false,
            default_fit: default_fit(),
            default_quality: default_quality(),
            default_format: None,
            auto_webp: true,
            auto_avif: false,
        }
    }
}

/// Settings for the S3-compatible object store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Endpoint URL, e.g. `http://localhost:9000`
    #[serde(default)]
    pub endpoint: String,

    /// Bucket that presigned URLs target by default
    #[serde(default)]
    pub bucket: String,

    #[serde(default)]
    pub access_key: String,

    #[serde(default)]
    pub secret_key: String,

    /// Region used in the credential scope (default: us-east-1)
    #[serde(default = "default_region")]
    pub region: String,

    /// Presigned URL lifetime in seconds (default: 3600)
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            endpoint: String::new(),
            bucket: String::new(),
            access_key: String::new(),
            secret_key: String::new(),
            region: default_region(),
            expires_in: default_expires_in(),
        }
    }
}

/// Connection settings in the shape S3-compatible storage services expect
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageServiceConfig {
    pub service: String,
    pub endpoint: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub bucket: String,
    pub region: String,
    pub force_path_style: bool,
}

impl StorageConfig {
    /// True when everything a presigned URL needs is present: endpoint,
    /// bucket and both credentials
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty()
            && !self.bucket.is_empty()
            && !self.access_key.is_empty()
            && !self.secret_key.is_empty()
    }

    /// Storage settings under the field names S3 service definitions use
    ///
    /// MinIO needs path-style addressing, so `force_path_style` is always
    /// on.
    pub fn service_config(&self) -> StorageServiceConfig {
        StorageServiceConfig {
            service: "S3".to_string(),
            endpoint: self.endpoint.clone(),
            access_key_id: self.access_key.clone(),
            secret_access_key: self.secret_key.clone(),
            bucket: self.bucket.clone(),
            region: self.region.clone(),
            force_path_style: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            gateway: GatewayConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Config {
    pub fn from_yaml_with_env(yaml: &str) -> Result<Self, Error> {
        // Replace ${VAR_NAME} with environment variable values
        let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").map_err(|e| Error::config(e.to_string()))?;

        // First, check that all referenced environment variables exist
        for caps in re.captures_iter(yaml) {
            let var_name = &caps[1];
            std::env::var(var_name).map_err(|_| {
                Error::config(format!(
                    "Environment variable '{}' is referenced but not set",
                    var_name
                ))
            })?;
        }

        // Now perform the substitution (we know all vars exist)
        let substituted = re.replace_all(yaml, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap() // Safe because we checked above
        });

        let config: Config =
            serde_yaml::from_str(&substituted).map_err(|e| Error::config(e.to_string()))?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config file: {}", e)))?;
        Self::from_yaml_with_env(&yaml)
    }

    /// Build a config from process environment variables
    ///
    /// Reads IMAGOR_URL, IMAGOR_SECRET, MINIO_ENDPOINT, MINIO_BUCKET,
    /// MINIO_ACCESS_KEY, MINIO_SECRET_KEY and MINIO_REGION; anything unset
    /// keeps its default. Validation stays a separate step so callers can
    /// layer a config file on top first.
    pub fn from_env() -> Self {
        let mut config = Config::default();
        if let Ok(host) = std::env::var("IMAGOR_URL") {
            config.gateway.host = host;
        }
        if let Ok(secret) = std::env::var("IMAGOR_SECRET") {
            config.gateway.secret = secret;
        }
        if let Ok(endpoint) = std::env::var("MINIO_ENDPOINT") {
            config.storage.endpoint = endpoint;
        }
        if let Ok(bucket) = std::env::var("MINIO_BUCKET") {
            config.storage.bucket = bucket;
        }
        if let Ok(access_key) = std::env::var("MINIO_ACCESS_KEY") {
            config.storage.access_key = access_key;
        }
        if let Ok(secret_key) = std::env::var("MINIO_SECRET_KEY") {
            config.storage.secret_key = secret_key;
        }
        if let Ok(region) = std::env::var("MINIO_REGION") {
            config.storage.region = region;
        }
        config
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.gateway.validate()
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.host.is_empty() {
            return Err(Error::config("gateway host is required"));
        }
        if self.secret.is_empty() && !self.unsafe_mode {
            return Err(Error::config(
                "gateway secret is required when signing is enabled",
            ));
        }
        // Reject unknown signer names here rather than at first use
        self.signer_type
            .parse::<crate::imagor::signer::SignerType>()?;
        Ok(())
    }
}
