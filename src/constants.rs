// Constants module - centralized default values for URL generation
//
// This module defines all default values used throughout the codebase.
// Using constants instead of magic numbers improves maintainability
// and makes it easier to understand and modify defaults.

// =============================================================================
// Gateway defaults
// =============================================================================

/// Default output quality applied when a transformation does not set one
pub const DEFAULT_QUALITY: u8 = 80;

/// Default fit mode applied when a transformation does not set one
pub const DEFAULT_FIT: &str = "fit-in";

/// Quality value the gateway treats as "leave the source alone"
pub const QUALITY_NOOP: u8 = 100;

/// Path marker emitted in place of a signature when signing is disabled
pub const UNSAFE_MARKER: &str = "unsafe";

// =============================================================================
// Storage defaults
// =============================================================================

/// Default region for S3-compatible endpoints
pub const DEFAULT_REGION: &str = "us-east-1";

/// Default presigned URL lifetime in seconds (1 hour)
pub const DEFAULT_EXPIRES_IN_SECS: u64 = 3600;

/// Service name embedded in the SigV4 credential scope
pub const SIGV4_SERVICE: &str = "s3";

/// Algorithm identifier embedded in presigned URLs
pub const SIGV4_ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Payload sentinel for presigned requests (the body is not signed)
pub const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";

// =============================================================================
// Client defaults
// =============================================================================

/// Default width series for srcset generation
pub const DEFAULT_SRCSET_WIDTHS: &[u32] = &[320, 640, 768, 1024, 1280];
