//! Error code vocabulary.
//!
//! Codes are scoped to an error source by convention; the catalog decides
//! which codes a source recognizes. An unrecognized `(source, code)`
//! combination resolves to a fallback message rather than failing.

// jwt

/// Token generation failed.
pub const TOKEN_GENERATION: &str = "token_generation";

/// Token is past its expiry.
pub const TOKEN_EXPIRED: &str = "token_expired";

/// Token failed validation.
pub const TOKEN_INVALID: &str = "token_invalid";

/// Signing configuration is absent.
pub const MISSING_CONFIG: &str = "missing_config";

// request_validation

/// Device id missing from the request.
pub const MISSING_DEVICE_ID: &str = "missing_device_id";

/// Calling application is not registered.
pub const UNKNOWN_APP: &str = "unknown_app";

/// Requested auth provider is not supported.
pub const INVALID_PROVIDER: &str = "invalid_provider";

/// Access token missing from the request.
pub const MISSING_ACCESS_TOKEN: &str = "missing_access_token";

/// Internal service token missing from the request.
pub const MISSING_INTERNAL_TOKEN: &str = "missing_internal_token";

/// User identifier missing from the request.
pub const MISSING_IDENTIFIER: &str = "missing_identifier";

/// User id missing from the request.
pub const MISSING_USER_ID: &str = "missing_user_id";

/// Phone number already registered to another user.
pub const DUPLICATE_PHONE: &str = "duplicate_phone";

// google_auth / facebook_auth

/// Provider API returned a non-success response.
pub const API_NON_SUCCESS: &str = "api_non_success";

/// Token fetch from the provider failed.
pub const TOKEN_FETCH: &str = "token_fetch";

// apple_auth

/// Fetched token id mismatch or ID-token verification failure.
pub const TOKEN_MISMATCH: &str = "token_mismatch";

/// Public-key fetch from the provider failed.
pub const KEY_FETCH: &str = "key_fetch";

// data_source

/// Could not connect to the upstream data source.
pub const CONNECTION_FAILED: &str = "connection_failed";

/// Upstream response could not be decoded.
pub const RESPONSE_DECODE: &str = "response_decode";

// document_store

/// Document fetch failed.
pub const DOCUMENT_FETCH: &str = "document_fetch";

/// Document write failed.
pub const DOCUMENT_WRITE: &str = "document_write";

/// Requested document does not exist.
pub const DOCUMENT_MISSING: &str = "document_missing";
