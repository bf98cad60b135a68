//! Error source vocabulary.
//!
//! An error source names the subsystem an error condition originated in. The
//! set is closed: calling code picks one of these constants when building a
//! [`LogError`](crate::LogError), and the message catalog keys off them.

/// JWT generation and validation.
pub const JWT: &str = "jwt";

/// Inbound request validation.
pub const REQUEST_VALIDATION: &str = "request_validation";

/// Upstream data-source access.
pub const DATA_SOURCE: &str = "data_source";

/// Google OAuth provider.
pub const GOOGLE_AUTH: &str = "google_auth";

/// Facebook OAuth provider.
pub const FACEBOOK_AUTH: &str = "facebook_auth";

/// Apple federated-auth provider.
pub const APPLE_AUTH: &str = "apple_auth";

/// Document-store access.
pub const DOCUMENT_STORE: &str = "document_store";
