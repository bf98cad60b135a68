//! The error value passed up the call stack and logged where handled.

use std::borrow::Cow;
use std::error::Error as StdError;

use thiserror::Error;

use crate::catalog::{self, Resolution};
use crate::field::Field;
use crate::{code, source};

/// Boxed underlying cause carried by a [`LogError`].
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// An error condition identified by `(source, code, sub-code)`, with its
/// resolved message and structured log fields computed eagerly.
///
/// The message and fields always agree with the identifying attributes:
/// every `with_*` builder re-resolves them. The builders consume the value,
/// so a half-updated error is never observable and sharing a value across
/// threads while mutating it cannot compile.
///
/// # Example
///
/// ```
/// use authlog_errors::{code, source, LogError};
///
/// let err = LogError::new(source::JWT, code::TOKEN_GENERATION)
///     .with_cause(std::io::Error::other("signing key unavailable"));
/// assert_eq!(
///     err.message(),
///     "Error caught while generating token: signing key unavailable"
/// );
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct LogError {
    src: Cow<'static, str>,
    code: Cow<'static, str>,
    sub_code: Cow<'static, str>,
    #[source]
    cause: Option<Cause>,
    args: Vec<String>,
    message: String,
    fields: Vec<Field>,
}

impl LogError {
    /// Build an error for `(source, code)` with no sub-code, cause, or extra
    /// arguments. The message and fields are resolved immediately.
    #[must_use]
    pub fn new(
        source: impl Into<Cow<'static, str>>,
        code: impl Into<Cow<'static, str>>,
    ) -> Self {
        let mut err = Self {
            src: source.into(),
            code: code.into(),
            sub_code: Cow::Borrowed(""),
            cause: None,
            args: Vec::new(),
            message: String::new(),
            fields: Vec::new(),
        };
        err.reresolve();
        err
    }

    /// Attach a sub-code qualifier and re-resolve.
    #[must_use]
    pub fn with_sub_code(mut self, sub_code: impl Into<Cow<'static, str>>) -> Self {
        self.sub_code = sub_code.into();
        self.reresolve();
        self
    }

    /// Replace the underlying cause and re-resolve.
    ///
    /// Extra arguments supplied earlier are preserved, so templates that
    /// interpolate both cause and arguments keep their argument text.
    #[must_use]
    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(cause.into());
        self.reresolve();
        self
    }

    /// Supply the ordered extra arguments some codes interpolate, then
    /// re-resolve.
    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self.reresolve();
        self
    }

    /// Duplicate phone number detected during request validation.
    #[must_use]
    pub fn duplicate_phone(
        requester: impl Into<String>,
        phone: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        let phone: String = phone.into();
        let requester: String = requester.into();
        let user_id: String = user_id.into();
        Self::new(source::REQUEST_VALIDATION, code::DUPLICATE_PHONE)
            .with_sub_code(phone)
            .with_args([requester, user_id])
    }

    /// External OAuth provider API returned a non-success response.
    ///
    /// `provider` is the provider source, e.g.
    /// [`source::GOOGLE_AUTH`](crate::source::GOOGLE_AUTH).
    #[must_use]
    pub fn external_api_failure(
        provider: impl Into<Cow<'static, str>>,
        response: impl Into<String>,
        cause: impl Into<Cause>,
    ) -> Self {
        let response: String = response.into();
        Self::new(provider, code::API_NON_SUCCESS)
            .with_args([response])
            .with_cause(cause)
    }

    /// Fetched federated-auth token id did not match, or ID-token
    /// verification failed when a cause is given.
    #[must_use]
    pub fn token_mismatch(token_id: impl Into<String>, cause: Option<Cause>) -> Self {
        let token_id: String = token_id.into();
        let err = Self::new(source::APPLE_AUTH, code::TOKEN_MISMATCH).with_args([token_id]);
        match cause {
            Some(cause) => err.with_cause(cause),
            None => err,
        }
    }

    /// The error-source identifier.
    #[must_use]
    pub fn error_source(&self) -> &str {
        &self.src
    }

    /// The error-code identifier.
    #[must_use]
    pub fn error_code(&self) -> &str {
        &self.code
    }

    /// The sub-code qualifier; empty when absent.
    #[must_use]
    pub fn error_sub_code(&self) -> &str {
        &self.sub_code
    }

    /// The resolved human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Structured fields for the log line.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// The underlying cause, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }

    /// Log this error at error level with its structured fields attached.
    pub fn emit(&self) {
        tracing::error!(
            error_source = %self.src,
            error_code = %self.code,
            error_sub_code = (!self.sub_code.is_empty()).then_some(&*self.sub_code),
            "{}",
            self.message
        );
    }

    fn reresolve(&mut self) {
        let Resolution { message, fields } = catalog::resolve(
            &self.src,
            &self.code,
            &self.sub_code,
            self.cause
                .as_deref()
                .map(|cause| cause as &(dyn StdError + 'static)),
            &self.args,
        );
        self.message = message;
        self.fields = fields;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldKey;
    use std::io;

    #[test]
    fn resolves_eagerly_on_build() {
        let err = LogError::new(source::JWT, code::TOKEN_EXPIRED);
        assert_eq!(err.message(), "JWT is expired");
        assert_eq!(
            err.fields(),
            &[
                Field::new(FieldKey::ErrorSource, source::JWT),
                Field::new(FieldKey::ErrorCode, code::TOKEN_EXPIRED),
            ]
        );
    }

    #[test]
    fn display_matches_message() {
        let err = LogError::new(source::JWT, code::MISSING_CONFIG);
        assert_eq!(err.to_string(), err.message());
    }

    #[test]
    fn error_trait_source_returns_cause() {
        let err = LogError::new(source::DOCUMENT_STORE, code::DOCUMENT_FETCH)
            .with_cause(io::Error::other("bucket unreachable"));
        let cause = StdError::source(&err).expect("cause");
        assert_eq!(cause.to_string(), "bucket unreachable");
        assert_eq!(err.message(), "Error fetching document: bucket unreachable");
    }

    #[test]
    fn with_cause_recomputes_message() {
        let err = LogError::new(source::JWT, code::TOKEN_GENERATION)
            .with_cause(io::Error::other("signing key unavailable"));
        assert_eq!(
            err.message(),
            "Error caught while generating token: signing key unavailable"
        );

        let err = err.with_cause(io::Error::other("keystore timeout"));
        assert_eq!(
            err.message(),
            "Error caught while generating token: keystore timeout"
        );
    }

    #[test]
    fn with_cause_preserves_args() {
        let err = LogError::token_mismatch("tok-9", None);
        assert_eq!(err.message(), "Mismatch fetched token ID: tok-9");

        let err = err.with_cause(io::Error::other("issuer mismatch"));
        assert_eq!(
            err.message(),
            "Error verifying ID token tok-9, err: issuer mismatch"
        );
    }

    #[test]
    fn sub_code_shows_up_in_fields() {
        let err =
            LogError::new(source::JWT, code::TOKEN_EXPIRED).with_sub_code("access");
        assert_eq!(err.error_sub_code(), "access");
        assert!(
            err.fields()
                .contains(&Field::new(FieldKey::ErrorSubCode, "access"))
        );
    }

    #[test]
    fn typed_duplicate_phone_matches_generic_path() {
        let typed = LogError::duplicate_phone("alice", "555-1234", "u123");
        let generic = LogError::new(source::REQUEST_VALIDATION, code::DUPLICATE_PHONE)
            .with_sub_code("555-1234")
            .with_args(["alice", "u123"]);
        assert_eq!(typed.message(), generic.message());
        assert_eq!(
            typed.message(),
            "Requester alice phone number 555-1234 already exists for user-id: u123"
        );
    }

    #[test]
    fn typed_external_api_failure() {
        let err = LogError::external_api_failure(
            source::GOOGLE_AUTH,
            "bad_gateway",
            io::Error::other("status 502"),
        );
        assert_eq!(
            err.message(),
            "External API failure. Response: bad_gateway error: status 502"
        );
        assert_eq!(err.error_source(), source::GOOGLE_AUTH);
    }

    #[test]
    fn unknown_vocabulary_still_builds() {
        let err = LogError::new("billing", "overdue");
        assert_eq!(err.message(), "Unmatched error detected");
    }
}
