//! Message catalog: the mapping from `(source, code)` to a log message.
//!
//! The catalog is plain data. Each source owns a table of `(code, rule)`
//! pairs plus a fallback message; the two external OAuth providers share one
//! table. Resolution is total: unknown codes take the source fallback,
//! unknown sources the global one.

use std::error::Error as StdError;

use crate::field::{Field, FieldKey};
use crate::{code, source};

/// Message shared by the missing/invalid request-detail codes.
const BAD_REQUEST_DETAILS: &str = "Bad request with missing/invalid details";

/// Message returned when the source itself is not in the catalog.
const UNMATCHED: &str = "Unmatched error detected";

/// Outcome of message resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Human-readable message.
    pub message: String,
    /// Structured fields for the log line.
    pub fields: Vec<Field>,
}

/// Inputs a rule may inspect when rendering a message.
struct Request<'a> {
    sub_code: &'a str,
    cause: Option<&'a (dyn StdError + 'static)>,
    args: &'a [String],
}

enum Rule {
    /// Message used verbatim.
    Fixed(&'static str),
    /// Prefix followed by the cause description.
    WithCause(&'static str),
    /// Rule branching on sub-code, cause, or argument arity.
    Dynamic(fn(&Request<'_>) -> String),
}

impl Rule {
    fn render(&self, request: &Request<'_>) -> String {
        match self {
            Self::Fixed(text) => (*text).to_owned(),
            Self::WithCause(prefix) => format!("{prefix}{}", cause_text(request.cause)),
            Self::Dynamic(rule) => rule(request),
        }
    }
}

struct SourceTable {
    /// Sources served by this table; providers with identical rule sets
    /// share one entry.
    sources: &'static [&'static str],
    rules: &'static [(&'static str, Rule)],
    /// Message for codes this table has no rule for.
    fallback: &'static str,
}

static CATALOG: &[SourceTable] = &[
    SourceTable {
        sources: &[source::JWT],
        rules: &[
            (
                code::TOKEN_GENERATION,
                Rule::WithCause("Error caught while generating token: "),
            ),
            (code::TOKEN_EXPIRED, Rule::Fixed("JWT is expired")),
            (
                code::TOKEN_INVALID,
                Rule::WithCause("Failed to validate token: "),
            ),
            (code::MISSING_CONFIG, Rule::Fixed("Missing config")),
        ],
        fallback: "Error detected while handling JWT",
    },
    SourceTable {
        sources: &[source::REQUEST_VALIDATION],
        rules: &[
            (code::MISSING_DEVICE_ID, Rule::Fixed(BAD_REQUEST_DETAILS)),
            (code::UNKNOWN_APP, Rule::Fixed(BAD_REQUEST_DETAILS)),
            (code::INVALID_PROVIDER, Rule::Fixed(BAD_REQUEST_DETAILS)),
            (code::MISSING_ACCESS_TOKEN, Rule::Fixed(BAD_REQUEST_DETAILS)),
            (
                code::MISSING_INTERNAL_TOKEN,
                Rule::Fixed(BAD_REQUEST_DETAILS),
            ),
            (code::MISSING_IDENTIFIER, Rule::Fixed(BAD_REQUEST_DETAILS)),
            (code::MISSING_USER_ID, Rule::Fixed(BAD_REQUEST_DETAILS)),
            (code::DUPLICATE_PHONE, Rule::Dynamic(duplicate_phone)),
        ],
        fallback: "Bad Request",
    },
    SourceTable {
        sources: &[source::GOOGLE_AUTH, source::FACEBOOK_AUTH],
        rules: &[
            (code::API_NON_SUCCESS, Rule::Dynamic(external_api_failure)),
            (
                code::TOKEN_FETCH,
                Rule::WithCause("Error fetching token from provider: "),
            ),
        ],
        fallback: "Error detected in user auth flow via external provider",
    },
    SourceTable {
        sources: &[source::APPLE_AUTH],
        rules: &[
            (code::TOKEN_MISMATCH, Rule::Dynamic(token_mismatch)),
            (
                code::KEY_FETCH,
                Rule::WithCause("Error fetching public key from provider: "),
            ),
        ],
        fallback: "Error detected in federated auth flow",
    },
    SourceTable {
        sources: &[source::DATA_SOURCE],
        rules: &[
            (
                code::CONNECTION_FAILED,
                Rule::WithCause("Error connecting to upstream data source: "),
            ),
            (
                code::RESPONSE_DECODE,
                Rule::WithCause("Error decoding upstream response: "),
            ),
        ],
        fallback: "Error detected while accessing upstream data source",
    },
    SourceTable {
        sources: &[source::DOCUMENT_STORE],
        rules: &[
            (
                code::DOCUMENT_FETCH,
                Rule::WithCause("Error fetching document: "),
            ),
            (
                code::DOCUMENT_WRITE,
                Rule::WithCause("Error writing document: "),
            ),
            (code::DOCUMENT_MISSING, Rule::Fixed("Document does not exist")),
        ],
        fallback: "Error detected in document store operation",
    },
];

fn cause_text(cause: Option<&(dyn StdError + 'static)>) -> String {
    cause.map_or_else(|| String::from("unknown"), ToString::to_string)
}

fn duplicate_phone(request: &Request<'_>) -> String {
    match request.args {
        [requester, user_id] => format!(
            "Requester {requester} phone number {} already exists for user-id: {user_id}",
            request.sub_code
        ),
        _ => String::from("Duplicate phone number detected"),
    }
}

fn external_api_failure(request: &Request<'_>) -> String {
    match request.args {
        [response] => format!(
            "External API failure. Response: {response} error: {}",
            cause_text(request.cause)
        ),
        _ => String::from("External API non-successful response"),
    }
}

fn token_mismatch(request: &Request<'_>) -> String {
    match (request.args, request.cause) {
        ([token_id], None) => format!("Mismatch fetched token ID: {token_id}"),
        ([token_id], Some(cause)) => {
            format!("Error verifying ID token {token_id}, err: {cause}")
        }
        (_, cause) => format!("Empty token detected: {}", cause_text(cause)),
    }
}

/// Resolve `(source, code, sub_code)` plus context into a message and
/// structured fields.
///
/// Pure and total: identical inputs yield identical outputs, and every input
/// yields some message. The fields always carry the source and code; the
/// sub-code field is present only when `sub_code` is non-empty.
#[must_use]
pub fn resolve(
    source: &str,
    code: &str,
    sub_code: &str,
    cause: Option<&(dyn StdError + 'static)>,
    args: &[String],
) -> Resolution {
    let mut fields = vec![
        Field::new(FieldKey::ErrorSource, source),
        Field::new(FieldKey::ErrorCode, code),
    ];
    if !sub_code.is_empty() {
        fields.push(Field::new(FieldKey::ErrorSubCode, sub_code));
    }

    let request = Request {
        sub_code,
        cause,
        args,
    };
    let message = CATALOG
        .iter()
        .find(|table| table.sources.iter().any(|s| *s == source))
        .map_or_else(
            || String::from(UNMATCHED),
            |table| {
                table
                    .rules
                    .iter()
                    .find(|(rule_code, _)| *rule_code == code)
                    .map_or_else(
                        || table.fallback.to_owned(),
                        |(_, rule)| rule.render(&request),
                    )
            },
        );

    Resolution { message, fields }
}
