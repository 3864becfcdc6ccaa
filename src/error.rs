//! Failure taxonomy for the localization pipeline.
//!
//! Locale resolution and configuration failures are raised before any
//! translator exists, so they propagate untranslated. Failures raised by a
//! wrapped operation are modeled as an explicit `(kind, message)` value and
//! come back through the pipeline with the same kind and a translated
//! message.

use std::fmt;

use thiserror::Error;

/// Classification of a failure raised by a wrapped operation.
///
/// The pipeline rebuilds failures with a translated message but never
/// changes their kind, so kind-based handling upstream keeps working after
/// translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidInput,
    NotFound,
    PermissionDenied,
    Conflict,
    Unavailable,
    Internal,
}

impl FailureKind {
    /// Stable name for the kind, also used as the message of a
    /// message-less failure.
    pub fn name(&self) -> &'static str {
        match self {
            FailureKind::InvalidInput => "invalid-input",
            FailureKind::NotFound => "not-found",
            FailureKind::PermissionDenied => "permission-denied",
            FailureKind::Conflict => "conflict",
            FailureKind::Unavailable => "unavailable",
            FailureKind::Internal => "internal",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A failure raised by a wrapped operation: a kind plus an optional
/// message.
///
/// By calling convention the message is a catalog key; the pipeline
/// replaces it with its translation before the failure reaches the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationFailure {
    pub kind: FailureKind,
    pub message: Option<String>,
}

impl OperationFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: Some(message.into()),
        }
    }

    pub fn without_message(kind: FailureKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    /// The message, or the kind name when the message is absent or blank.
    pub fn message_or_kind(&self) -> &str {
        match self.message.as_deref() {
            Some(message) if !message.trim().is_empty() => message,
            _ => self.kind.name(),
        }
    }

    /// Rebuild the failure with a new message, preserving the kind.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        Self {
            kind: self.kind,
            message: Some(message.into()),
        }
    }
}

impl fmt::Display for OperationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message_or_kind())
    }
}

impl std::error::Error for OperationFailure {}

/// Everything the localization pipeline can fail with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    /// The locale code was empty or blank.
    #[error("the locale code can't be empty or blank")]
    InvalidLocaleCode,

    /// The locale code has more than three segments.
    #[error("the locale code `{0}` is malformed")]
    MalformedLocaleCode(String),

    /// No catalog definition matches the locale code.
    #[error("the locale code `{0}` doesn't match any known locale")]
    UnknownLocaleCode(String),

    /// No default locale is configured and the invocation carries no hint.
    #[error("no default locale is configured and the invocation carries no locale hint")]
    MissingLocaleConfiguration,

    /// A required translator input was blank or missing.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A wrapped operation failed; the kind is unchanged and the message
    /// has been translated.
    #[error(transparent)]
    Failure(#[from] OperationFailure),
}
