//! Unified error types for sbom-delta.
//!
//! The diff and identification cores never fail on well-formed input, so
//! the error hierarchy covers what surrounds them: reading inventory
//! documents from disk and decoding them.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sbom-delta operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SbomDeltaError {
    /// Errors while reading an inventory document
    #[error("Failed to parse inventory: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Missing required field: {field} in {context}")]
    MissingField { field: String, context: String },

    #[error("Invalid field value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Convenient Result type for sbom-delta operations
pub type Result<T> = std::result::Result<T, SbomDeltaError>;

impl SbomDeltaError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a parse error for missing field
    pub fn missing_field(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::parse(
            "missing required field",
            ParseErrorKind::MissingField {
                field: field.into(),
                context: context.into(),
            },
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }
}

impl From<std::io::Error> for SbomDeltaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for SbomDeltaError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

/// Extension trait for adding context to errors.
///
/// Context strings are prepended to whatever context the error already
/// carries, so a failure reads outermost-first:
///
/// ```ignore
/// use sbom_delta::error::ErrorContext;
///
/// let inventory = Inventory::from_json_str(&content)
///     .with_context(|| format!("reading {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<SbomDeltaError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: SbomDeltaError, new_ctx: &str) -> SbomDeltaError {
    match err {
        SbomDeltaError::Parse {
            context: existing,
            source,
        } => SbomDeltaError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        SbomDeltaError::Io {
            path,
            message,
            source,
        } => SbomDeltaError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
    }
}

/// Chain two context strings as "`new`: `existing`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
