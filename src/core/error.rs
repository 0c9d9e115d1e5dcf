//! Error kinds raised by the dependency registry and generators.
//!
//! None of these are recovered from locally: every variant aborts the run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::util::template::TemplateError;

/// Convenience alias for results carrying a [`GlueError`].
pub type GlueResult<T> = std::result::Result<T, GlueError>;

/// Fatal error raised by the core.
#[derive(Debug, Error)]
pub enum GlueError {
    /// The identity lacks the `organization/name` structure.
    #[error("\"{identity}\" is an invalid repository URI or github-path")]
    MalformedIdentity { identity: String },

    /// A manifest document is unparseable or an entry lacks a field.
    #[error("invalid manifest {}: {reason}", path.display())]
    InvalidManifest { path: PathBuf, reason: String },

    /// The version-control step returned non-success.
    #[error("cannot add or update `{identity}`, working tree must be fully committed first\n{detail}")]
    MaterializationFailure { identity: String, detail: String },

    /// An output document could not be written.
    #[error("failed to write {}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A template does not parse.
    #[error("invalid template {}", path.display())]
    InvalidTemplate {
        path: PathBuf,
        #[source]
        source: TemplateError,
    },

    /// A package-name override pattern is not a valid regular expression.
    #[error("invalid package-map pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl GlueError {
    pub(crate) fn invalid_manifest(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        GlueError::InvalidManifest {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn write_failure(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GlueError::WriteFailure {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_subject() {
        let err = GlueError::MalformedIdentity {
            identity: "justaname".into(),
        };
        assert!(err.to_string().contains("justaname"));

        let err = GlueError::invalid_manifest("deps/inglued", "missing field `@`");
        let msg = err.to_string();
        assert!(msg.contains("deps/inglued"));
        assert!(msg.contains("missing field"));

        let err = GlueError::MaterializationFailure {
            identity: "acme/widgets".into(),
            detail: String::new(),
        };
        assert!(err.to_string().contains("fully committed"));
    }
}
