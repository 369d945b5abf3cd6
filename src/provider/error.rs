use crate::artifacts::results::OperationKind;
use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the provider core.
///
/// None of these are retried; every error is returned synchronously to the
/// immediate caller. Collaborator failures (url resolution, command
/// execution) are wrapped, validation failures carry the human-readable
/// message list verbatim.
#[derive(Debug, Error)]
pub enum ScmError {
    #[error("the scm url is invalid: {}", .messages.join(" "))]
    InvalidRepositoryUrl { messages: Vec<String> },

    #[error("{} isn't a valid directory", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("{} isn't a svn checkout directory", .path.display())]
    NotACheckout { path: PathBuf },

    #[error("failed to resolve the repository url of {}", .path.display())]
    RepositoryResolutionFailed {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("scm command execution failed")]
    CommandExecutionFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("{operation} command returned a {actual} outcome")]
    UnexpectedOutcome {
        operation: OperationKind,
        actual: OperationKind,
    },
}

impl ScmError {
    /// The validation messages of an [`ScmError::InvalidRepositoryUrl`],
    /// empty for every other kind.
    pub fn validation_messages(&self) -> &[String] {
        match self {
            ScmError::InvalidRepositoryUrl { messages } => messages,
            _ => &[],
        }
    }
}
