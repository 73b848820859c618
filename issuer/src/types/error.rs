//! Failures surfaced by the upload URL issuer

use thiserror::Error;

use crate::signer::SignerError;

/// Result type for issuing upload URLs
pub type IssueResult<T> = Result<T, IssueError>;

/// Errors that end an invocation with a 400 response
#[derive(Error, Debug)]
pub enum IssueError {
    /// A required query parameter is absent or empty
    #[error("Missing required query parameter '{0}'")]
    MissingParameter(&'static str),

    /// The signer could not produce a URL
    #[error(transparent)]
    Signer(#[from] SignerError),
}
