//! Error types for URL signing

use std::error::Error as StdError;

use aws_sdk_s3::{
    error::{ProvideErrorMetadata, SdkError},
    operation::put_object::PutObjectError,
    presigning::PresigningConfigError,
};
use thiserror::Error;

/// Result type for signing operations
pub type SignerResult<T> = Result<T, SignerError>;

/// Errors that can occur while presigning a URL
#[derive(Error, Debug)]
pub enum SignerError {
    /// Presigning configuration could not be built
    #[error("Failed to create presigning config: {0}")]
    ConfigError(String),

    /// Provider rejected the request or failed to sign it
    #[error("{0}")]
    Provider(String),
}

impl From<PresigningConfigError> for SignerError {
    fn from(error: PresigningConfigError) -> Self {
        Self::ConfigError(error.to_string())
    }
}

impl From<SdkError<PutObjectError>> for SignerError {
    fn from(error: SdkError<PutObjectError>) -> Self {
        if let SdkError::ServiceError(service_err) = &error {
            if let Some(message) = service_err.err().message() {
                return Self::Provider(message.to_string());
            }
        }

        Self::Provider(message_chain(&error))
    }
}

/// Joins the `Display` output of `error` and its sources with `": "`
fn message_chain(error: &(dyn StdError + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(err) = source {
        message.push_str(": ");
        message.push_str(&err.to_string());
        source = err.source();
    }
    message
}
