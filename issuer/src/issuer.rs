//! Issues presigned upload URLs for invocations

use std::sync::Arc;

use tracing::instrument;

use crate::{
    signer::{SigningRequest, UrlSigner},
    types::{
        Environment, Invocation, InvocationResponse, IssueError, IssueResult, OBJECT_NAME_PARAM,
        UPLOAD_URL_EXPIRY_SECS,
    },
};

/// Process-wide settings fixed at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuerConfig {
    /// Bucket every URL is scoped to
    pub bucket_name: String,
    /// Lifetime of issued URLs in seconds
    pub expiry_secs: u64,
}

impl IssuerConfig {
    /// Config for `bucket_name` with the standard expiry
    #[must_use]
    pub fn new(bucket_name: impl Into<String>) -> Self {
        Self {
            bucket_name: bucket_name.into(),
            expiry_secs: UPLOAD_URL_EXPIRY_SECS,
        }
    }
}

impl From<&Environment> for IssuerConfig {
    fn from(environment: &Environment) -> Self {
        Self {
            bucket_name: environment.bucket_name(),
            expiry_secs: environment.presigned_url_expiry_secs(),
        }
    }
}

/// Turns invocations into upload URL responses
///
/// Cheap to share across concurrent invocations; holds no per-request state.
pub struct UploadUrlIssuer {
    config: IssuerConfig,
    signer: Arc<dyn UrlSigner>,
}

impl UploadUrlIssuer {
    /// Creates an issuer bound to `config`
    #[must_use]
    pub fn new(config: IssuerConfig, signer: Arc<dyn UrlSigner>) -> Self {
        Self { config, signer }
    }

    /// Returns the issuer configuration
    #[must_use]
    pub const fn config(&self) -> &IssuerConfig {
        &self.config
    }

    /// Handles one invocation
    ///
    /// Never fails: validation and signing errors become a 400 response
    /// carrying the error message.
    pub async fn handle(&self, invocation: &Invocation) -> InvocationResponse {
        match self.issue(invocation).await {
            Ok(url) => InvocationResponse::upload_url(&url),
            Err(err) => {
                match &err {
                    IssueError::MissingParameter(param) => {
                        tracing::warn!("Rejected invocation without '{param}'");
                    }
                    IssueError::Signer(signer_err) => {
                        tracing::error!("Failed to sign upload URL: {signer_err}");
                    }
                }
                InvocationResponse::error(&err.to_string())
            }
        }
    }

    /// Validates the invocation and presigns an upload URL for its object
    ///
    /// # Errors
    ///
    /// Returns `IssueError::MissingParameter` when `object_name` is absent or empty
    /// Returns `IssueError::Signer` when the signer fails
    #[instrument(skip(self, invocation), fields(bucket = %self.config.bucket_name))]
    pub async fn issue(&self, invocation: &Invocation) -> IssueResult<String> {
        let object_name = invocation
            .object_name()
            .ok_or(IssueError::MissingParameter(OBJECT_NAME_PARAM))?;

        let request = SigningRequest {
            bucket: self.config.bucket_name.clone(),
            key: object_name.to_string(),
            expires_in_secs: self.config.expiry_secs,
        };

        let presigned = self.signer.presign_put(&request).await?;

        tracing::info!(
            key = %request.key,
            expires_at = %presigned.expires_at.to_rfc3339(),
            "Issued upload URL"
        );

        Ok(presigned.url)
    }
}
