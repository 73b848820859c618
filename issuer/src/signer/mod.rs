//! URL signing delegated to the storage provider

mod error;
mod s3;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub use error::{SignerError, SignerResult};
pub use s3::S3UrlSigner;

/// Parameters of a single presigned `PutObject` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningRequest {
    /// Target bucket
    pub bucket: String,
    /// Object key the URL grants upload access to
    pub key: String,
    /// Lifetime of the URL in seconds
    pub expires_in_secs: u64,
}

/// Presigned URL with expiration information
#[derive(Debug, Clone)]
pub struct PresignedUrl {
    /// The presigned URL for PUT operations
    pub url: String,
    /// UTC timestamp when the URL expires
    pub expires_at: DateTime<Utc>,
}

/// Produces presigned upload URLs
#[async_trait]
pub trait UrlSigner: Send + Sync {
    /// Presigns a `PutObject` operation described by `request`
    ///
    /// # Errors
    ///
    /// Returns a `SignerError` when the provider cannot sign the request
    async fn presign_put(&self, request: &SigningRequest) -> SignerResult<PresignedUrl>;
}
