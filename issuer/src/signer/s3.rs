//! S3-backed URL signer

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::{presigning::PresigningConfig, Client as S3Client};
use chrono::{DateTime, Utc};
use tracing::debug;

use super::{PresignedUrl, SignerResult, SigningRequest, UrlSigner};

/// Signs upload URLs with an S3 client
///
/// Signing is local computation over the client's resolved credentials; no
/// request reaches the bucket.
pub struct S3UrlSigner {
    s3_client: Arc<S3Client>,
}

impl S3UrlSigner {
    /// Creates a signer around a pre-configured S3 client
    #[must_use]
    pub const fn new(s3_client: Arc<S3Client>) -> Self {
        Self { s3_client }
    }
}

#[async_trait]
impl UrlSigner for S3UrlSigner {
    async fn presign_put(&self, request: &SigningRequest) -> SignerResult<PresignedUrl> {
        debug!(
            "Generating presigned URL for s3://{}/{} valid for {}s",
            request.bucket, request.key, request.expires_in_secs
        );

        let expires_in = Duration::from_secs(request.expires_in_secs);
        let presigning_config = PresigningConfig::expires_in(expires_in)?;

        let presigned = self
            .s3_client
            .put_object()
            .bucket(&request.bucket)
            .key(&request.key)
            .presigned(presigning_config)
            .await?;

        let expires_at: DateTime<Utc> = Utc::now() + expires_in;

        Ok(PresignedUrl {
            url: presigned.uri().to_string(),
            expires_at,
        })
    }
}
