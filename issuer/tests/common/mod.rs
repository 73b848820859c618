// Not every helper is used in every test, so we allow dead code
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::Client as S3Client;
use axum::{body::Body, http::Request, response::Response, Router};
use chrono::Utc;
use tower::ServiceExt;
use upload_url_issuer::{
    issuer::{IssuerConfig, UploadUrlIssuer},
    server,
    signer::{PresignedUrl, S3UrlSigner, SignerError, SignerResult, SigningRequest, UrlSigner},
};

pub const TEST_BUCKET: &str = "test-uploads";

/// Initialize tracing for tests
pub fn setup_test_env() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// Signer double that records every request
pub struct StubSigner {
    outcome: Result<String, String>,
    requests: Mutex<Vec<SigningRequest>>,
}

impl StubSigner {
    pub fn returning(url: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(url.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(message.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<SigningRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl UrlSigner for StubSigner {
    async fn presign_put(&self, request: &SigningRequest) -> SignerResult<PresignedUrl> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.outcome {
            Ok(url) => Ok(PresignedUrl {
                url: url.clone(),
                expires_at: Utc::now(),
            }),
            Err(message) => Err(SignerError::Provider(message.clone())),
        }
    }
}

/// S3 signer with static credentials; presigning never leaves the process
pub fn offline_s3_signer() -> Arc<S3UrlSigner> {
    let config = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("eu-west-1"))
        .credentials_provider(Credentials::new(
            "AKIDEXAMPLE",
            "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
            None,
            None,
            "test",
        ))
        .build();
    Arc::new(S3UrlSigner::new(Arc::new(S3Client::from_conf(config))))
}

/// Router wired to the given signer
pub struct TestSetup {
    pub router: Router,
}

impl TestSetup {
    pub fn new(signer: Arc<dyn UrlSigner>) -> Self {
        Self::with_bucket(TEST_BUCKET, signer)
    }

    pub fn with_bucket(bucket_name: &str, signer: Arc<dyn UrlSigner>) -> Self {
        setup_test_env();

        let issuer = Arc::new(UploadUrlIssuer::new(IssuerConfig::new(bucket_name), signer));

        Self {
            router: server::router(issuer),
        }
    }

    pub async fn send_get_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("GET")
            .body(Body::empty())?;
        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }
}

pub async fn parse_response_body(response: Response) -> serde_json::Value {
    use http_body_util::BodyExt;

    let body = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    serde_json::from_slice(&body).expect("Body is not JSON")
}
