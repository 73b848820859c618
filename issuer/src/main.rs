use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use lambda_runtime::{service_fn, Error, LambdaEvent};

use upload_url_issuer::{
    issuer::{IssuerConfig, UploadUrlIssuer},
    signer::S3UrlSigner,
    telemetry,
    types::{Environment, Invocation, InvocationResponse},
};

async fn handle(
    issuer: &UploadUrlIssuer,
    event: LambdaEvent<Invocation>,
) -> Result<InvocationResponse, Error> {
    Ok(issuer.handle(&event.payload).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Deployed functions run against real AWS unless APP_ENV says otherwise
    let environment = Environment::from_env_or("production")?;
    telemetry::init(&environment);

    let s3_client = Arc::new(S3Client::from_conf(environment.s3_client_config().await));
    let issuer = UploadUrlIssuer::new(
        IssuerConfig::from(&environment),
        Arc::new(S3UrlSigner::new(s3_client)),
    );

    tracing::info!(
        "Upload URL issuer ready for bucket: {}",
        issuer.config().bucket_name
    );

    lambda_runtime::run(service_fn(|event| handle(&issuer, event))).await
}
