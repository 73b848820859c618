use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;

use upload_url_issuer::{
    issuer::{IssuerConfig, UploadUrlIssuer},
    server,
    signer::S3UrlSigner,
    telemetry,
    types::Environment,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env()?;
    telemetry::init(&environment);

    let s3_client = Arc::new(S3Client::from_conf(environment.s3_client_config().await));
    let issuer = Arc::new(UploadUrlIssuer::new(
        IssuerConfig::from(&environment),
        Arc::new(S3UrlSigner::new(s3_client)),
    ));

    server::start(environment, issuer).await
}
