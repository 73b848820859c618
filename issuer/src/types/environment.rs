//! Environment configuration for different deployment stages

use std::env;
use std::time::Duration;

use aws_config::{retry::RetryConfig, timeout::TimeoutConfig, BehaviorVersion};
use thiserror::Error;
use tracing::Level;

/// Expiry of issued upload URLs in seconds
pub const UPLOAD_URL_EXPIRY_SECS: u64 = 60 * 60;

/// Errors raised while reading the process environment
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EnvironmentError {
    /// `APP_ENV` holds an unknown stage
    #[error("Invalid environment: {0}")]
    InvalidStage(String),
}

/// Application environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Development environment (uses `LocalStack`)
    Development {
        /// Optional override for presigned URL expiry in seconds
        presign_expiry_override: Option<u64>,
    },
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// Defaults to development when `APP_ENV` is unset.
    ///
    /// # Errors
    ///
    /// Returns `EnvironmentError::InvalidStage` if `APP_ENV` contains an unknown value
    pub fn from_env() -> Result<Self, EnvironmentError> {
        Self::from_env_or("development")
    }

    /// Creates an Environment from `APP_ENV`, using `default_stage` when unset
    ///
    /// # Errors
    ///
    /// Returns `EnvironmentError::InvalidStage` if the resolved stage is unknown
    pub fn from_env_or(default_stage: &str) -> Result<Self, EnvironmentError> {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| default_stage.to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => {
                let presign_expiry_override = env::var("PRESIGNED_URL_EXPIRY_SECS")
                    .ok()
                    .and_then(|val| val.parse::<u64>().ok());

                Ok(Self::Development {
                    presign_expiry_override,
                })
            }
            _ => Err(EnvironmentError::InvalidStage(env)),
        }
    }

    /// Returns the bucket that upload URLs are issued for
    ///
    /// An unset `BUCKET_NAME` yields an empty name; the storage provider
    /// rejects it when a URL is signed.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn bucket_name(&self) -> String {
        env::var("BUCKET_NAME").unwrap_or_default()
    }

    /// Returns the endpoint URL to use for AWS services
    #[must_use]
    pub const fn override_aws_endpoint_url(&self) -> Option<&str> {
        match self {
            Self::Production | Self::Staging => None,
            // LocalStack endpoint for development
            Self::Development { .. } => Some("http://localhost:4566"),
        }
    }

    /// AWS configuration with retry and timeout settings
    pub async fn aws_config(&self) -> aws_config::SdkConfig {
        let retry_config = RetryConfig::standard()
            .with_max_attempts(3)
            .with_initial_backoff(Duration::from_millis(50));

        let timeout_config = TimeoutConfig::builder()
            .operation_timeout(Duration::from_secs(30))
            .build();

        let mut config_builder = aws_config::load_defaults(BehaviorVersion::latest())
            .await
            .to_builder()
            .retry_config(retry_config)
            .timeout_config(timeout_config);

        if let Some(endpoint_url) = self.override_aws_endpoint_url() {
            config_builder = config_builder.endpoint_url(endpoint_url);
        }

        config_builder.build()
    }

    /// AWS S3 service configuration
    pub async fn s3_client_config(&self) -> aws_sdk_s3::Config {
        let aws_config = self.aws_config().await;
        let s3_config: aws_sdk_s3::Config = (&aws_config).into();
        let mut builder = s3_config.to_builder();

        // LocalStack only serves path-style bucket addressing
        if matches!(self, Self::Development { .. }) {
            builder.set_force_path_style(Some(true));
        }

        builder.build()
    }

    /// Presigned upload URL expiry time in seconds
    #[must_use]
    pub fn presigned_url_expiry_secs(&self) -> u64 {
        match self {
            Self::Production | Self::Staging => UPLOAD_URL_EXPIRY_SECS,
            Self::Development {
                presign_expiry_override,
            } => presign_expiry_override.unwrap_or(UPLOAD_URL_EXPIRY_SECS),
        }
    }

    /// Whether logs are emitted as JSON
    #[must_use]
    pub const fn json_logs(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }

    #[must_use]
    pub fn tracing_level(&self) -> Level {
        env::var("TRACING_LEVEL")
            .ok()
            .and_then(|val| val.parse::<Level>().ok())
            .unwrap_or(match self {
                Self::Production | Self::Staging => Level::INFO,
                Self::Development { .. } => Level::DEBUG,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_environment_from_env() {
        env::remove_var("APP_ENV");
        env::remove_var("PRESIGNED_URL_EXPIRY_SECS");
        assert_eq!(
            Environment::from_env(),
            Ok(Environment::Development {
                presign_expiry_override: None
            })
        );

        env::set_var("APP_ENV", " Staging ");
        assert_eq!(Environment::from_env(), Ok(Environment::Staging));

        env::set_var("APP_ENV", "production");
        assert_eq!(Environment::from_env(), Ok(Environment::Production));

        env::remove_var("APP_ENV");
    }

    #[test]
    #[serial]
    fn test_invalid_environment() {
        env::set_var("APP_ENV", "invalid");
        let err = Environment::from_env().unwrap_err();
        assert_eq!(err, EnvironmentError::InvalidStage("invalid".to_string()));
        assert_eq!(err.to_string(), "Invalid environment: invalid");
        env::remove_var("APP_ENV");
    }

    #[test]
    #[serial]
    fn test_bucket_name() {
        env::remove_var("BUCKET_NAME");
        assert_eq!(Environment::Production.bucket_name(), "");
        assert_eq!(
            Environment::Development {
                presign_expiry_override: None
            }
            .bucket_name(),
            ""
        );

        env::set_var("BUCKET_NAME", "user-uploads");
        assert_eq!(Environment::Staging.bucket_name(), "user-uploads");
        env::remove_var("BUCKET_NAME");
    }

    #[test]
    #[serial]
    fn test_from_env_or_uses_default_stage_only_when_unset() {
        env::remove_var("APP_ENV");
        env::remove_var("PRESIGNED_URL_EXPIRY_SECS");
        let env = Environment::from_env_or("production").unwrap();
        assert_eq!(env, Environment::Production);
        assert_eq!(env.override_aws_endpoint_url(), None);

        env::set_var("APP_ENV", "development");
        assert_eq!(
            Environment::from_env_or("production"),
            Ok(Environment::Development {
                presign_expiry_override: None
            })
        );

        env::remove_var("APP_ENV");
        assert_eq!(
            Environment::from_env_or("nowhere"),
            Err(EnvironmentError::InvalidStage("nowhere".to_string()))
        );
    }

    #[test]
    fn test_presigned_url_expiry_secs() {
        assert_eq!(Environment::Production.presigned_url_expiry_secs(), 3600);
        assert_eq!(Environment::Staging.presigned_url_expiry_secs(), 3600);

        let env = Environment::Development {
            presign_expiry_override: None,
        };
        assert_eq!(env.presigned_url_expiry_secs(), 3600);

        let env = Environment::Development {
            presign_expiry_override: Some(30),
        };
        assert_eq!(env.presigned_url_expiry_secs(), 30);
    }

    #[test]
    #[serial]
    fn test_development_with_env_override() {
        env::set_var("APP_ENV", "development");
        env::set_var("PRESIGNED_URL_EXPIRY_SECS", "120");

        let env = Environment::from_env().unwrap();
        assert_eq!(env.presigned_url_expiry_secs(), 120);

        // Unparseable values fall back to the default
        env::set_var("PRESIGNED_URL_EXPIRY_SECS", "invalid");
        let env = Environment::from_env().unwrap();
        assert_eq!(
            env,
            Environment::Development {
                presign_expiry_override: None
            }
        );

        env::remove_var("PRESIGNED_URL_EXPIRY_SECS");
        env::remove_var("APP_ENV");
    }
}
