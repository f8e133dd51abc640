//! Shared AWS configuration context
//!
//! Provides `AwsContext` for loading AWS SDK configuration once per
//! invocation and creating service clients from the same config.

use anyhow::{Context, Result};
use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use std::sync::Arc;
use tracing::debug;

/// Loaded AWS configuration for creating service clients.
///
/// Construction resolves the ambient credential and region chain
/// (environment variables, shared config files, instance metadata). A
/// context lives for a single command invocation and is never cached.
#[derive(Clone)]
pub struct AwsContext {
    config: Arc<SdkConfig>,
    region: String,
}

impl AwsContext {
    /// Load AWS configuration from the ambient chain.
    ///
    /// Fails when no region can be determined or when the credential chain
    /// cannot produce credentials. The credential probe is eager so that a
    /// misconfigured environment surfaces here rather than on the first
    /// service call.
    pub async fn load() -> Result<Self> {
        let config = aws_config::defaults(BehaviorVersion::latest()).load().await;

        let region = config
            .region()
            .map(ToString::to_string)
            .context("no AWS region configured (set AWS_REGION or a profile region)")?;

        let provider = config
            .credentials_provider()
            .context("no AWS credentials provider available")?;
        provider
            .provide_credentials()
            .await
            .context("unable to resolve AWS credentials")?;

        debug!(region = %region, "Loaded AWS configuration");

        Ok(Self {
            config: Arc::new(config),
            region,
        })
    }

    /// Get the underlying SDK config for direct client construction.
    pub fn sdk_config(&self) -> &SdkConfig {
        &self.config
    }

    /// Get the resolved region string.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Create an EC2 client from this context.
    pub fn ec2_client(&self) -> aws_sdk_ec2::Client {
        aws_sdk_ec2::Client::new(self.sdk_config())
    }

    /// Create a CloudWatch client from this context.
    pub fn cloudwatch_client(&self) -> aws_sdk_cloudwatch::Client {
        aws_sdk_cloudwatch::Client::new(self.sdk_config())
    }
}

impl std::fmt::Debug for AwsContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsContext")
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // These tests require AWS credentials and a configured region; they are
    // skipped in regular test runs.

    #[tokio::test]
    #[ignore = "requires AWS credentials"]
    async fn load_resolves_a_region() {
        let ctx = AwsContext::load().await.unwrap();
        assert!(!ctx.region().is_empty());
    }

    #[tokio::test]
    #[ignore = "requires AWS credentials"]
    async fn clone_shares_the_config() {
        let ctx1 = AwsContext::load().await.unwrap();
        let ctx2 = ctx1.clone();
        assert_eq!(ctx1.region(), ctx2.region());
    }
}
