use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use aws_sdk_ssm::error::DisplayErrorContext;
use aws_types::region::Region;
use tracing::debug;

use crate::{configs::SessionConfig, error::ExportError};

/// Authenticated SDK configuration. Credentials are resolved once when the
/// session is established so a broken provider chain fails before any request.
#[derive(Debug, Clone)]
pub struct Session {
    sdk_config: SdkConfig,
}

impl Session {
    /// `credentials_provider` replaces the SDK default chain when given.
    pub async fn establish(
        config: &SessionConfig,
        credentials_provider: Option<SharedCredentialsProvider>,
    ) -> Result<Self, ExportError> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }

        if let Some(region) = config.region.clone() {
            loader = loader.region(Region::new(region));
        }

        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url.clone());
        }

        if let Some(provider) = credentials_provider {
            loader = loader.credentials_provider(provider);
        }

        let sdk_config = loader.load().await;

        let provider = sdk_config.credentials_provider().ok_or_else(|| {
            ExportError::Authentication("No AWS credentials provider available".to_string())
        })?;

        provider.provide_credentials().await.map_err(|e| {
            ExportError::Authentication(format!(
                "Failed to resolve AWS credentials: {}",
                DisplayErrorContext(&e)
            ))
        })?;

        debug!(
            region = ?sdk_config.region().map(|r| r.as_ref().to_string()),
            profile = ?config.profile,
            "AWS session established"
        );

        Ok(Self { sdk_config })
    }

    pub fn sdk_config(&self) -> &SdkConfig {
        &self.sdk_config
    }
}
