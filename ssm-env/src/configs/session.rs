use super::{Configs, loaders::environment::first_env};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub profile: Option<String>,
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
}

#[async_trait::async_trait]
impl Configs for SessionConfig {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Ok(SessionConfig {
            profile: first_env(&["AWS_PROFILE"]),
            region: first_env(&["AWS_REGION", "AWS_DEFAULT_REGION"]),
            endpoint_url: first_env(&["AWS_ENDPOINT_URL_SSM", "AWS_ENDPOINT_URL"]),
        })
    }
}
