pub mod loaders;
pub mod session;

use std::path::PathBuf;

pub use session::SessionConfig;

pub const DEFAULT_OUTPUT_PATH: &str = ".env";

#[async_trait::async_trait]
pub trait Configs: Sized {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>>;
}

#[derive(Debug, Clone)]
pub struct ExporterConfig {
    pub session_config: SessionConfig,
    /// Relative paths resolve against the working directory at write time.
    pub output_path: PathBuf,
    pub with_decryption: bool,
}

impl ExporterConfig {
    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            session_config: SessionConfig::default(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            with_decryption: true,
        }
    }
}

#[async_trait::async_trait]
impl Configs for ExporterConfig {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Ok(Self {
            session_config: SessionConfig::load().await?,
            ..Default::default()
        })
    }
}
