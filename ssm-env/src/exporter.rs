use std::{path::PathBuf, sync::Arc};

use aws_credential_types::provider::SharedCredentialsProvider;
use tracing::debug;

use crate::{
    configs::ExporterConfig,
    domain::ParameterName,
    env_file::{EnvMapping, write_env_file},
    error::ExportError,
    session::Session,
    store::{adapters::ssm_store::SsmParameterStore, repository::ParameterStore},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub parameter: ParameterName,
    pub version: Option<i64>,
    pub entries: usize,
    pub output_path: PathBuf,
}

pub struct Exporter<S>
where
    S: ParameterStore + ?Sized,
{
    store: Arc<S>,
    output_path: PathBuf,
}

impl Exporter<SsmParameterStore> {
    /// Establishes an AWS session and builds an exporter backed by SSM.
    pub async fn connect(
        config: &ExporterConfig,
        credentials_provider: Option<SharedCredentialsProvider>,
    ) -> Result<Self, ExportError> {
        let session = Session::establish(&config.session_config, credentials_provider).await?;
        let store = SsmParameterStore::new(&session, config.with_decryption);

        Ok(Self::new(Arc::new(store), config.output_path.clone()))
    }
}

impl<S> Exporter<S>
where
    S: ParameterStore + ?Sized,
{
    pub fn new(store: Arc<S>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            output_path: output_path.into(),
        }
    }

    /// Fetches `name`, parses it as a JSON object and overwrites the output file.
    /// The file is left untouched when the fetch or the parse fails.
    pub async fn export(&self, name: &ParameterName) -> Result<ExportReport, ExportError> {
        let parameter = self.store.get_parameter(name).await?;
        debug!(
            parameter = name.as_str(),
            version = ?parameter.version(),
            parameter_type = %parameter.parameter_type(),
            "Parameter fetched"
        );

        let mapping = EnvMapping::parse(name.as_str(), parameter.value())?;
        write_env_file(&self.output_path, &mapping)?;

        Ok(ExportReport {
            parameter: name.clone(),
            version: parameter.version(),
            entries: mapping.len(),
            output_path: self.output_path.clone(),
        })
    }
}

impl<S> std::fmt::Debug for Exporter<S>
where
    S: ParameterStore + ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Exporter")
            .field("output_path", &self.output_path)
            .finish()
    }
}

/// Validates the name, establishes a session and exports in one call.
/// An empty name fails before any credentials are resolved.
pub async fn export(
    parameter_name: &str,
    config: &ExporterConfig,
    credentials_provider: Option<SharedCredentialsProvider>,
) -> Result<ExportReport, ExportError> {
    let name = ParameterName::new(parameter_name)?;
    let exporter = Exporter::connect(config, credentials_provider).await?;
    exporter.export(&name).await
}
