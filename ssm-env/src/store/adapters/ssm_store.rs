use aws_sdk_ssm::{
    Client,
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
    operation::get_parameter::GetParameterError,
};
use tracing::debug;

use crate::{
    domain::{Parameter, ParameterName, ParameterType},
    session::Session,
    store::repository::{ParameterStore, StoreError},
};

const AUTHENTICATION_ERROR_CODES: &[&str] = &[
    "UnrecognizedClientException",
    "InvalidClientTokenId",
    "ExpiredTokenException",
    "ExpiredToken",
    "InvalidSignatureException",
    "SignatureDoesNotMatch",
    "MissingAuthenticationToken",
];

const ACCESS_DENIED_ERROR_CODES: &[&str] = &[
    "AccessDeniedException",
    "AccessDenied",
    "KMSAccessDeniedException",
];

#[derive(Clone)]
pub struct SsmParameterStore {
    client: Client,
    with_decryption: bool,
}

impl SsmParameterStore {
    pub fn new(session: &Session, with_decryption: bool) -> Self {
        Self::with_client(Client::new(session.sdk_config()), with_decryption)
    }

    pub fn with_client(client: Client, with_decryption: bool) -> Self {
        Self {
            client,
            with_decryption,
        }
    }
}

impl std::fmt::Debug for SsmParameterStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SsmParameterStore")
            .field("with_decryption", &self.with_decryption)
            .finish()
    }
}

#[async_trait::async_trait]
impl ParameterStore for SsmParameterStore {
    async fn get_parameter(&self, name: &ParameterName) -> Result<Parameter, StoreError> {
        debug!(
            parameter = name.as_str(),
            with_decryption = self.with_decryption,
            "Fetching parameter from SSM"
        );

        let response = self
            .client
            .get_parameter()
            .name(name.as_str())
            .with_decryption(self.with_decryption)
            .send()
            .await
            .map_err(|err| classify_sdk_error(name, err))?;

        let ssm_parameter = response
            .parameter()
            .ok_or_else(|| StoreError::ParameterNotFound(format!("'{}' returned no parameter", name)))?;

        let mut parameter = Parameter::new(name.clone(), ssm_parameter.value().unwrap_or_default())
            .with_version(ssm_parameter.version());

        if let Some(parameter_type) = ssm_parameter.r#type() {
            parameter = parameter.with_type(ParameterType::from_store(parameter_type.as_str()));
        }

        Ok(parameter)
    }
}

fn classify_sdk_error(name: &ParameterName, err: SdkError<GetParameterError>) -> StoreError {
    match err {
        SdkError::ServiceError(context) => classify_service_error(name, context.err()),
        other => StoreError::Unavailable(format!(
            "Failed to get parameter '{}': {}",
            name,
            DisplayErrorContext(&other)
        )),
    }
}

pub(crate) fn classify_service_error(name: &ParameterName, err: &GetParameterError) -> StoreError {
    let detail = format!("'{}': {}", name, err.message().unwrap_or("no details"));

    match err {
        GetParameterError::ParameterNotFound(_) | GetParameterError::ParameterVersionNotFound(_) => {
            StoreError::ParameterNotFound(format!("'{}'", name))
        }
        // the value cannot be decrypted with the caller's KMS permissions
        GetParameterError::InvalidKeyId(_) => StoreError::AccessDenied(detail),
        _ => match err.code() {
            Some(code) if AUTHENTICATION_ERROR_CODES.contains(&code) => {
                StoreError::AuthenticationFailed(detail)
            }
            Some(code) if ACCESS_DENIED_ERROR_CODES.contains(&code) => {
                StoreError::AccessDenied(detail)
            }
            _ => StoreError::Unavailable(format!(
                "Failed to get parameter '{}': {}",
                name,
                DisplayErrorContext(err)
            )),
        },
    }
}
