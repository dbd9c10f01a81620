use std::fmt;

use crate::error::ExportError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterName(String);

impl ParameterName {
    pub fn new(name: impl Into<String>) -> Result<Self, ExportError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ExportError::InvalidParameterName(
                "parameter name must not be empty".to_string(),
            ));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// SSM parameter types. `Unknown` keeps whatever the store reported.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParameterType {
    #[default]
    String,
    StringList,
    SecureString,
    Unknown(String),
}

impl ParameterType {
    pub fn from_store(value: &str) -> Self {
        match value {
            "String" => Self::String,
            "StringList" => Self::StringList,
            "SecureString" => Self::SecureString,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "String"),
            Self::StringList => write!(f, "StringList"),
            Self::SecureString => write!(f, "SecureString"),
            Self::Unknown(other) => write!(f, "{}", other),
        }
    }
}

/// A fetched parameter. `value` may hold decrypted secrets and is kept out of `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Parameter {
    name: ParameterName,
    value: String,
    version: Option<i64>,
    parameter_type: ParameterType,
}

impl Parameter {
    pub fn new(name: ParameterName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
            version: None,
            parameter_type: ParameterType::default(),
        }
    }

    pub fn with_version(mut self, version: i64) -> Self {
        self.version = Some(version);
        self
    }

    pub fn with_type(mut self, parameter_type: ParameterType) -> Self {
        self.parameter_type = parameter_type;
        self
    }

    pub fn name(&self) -> &ParameterName {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn version(&self) -> Option<i64> {
        self.version
    }

    pub fn parameter_type(&self) -> &ParameterType {
        &self.parameter_type
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameter")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("parameter_type", &self.parameter_type)
            .finish()
    }
}
