use std::collections::HashMap;
use std::sync::{
    Arc, RwLock,
    atomic::{AtomicUsize, Ordering},
};

use crate::domain::{Parameter, ParameterName};
use crate::store::repository::*;

/// In-memory parameter store. Names registered with [`LocalParameterStore::fail_with`]
/// return the given error instead of a value.
#[derive(Clone, Default)]
pub struct LocalParameterStore {
    parameters: Arc<RwLock<HashMap<String, Result<String, StoreError>>>>,
    requests: Arc<AtomicUsize>,
}

impl LocalParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameter(self, name: &str, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&self, name: &str, value: impl Into<String>) {
        self.write_entry(name, Ok(value.into()));
    }

    pub fn fail_with(&self, name: &str, error: StoreError) {
        self.write_entry(name, Err(error));
    }

    /// Number of `get_parameter` calls served so far.
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn write_entry(&self, name: &str, entry: Result<String, StoreError>) {
        let mut parameters = match self.parameters.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        parameters.insert(name.to_string(), entry);
    }
}

#[async_trait::async_trait]
impl ParameterStore for LocalParameterStore {
    async fn get_parameter(&self, name: &ParameterName) -> Result<Parameter, StoreError> {
        self.requests.fetch_add(1, Ordering::SeqCst);

        let parameters = self
            .parameters
            .read()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        match parameters.get(name.as_str()) {
            Some(Ok(value)) => Ok(Parameter::new(name.clone(), value.clone()).with_version(1)),
            Some(Err(error)) => Err(error.clone()),
            None => Err(StoreError::ParameterNotFound(format!("'{}'", name))),
        }
    }
}
