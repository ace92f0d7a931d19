use kernel::KernelError;

use crate::env;

static LIBRARY_API_URL: &str = "LIBRARY_API_URL";

/// Where the REST backend lives.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        Ok(Self::new(env(LIBRARY_API_URL)?))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
