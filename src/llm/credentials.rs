//! Credential lookup, evaluated on every request.

/// Source of the provider API key. `None` means the key is absent and no
/// request should be attempted.
pub trait Credentials: Send + Sync {
    fn api_key(&self) -> Option<String>;
}

/// Reads the key from a named process environment variable at call time.
/// An empty value counts as absent.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    #[must_use]
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    #[must_use]
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Credentials for EnvCredentials {
    fn api_key(&self) -> Option<String> {
        std::env::var(&self.var)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

/// Fixed key, for embedding and tests.
#[derive(Debug, Clone)]
pub struct StaticCredentials(pub Option<String>);

impl Credentials for StaticCredentials {
    fn api_key(&self) -> Option<String> {
        self.0.clone()
    }
}

#[cfg(test)]
#[path = "credentials_test.rs"]
mod tests;
