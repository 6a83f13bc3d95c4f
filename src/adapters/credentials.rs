use crate::config::toml_config::CredentialsConfig;
use crate::domain::model::Credentials;
use crate::domain::ports::CredentialSource;
use crate::utils::error::{NotifierError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Reads the mail secrets from a dotenv file without exporting them into the
/// process environment. Keys missing from the file fall back to real
/// environment variables.
#[derive(Debug, Clone)]
pub struct DotenvCredentials {
    path: PathBuf,
    keys: CredentialsConfig,
}

impl DotenvCredentials {
    pub fn new(path: impl Into<PathBuf>, keys: CredentialsConfig) -> Self {
        Self {
            path: path.into(),
            keys,
        }
    }

    pub fn from_config(config: &CredentialsConfig) -> Self {
        Self::new(config.env_file.clone(), config.clone())
    }

    fn read_file(path: &Path) -> Result<HashMap<String, String>> {
        if !path.exists() {
            tracing::warn!(
                "Credentials file {} not found, using environment only",
                path.display()
            );
            return Ok(HashMap::new());
        }

        let iter = dotenvy::from_path_iter(path).map_err(|e| NotifierError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;

        let mut values = HashMap::new();
        for item in iter {
            let (key, value) = item.map_err(|e| NotifierError::ConfigError {
                message: format!("malformed line in {}: {}", path.display(), e),
            })?;
            values.insert(key, value);
        }
        Ok(values)
    }

    fn lookup(values: &HashMap<String, String>, key: &str) -> Result<String> {
        values
            .get(key)
            .cloned()
            .or_else(|| std::env::var(key).ok())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| NotifierError::MissingCredentialError {
                key: key.to_string(),
            })
    }
}

#[async_trait]
impl CredentialSource for DotenvCredentials {
    async fn load(&self) -> Result<Credentials> {
        let values = Self::read_file(&self.path)?;

        Ok(Credentials {
            sender: Self::lookup(&values, &self.keys.sender_key)?,
            password: Self::lookup(&values, &self.keys.password_key)?,
            recipient: Self::lookup(&values, &self.keys.recipient_key)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn keys(prefix: &str) -> CredentialsConfig {
        CredentialsConfig {
            env_file: String::new(),
            sender_key: format!("{}_EMAIL", prefix),
            password_key: format!("{}_APP_PASSWORD", prefix),
            recipient_key: format!("{}_SEND_TO", prefix),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut env_file = NamedTempFile::new().unwrap();
        writeln!(env_file, "FILE_TEST_EMAIL=sender@example.com").unwrap();
        writeln!(env_file, "FILE_TEST_APP_PASSWORD=\"abcd efgh ijkl mnop\"").unwrap();
        writeln!(env_file, "FILE_TEST_SEND_TO=observer@example.com").unwrap();

        let source = DotenvCredentials::new(env_file.path(), keys("FILE_TEST"));
        let credentials = tokio_test::block_on(source.load()).unwrap();

        assert_eq!(credentials.sender, "sender@example.com");
        assert_eq!(credentials.password, "abcd efgh ijkl mnop");
        assert_eq!(credentials.recipient, "observer@example.com");
        assert!(std::env::var("FILE_TEST_EMAIL").is_err());
    }

    #[test]
    fn test_environment_fallback() {
        std::env::set_var("FALLBACK_TEST_EMAIL", "env-sender@example.com");
        std::env::set_var("FALLBACK_TEST_APP_PASSWORD", "secret");

        let mut env_file = NamedTempFile::new().unwrap();
        writeln!(env_file, "FALLBACK_TEST_SEND_TO=observer@example.com").unwrap();

        let source = DotenvCredentials::new(env_file.path(), keys("FALLBACK_TEST"));
        let credentials = tokio_test::block_on(source.load()).unwrap();

        assert_eq!(credentials.sender, "env-sender@example.com");
        assert_eq!(credentials.recipient, "observer@example.com");

        std::env::remove_var("FALLBACK_TEST_EMAIL");
        std::env::remove_var("FALLBACK_TEST_APP_PASSWORD");
    }

    #[test]
    fn test_missing_value_names_the_key() {
        let source = DotenvCredentials::new("/nonexistent/iss-notifier.env", keys("MISSING_TEST"));
        let result = tokio_test::block_on(source.load());

        match result {
            Err(NotifierError::MissingCredentialError { key }) => {
                assert_eq!(key, "MISSING_TEST_EMAIL")
            }
            other => panic!("expected missing credential, got {:?}", other),
        }
    }
}
