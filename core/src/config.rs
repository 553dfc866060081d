//! Client configuration from the environment.
//!
//! | Variable             | Required | Meaning                              |
//! |----------------------|----------|--------------------------------------|
//! | `ZOOM_CLIENT_ID`     | yes      | OAuth client id, stored verbatim     |
//! | `ZOOM_CLIENT_SECRET` | yes      | OAuth client secret, stored verbatim |
//! | `ZOOM_ACCESS_TOKEN`  | no       | bearer token sent with each request  |
//! | `ZOOM_BASE_URI`      | no       | overrides `https://api.zoom.us/v2/`  |
//!
//! Empty values count as unset.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use thiserror::Error;

pub const CLIENT_ID_VAR: &str = "ZOOM_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "ZOOM_CLIENT_SECRET";
pub const ACCESS_TOKEN_VAR: &str = "ZOOM_ACCESS_TOKEN";
pub const BASE_URI_VAR: &str = "ZOOM_BASE_URI";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("could not read env file {path}: {source}")]
    EnvFile {
        path: String,
        #[source]
        source: dotenvy::Error,
    },
}

#[derive(Clone, PartialEq, Eq)]
pub struct ZoomConfig {
    pub client_id: String,
    pub client_secret: String,
    pub access_token: Option<String>,
    pub base_uri: Option<String>,
}

impl ZoomConfig {
    /// Read the configuration from the process environment, loading `.env`
    /// first when one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration from a dotenv-format file without touching the
    /// process environment. Variables already set in the environment win, as
    /// they do for `from_env`.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let entries = dotenvy::from_path_iter(path).map_err(|e| ConfigError::EnvFile {
            path: path.display().to_string(),
            source: e,
        })?;
        let mut file = HashMap::new();
        for entry in entries {
            let (key, value) = entry.map_err(|e| ConfigError::EnvFile {
                path: path.display().to_string(),
                source: e,
            })?;
            file.insert(key, value);
        }
        Self::from_lookup(|key| std::env::var(key).ok().or_else(|| file.get(key).cloned()))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Ok(Self {
            client_id: get(CLIENT_ID_VAR).ok_or(ConfigError::Missing(CLIENT_ID_VAR))?,
            client_secret: get(CLIENT_SECRET_VAR).ok_or(ConfigError::Missing(CLIENT_SECRET_VAR))?,
            access_token: get(ACCESS_TOKEN_VAR),
            base_uri: get(BASE_URI_VAR),
        })
    }
}

impl fmt::Debug for ZoomConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoomConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("base_uri", &self.base_uri)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn reads_required_and_optional_values() {
        let config = ZoomConfig::from_lookup(lookup(&[
            (CLIENT_ID_VAR, "id"),
            (CLIENT_SECRET_VAR, "secret"),
            (ACCESS_TOKEN_VAR, "tok"),
            (BASE_URI_VAR, "http://localhost:3000/v2"),
        ]))
        .unwrap();
        assert_eq!(config.client_id, "id");
        assert_eq!(config.client_secret, "secret");
        assert_eq!(config.access_token.as_deref(), Some("tok"));
        assert_eq!(config.base_uri.as_deref(), Some("http://localhost:3000/v2"));
    }

    #[test]
    fn optional_values_default_to_none() {
        let config =
            ZoomConfig::from_lookup(lookup(&[(CLIENT_ID_VAR, "id"), (CLIENT_SECRET_VAR, "secret")])).unwrap();
        assert!(config.access_token.is_none());
        assert!(config.base_uri.is_none());
    }

    #[test]
    fn missing_secret_is_reported() {
        let err = ZoomConfig::from_lookup(lookup(&[(CLIENT_ID_VAR, "id")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(CLIENT_SECRET_VAR)));
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let err = ZoomConfig::from_lookup(lookup(&[(CLIENT_ID_VAR, ""), (CLIENT_SECRET_VAR, "s")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(CLIENT_ID_VAR)));
    }

    #[test]
    fn debug_redacts_secrets() {
        let config = ZoomConfig::from_lookup(lookup(&[
            (CLIENT_ID_VAR, "id"),
            (CLIENT_SECRET_VAR, "hunter2"),
            (ACCESS_TOKEN_VAR, "tok-123"),
        ]))
        .unwrap();
        let debug = format!("{config:?}");
        assert!(debug.contains("id"));
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("tok-123"));
    }

    // Single test for everything that reads the process environment, so no
    // other test observes these variables.
    #[test]
    fn env_file_and_process_environment() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{CLIENT_ID_VAR}=file-id").unwrap();
        writeln!(file, "{CLIENT_SECRET_VAR}=file-secret").unwrap();
        writeln!(file, "# comment").unwrap();
        writeln!(file, "{BASE_URI_VAR}=\"http://localhost:3000/v2\"").unwrap();
        file.flush().unwrap();

        for var in [CLIENT_ID_VAR, CLIENT_SECRET_VAR, ACCESS_TOKEN_VAR, BASE_URI_VAR] {
            std::env::remove_var(var);
        }

        let config = ZoomConfig::from_env_file(file.path()).unwrap();
        assert_eq!(config.client_id, "file-id");
        assert_eq!(config.client_secret, "file-secret");
        assert_eq!(config.base_uri.as_deref(), Some("http://localhost:3000/v2"));
        assert!(config.access_token.is_none());

        std::env::set_var(CLIENT_ID_VAR, "env-id");
        std::env::set_var(CLIENT_SECRET_VAR, "env-secret");
        std::env::set_var(ACCESS_TOKEN_VAR, "env-token");

        let config = ZoomConfig::from_env_file(file.path()).unwrap();
        assert_eq!(config.client_id, "env-id");
        assert_eq!(config.access_token.as_deref(), Some("env-token"));
        assert_eq!(config.base_uri.as_deref(), Some("http://localhost:3000/v2"));

        let config = ZoomConfig::from_env().unwrap();
        assert_eq!(config.client_id, "env-id");
        assert_eq!(config.client_secret, "env-secret");
        assert_eq!(config.access_token.as_deref(), Some("env-token"));

        for var in [CLIENT_ID_VAR, CLIENT_SECRET_VAR, ACCESS_TOKEN_VAR] {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn missing_env_file_is_reported() {
        let err = ZoomConfig::from_env_file("/nonexistent/zoom.env").unwrap_err();
        assert!(matches!(err, ConfigError::EnvFile { .. }));
        assert!(err.to_string().contains("/nonexistent/zoom.env"));
    }
}
