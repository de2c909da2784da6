use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, UsersError};
use crate::types::Layout;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/api/v1/usuarios";
pub const ENDPOINT_ENV: &str = "USUARIOS_API_URL";

#[derive(Deserialize, Serialize, Default, Debug, PartialEq)]
pub struct Config {
    pub endpoint: Option<String>,
    pub layout: Option<Layout>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(config_path).map_err(|e| UsersError::ConfigRead {
                path: config_path.to_path_buf(),
                source: e,
            })?;

        toml::from_str(&contents).map_err(|e| UsersError::ConfigParse {
            path: config_path.to_path_buf(),
            source: e,
        })
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        let write_err = |e| UsersError::ConfigWrite {
            path: config_path.to_path_buf(),
            source: e,
        };

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        let contents = toml::to_string(self).map_err(|e| UsersError::ConfigWrite {
            path: config_path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        })?;

        std::fs::write(config_path, contents).map_err(write_err)
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "usuarios")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(UsersError::NoConfigDir)
    }

    /// Endpoint to fetch from: explicit flag, then env var, then config file,
    /// then the built-in default.
    pub fn resolve_endpoint(&self, explicit: Option<&str>) -> Result<Url> {
        let from_env = std::env::var(ENDPOINT_ENV).ok();
        self.resolve_endpoint_with(explicit, from_env.as_deref())
    }

    fn resolve_endpoint_with(&self, explicit: Option<&str>, from_env: Option<&str>) -> Result<Url> {
        let raw = explicit
            .or(from_env)
            .or(self.endpoint.as_deref())
            .unwrap_or(DEFAULT_ENDPOINT);
        parse_endpoint(raw)
    }

    /// Layout, preferring explicit argument over config.
    pub fn resolve_layout(&self, explicit: Option<Layout>) -> Layout {
        explicit.or(self.layout).unwrap_or_default()
    }
}

pub fn parse_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|_| UsersError::InvalidUrl(raw.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(UsersError::InvalidUrl(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "endpoint = \"http://localhost:8080/api/v1/usuarios\"\nlayout = \"city\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(
            config.endpoint.as_deref(),
            Some("http://localhost:8080/api/v1/usuarios")
        );
        assert_eq!(config.layout, Some(Layout::City));
    }

    #[test]
    fn test_parse_error_carries_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "layout = \"sideways\"\n").unwrap();

        match Config::load_from(&path) {
            Err(UsersError::ConfigParse { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected ConfigParse, got {other:?}"),
        }
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            endpoint: Some("http://10.0.0.2:5000/api/v1/usuarios".to_string()),
            layout: Some(Layout::Age),
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_endpoint_precedence() {
        let config = Config {
            endpoint: Some("http://from-config/users".to_string()),
            layout: None,
        };

        let url = config
            .resolve_endpoint_with(Some("http://from-flag/users"), Some("http://from-env/users"))
            .unwrap();
        assert_eq!(url.as_str(), "http://from-flag/users");

        let url = config
            .resolve_endpoint_with(None, Some("http://from-env/users"))
            .unwrap();
        assert_eq!(url.as_str(), "http://from-env/users");

        let url = config.resolve_endpoint_with(None, None).unwrap();
        assert_eq!(url.as_str(), "http://from-config/users");

        let url = Config::default().resolve_endpoint_with(None, None).unwrap();
        assert_eq!(url.as_str(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_invalid_endpoint() {
        assert!(matches!(
            parse_endpoint("not a url"),
            Err(UsersError::InvalidUrl(_))
        ));
        assert!(matches!(
            parse_endpoint("ftp://127.0.0.1/usuarios"),
            Err(UsersError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_resolve_layout() {
        let config = Config {
            endpoint: None,
            layout: Some(Layout::City),
        };
        assert_eq!(config.resolve_layout(None), Layout::City);
        assert_eq!(config.resolve_layout(Some(Layout::Age)), Layout::Age);
        assert_eq!(Config::default().resolve_layout(None), Layout::Age);
    }
}
