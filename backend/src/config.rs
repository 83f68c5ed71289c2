use std::path::PathBuf;
use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DIST_DIR: &str = "frontend/dist";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    /// Output of `trunk build`.
    pub dist_dir: PathBuf,
    /// `/` or a sub-path without trailing slash, e.g. `/hayan-portfolio`.
    pub base_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
            base_path: "/".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset or blank variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(raw) = var("PORT") {
            config.port = match raw.parse::<u16>() {
                Ok(port) if port != 0 => port,
                _ => return Err(ConfigError::InvalidPort(raw)),
            };
        }
        if let Some(dir) = var("DIST_DIR") {
            config.dist_dir = PathBuf::from(dir);
        }
        if let Some(raw) = var("BASE_PATH") {
            config.base_path = normalize_base_path(&raw)?;
        }
        Ok(config)
    }
}

fn normalize_base_path(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim_matches('/');
    if trimmed.is_empty() {
        return Ok("/".to_string());
    }
    let valid = trimmed.split('/').all(|segment| {
        !segment.is_empty()
            && segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    });
    if !valid {
        return Err(ConfigError::InvalidBasePath(raw.to_string()));
    }
    Ok(format!("/{}", trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_set() {
        assert_eq!(load(&[]).unwrap(), ServerConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[("PORT", "8080"), ("DIST_DIR", "/srv/site"), ("BASE_PATH", "hayan-portfolio/")]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.dist_dir, PathBuf::from("/srv/site"));
        assert_eq!(config.base_path, "/hayan-portfolio");
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config = load(&[("PORT", "  "), ("BASE_PATH", "/")]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.base_path, "/");
    }

    #[test]
    fn rejects_bad_port() {
        assert_eq!(load(&[("PORT", "http")]), Err(ConfigError::InvalidPort("http".to_string())));
        assert_eq!(load(&[("PORT", "0")]), Err(ConfigError::InvalidPort("0".to_string())));
    }

    #[test]
    fn rejects_route_syntax_in_base_path() {
        assert!(matches!(load(&[("BASE_PATH", "/{*rest}")]), Err(ConfigError::InvalidBasePath(_))));
        assert!(matches!(load(&[("BASE_PATH", "/a//b")]), Err(ConfigError::InvalidBasePath(_))));
    }
}
