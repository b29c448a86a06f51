use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// Server configuration loaded from a TOML file.
///
/// ```toml
/// [storage]
/// data_dir = "/var/lib/formbase"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for all storage files.
    pub data_dir: String,

    /// Explicit SQLite path; defaults to `{data_dir}/data.sqlite`.
    pub sqlite_path: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: "./data".to_string(),
            sqlite_path: None,
        }
    }
}

impl ServerConfig {
    /// Load and parse a TOML config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let config: ServerConfig = toml::from_str(
            r#"
            [storage]
            data_dir = "/var/lib/formbase"
            sqlite_path = "/var/lib/formbase/forms.sqlite"
            "#,
        )
        .unwrap();
        assert_eq!(config.storage.data_dir, "/var/lib/formbase");
        assert_eq!(
            config.storage.sqlite_path.as_deref(),
            Some("/var/lib/formbase/forms.sqlite")
        );
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config.storage.data_dir, "./data");
        assert_eq!(config.storage.sqlite_path, None);
    }
}
