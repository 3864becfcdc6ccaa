use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::locales;

pub const CONFIG_FILE_NAME: &str = ".glossarc.json";

/// Pipeline configuration.
///
/// The default locale is explicit state with a defined initialization
/// point: it is validated when the configuration loads and handed to the
/// pipeline by value, never read back from ambient globals.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Locale used when an invocation carries no hint.
    #[serde(default)]
    pub default_locale: Option<String>,
    /// Directory holding `<code>.json` bundle files.
    #[serde(default = "default_messages_root")]
    pub messages_root: String,
}

fn default_messages_root() -> String {
    "./messages".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_locale: None,
            messages_root: default_messages_root(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the default locale code doesn't resolve against
    /// the locale catalog.
    pub fn validate(&self) -> Result<()> {
        if let Some(code) = &self.default_locale {
            locales::resolve(code)
                .with_context(|| format!("Invalid default locale in config: \"{}\"", code))?;
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use tempfile::tempdir;

    use crate::config::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.default_locale.is_none());
        assert_eq!(config.messages_root, "./messages");
    }

    #[test]
    fn test_parse_config() {
        let json = r#"{
              "defaultLocale": "pt_BR",
              "messagesRoot": "./bundles"
          }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.default_locale.as_deref(), Some("pt_BR"));
        assert_eq!(config.messages_root, "./bundles");
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{ "defaultLocale": "en-US" }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.default_locale.as_deref(), Some("en-US"));
        assert_eq!(config.messages_root, default_messages_root());
    }

    #[test]
    fn test_validate_accepts_resolvable_default() {
        let config = Config {
            default_locale: Some("pt-BR".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_default() {
        let config = Config {
            default_locale: Some("xx_YY".to_string()),
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("xx_YY"));
    }

    #[test]
    fn test_find_config_file() {
        let dir = tempdir().unwrap();
        let sub_dir = dir.path().join("src").join("handlers");
        fs::create_dir_all(&sub_dir).unwrap();

        let config_path = dir.path().join(CONFIG_FILE_NAME);
        File::create(&config_path).unwrap();

        let found = find_config_file(&sub_dir);
        assert!(found.is_some());
        assert_eq!(found.unwrap(), config_path);
    }

    #[test]
    fn test_find_config_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let found = find_config_file(dir.path());
        assert!(found.is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        fs::write(&config_path, r#"{ "defaultLocale": "pt_BR" }"#).unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(result.from_file);
        assert_eq!(result.config.default_locale.as_deref(), Some("pt_BR"));
    }

    #[test]
    fn test_load_config_default_when_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(!result.from_file);
        assert!(result.config.default_locale.is_none());
    }

    #[test]
    fn test_load_config_with_invalid_default_fails() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        fs::write(&config_path, r#"{ "defaultLocale": "pt_pt_pt_BR" }"#).unwrap();

        let result = load_config(dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_default_config_json_round_trips() {
        let json = default_config_json().unwrap();
        assert!(json.contains("messagesRoot"));
        let config: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config.messages_root, default_messages_root());
    }
}
