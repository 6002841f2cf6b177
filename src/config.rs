use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_script")]
    pub script: String,
    #[serde(default = "default_quick_mode")]
    pub quick_mode: bool,
}

fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}
fn default_script() -> String {
    "hiragana".to_string()
}
fn default_quick_mode() -> bool {
    false
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            script: default_script(),
            quick_mode: default_quick_mode(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("kanadr")
            .join("config.toml")
    }

    /// Reset an unknown script name to the default. Call after
    /// deserialization to handle stale values from old configs.
    pub fn normalize_script(&mut self) {
        if !matches!(self.script.as_str(), "hiragana" | "katakana") {
            self.script = default_script();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serde_defaults_from_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.theme, "catppuccin-mocha");
        assert_eq!(config.script, "hiragana");
        assert!(!config.quick_mode);
    }

    #[test]
    fn test_config_serde_defaults_from_partial() {
        let toml_str = r#"
script = "katakana"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.script, "katakana");
        assert_eq!(config.theme, "catppuccin-mocha");
        assert!(!config.quick_mode);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let mut config = Config::default();
        config.quick_mode = true;
        config.script = "katakana".to_string();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config.theme, deserialized.theme);
        assert_eq!(config.script, deserialized.script);
        assert_eq!(config.quick_mode, deserialized.quick_mode);
    }

    #[test]
    fn test_normalize_script_valid_unchanged() {
        let mut config = Config::default();
        config.script = "katakana".to_string();
        config.normalize_script();
        assert_eq!(config.script, "katakana");
    }

    #[test]
    fn test_normalize_script_invalid_resets() {
        let mut config = Config::default();
        config.script = "hangul".to_string();
        config.normalize_script();
        assert_eq!(config.script, "hiragana");
    }
}
