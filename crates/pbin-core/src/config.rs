use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{PbinError, PbinResult, DEFAULT_EXPIRE};

/// Top-level configuration (loaded from config.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PbinConfig {
    pub paste: PasteConfig,
    pub log: LogConfig,
    pub filler: FillerConfig,
}

impl PbinConfig {
    /// Load configuration from a TOML file, falling back to defaults when
    /// the file does not exist.
    pub fn load(path: &Path) -> PbinResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| PbinError::Config(format!("parsing {}: {e}", path.display())))
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PasteConfig {
    /// Expiry policy sent with every paste (default: 1day)
    pub default_expire: String,
    /// PrivateBin server used when building share links
    pub server_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level (default: warn)
    pub level: String,
    /// Log format: "json" or "text"
    pub format: String,
}

/// Load-test filler payload settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FillerConfig {
    /// Payload length in characters
    pub size: usize,
    /// Fixed seed for reproducible payloads (random when unset)
    pub seed: Option<u64>,
}

impl Default for PasteConfig {
    fn default() -> Self {
        Self {
            default_expire: DEFAULT_EXPIRE.into(),
            server_url: "https://privatebin.net".into(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "text".into(),
        }
    }
}

impl Default for FillerConfig {
    fn default() -> Self {
        Self {
            size: 1024,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
[paste]
default_expire = "1week"
server_url = "https://paste.example.com"

[log]
level = "debug"
format = "json"

[filler]
size = 4096
seed = 7
"#;
        let config = PbinConfig::from_toml(toml_str).unwrap();

        assert_eq!(config.paste.default_expire, "1week");
        assert_eq!(config.paste.server_url, "https://paste.example.com");
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.format, "json");
        assert_eq!(config.filler.size, 4096);
        assert_eq!(config.filler.seed, Some(7));
    }

    #[test]
    fn test_parse_defaults() {
        let config = PbinConfig::from_toml("").unwrap();

        assert_eq!(config.paste.default_expire, "1day");
        assert_eq!(config.paste.server_url, "https://privatebin.net");
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.log.format, "text");
        assert_eq!(config.filler.size, 1024);
        assert!(config.filler.seed.is_none());
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_str = r#"
[paste]
default_expire = "10min"
"#;
        let config = PbinConfig::from_toml(toml_str).unwrap();

        // Overridden
        assert_eq!(config.paste.default_expire, "10min");
        // Defaults
        assert_eq!(config.paste.server_url, "https://privatebin.net");
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_serialize_roundtrip() {
        let config = PbinConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed = PbinConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.paste.default_expire, parsed.paste.default_expire);
        assert_eq!(config.paste.server_url, parsed.paste.server_url);
        assert_eq!(config.log.format, parsed.log.format);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = PbinConfig::load(&tmp.path().join("absent.toml")).unwrap();
        assert_eq!(config.paste.default_expire, "1day");
    }

    #[test]
    fn test_load_from_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[log]\nlevel = \"trace\"\n").unwrap();

        let config = PbinConfig::load(&path).unwrap();
        assert_eq!(config.log.level, "trace");
    }

    #[test]
    fn test_load_invalid_file_is_config_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[paste\nbroken").unwrap();

        let err = PbinConfig::load(&path).unwrap_err();
        assert!(matches!(err, PbinError::Config(_)), "got {err:?}");
    }
}
