use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

use crate::selectors::reference::DEFAULT_MAX_DEPTH;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            resolver: ResolverConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&contents).with_context(|| "Failed to parse config TOML")
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResolverConfig {
    /// indirections followed when resolving a track reference
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter, `RUST_LOG` takes precedence
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_config_toml() -> anyhow::Result<()> {
        let toml_str = r#"
version = 1

[resolver]
max_depth = 3

[logging]
filter = "votequeue=debug"
"#;

        let cfg: Config = toml::from_str(toml_str)?;

        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.resolver.max_depth, 3);
        assert_eq!(cfg.logging.filter, "votequeue=debug");

        Ok(())
    }

    #[test]
    fn test_missing_sections_use_defaults() -> anyhow::Result<()> {
        let cfg: Config = toml::from_str("version = 2")?;

        assert_eq!(cfg.version, 2);
        assert_eq!(cfg.resolver.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(cfg.logging.filter, "info");

        let empty: Config = toml::from_str("")?;
        assert_eq!(empty.version, 1);

        Ok(())
    }

    #[test]
    fn test_load_from_file() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "[resolver]\nmax_depth = 5")?;

        let cfg = Config::load(file.path())?;

        assert_eq!(cfg.resolver.max_depth, 5);
        Ok(())
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(Config::load(Path::new("/definitely/not/here.toml")).is_err());
    }
}
