use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use serde_yaml::Deserializer;
use url::Url;

use crate::news::DEFAULT_ENDPOINT;

const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub endpoint: Url,
    pub request_timeout_secs: Option<u64>,
    #[serde(default)]
    pub dark_mode: bool,
    pub user_agent: Option<String>,
}

pub struct EnsureOutcome {
    pub path: PathBuf,
    pub created: bool,
}

impl Config {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn ensure_user_config() -> Result<EnsureOutcome> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix(env!("CARGO_PKG_NAME"));

        if let Some(path) = xdg_dirs.find_config_file(CONFIG_FILE) {
            return Ok(EnsureOutcome {
                path,
                created: false,
            });
        }

        let config_path = xdg_dirs
            .place_config_file(CONFIG_FILE)
            .context("Cannot create configuration directory")?;
        write_template(&config_path)?;

        Ok(EnsureOutcome {
            path: config_path,
            created: true,
        })
    }

    pub fn get_user_config() -> Result<Config> {
        let existing_config = xdg::BaseDirectories::with_prefix(env!("CARGO_PKG_NAME"))
            .find_config_file(CONFIG_FILE)
            .ok_or_else(|| anyhow!("Could not find {} in the config directory", CONFIG_FILE))?;

        Config::from_path(&existing_config)
    }

    pub fn from_path(path: &Path) -> Result<Config> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Config::from_yaml(&raw).map_err(|e| anyhow!("Invalid YAML in {}: {}", path.display(), e))
    }

    pub fn from_yaml(raw: &str) -> Result<Config> {
        let deserialized = Deserializer::from_str(raw);
        serde_path_to_error::deserialize(deserialized)
            .map_err(|e| anyhow!("at `{}`: {}", e.path(), e.inner()))
    }
}

fn write_template(path: &Path) -> Result<()> {
    let mut config_file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    write!(
        &mut config_file,
        r#"# fplnews config (YAML)
# Only `endpoint` is required.

endpoint: "{}"

# Optional: give up on a request after this many seconds (default: wait forever)
# request_timeout_secs: 20

# Optional: start in dark mode until a theme is chosen with --dark/--light or :theme
dark_mode: false

# Optional: custom User-Agent header
# user_agent: "fplnews"
"#,
        DEFAULT_ENDPOINT
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        write_template(&path).unwrap();

        let cfg = Config::from_path(&path).unwrap();
        assert_eq!(cfg.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(cfg.request_timeout(), None);
        assert!(!cfg.dark_mode);
        assert!(cfg.user_agent.is_none());
    }

    #[test]
    fn test_optional_keys() {
        let cfg = Config::from_yaml(
            "endpoint: http://localhost:3000/api/latest-news\nrequest_timeout_secs: 5\ndark_mode: true\n",
        )
        .unwrap();
        assert_eq!(cfg.request_timeout(), Some(Duration::from_secs(5)));
        assert!(cfg.dark_mode);
    }

    #[test]
    fn test_invalid_config_names_the_key() {
        let err = Config::from_yaml("endpoint: http://x\nrequest_timeout_secs: soon\n").unwrap_err();
        assert!(err.to_string().contains("request_timeout_secs"), "{err}");

        let err = Config::from_yaml("dark_mode: true\n").unwrap_err();
        assert!(err.to_string().contains("endpoint"), "{err}");
    }
}
