use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::SetupError;

/// Known-email list offered by the interactive menu. A BTreeMap keeps the
/// menu order deterministic.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct SetupConfig {
    #[serde(default)]
    pub emails: BTreeMap<String, String>,
}

pub fn get_config_root() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("GITSIGN_CONFIG_PATH") {
        return Ok(PathBuf::from(path));
    }
    let config_dir =
        dirs::config_dir().ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
    Ok(config_dir.join("gitsign-setup"))
}

/// Loads the known-email list, creating a commented default config on first
/// run. Read or parse failures are fatal for the invocation.
pub fn load_config() -> Result<SetupConfig, SetupError> {
    read_config().map_err(|e| SetupError::ConfigLoadFailed(format!("{:#}", e)))
}

fn read_config() -> Result<SetupConfig> {
    let root = get_config_root()?;
    let config_path = root.join("config.toml");

    if !config_path.exists() {
        return initialize_config(&root, &config_path);
    }

    let content = fs::read_to_string(&config_path).context("Failed to read config file")?;
    let config: SetupConfig = toml::from_str(&content).context("Failed to parse config file")?;
    Ok(config)
}

fn initialize_config(root: &Path, config_path: &Path) -> Result<SetupConfig> {
    fs::create_dir_all(root).context("Failed to create config root")?;

    // Manual format keeps the comments; the commented entries show the
    // selection-index to address mapping the menu expects.
    let generated_toml = r#"# gitsign-setup configuration
#
# Entries under [emails] map a menu selection to an email address, e.g.
#   "1" = "work@example.com"
#   "2" = "personal@example.com"
# With no entries, setup-gitsign falls back to a free-form prompt.

[emails]
"#;

    fs::write(config_path, generated_toml).context("Failed to write default config")?;

    let config: SetupConfig = toml::from_str(generated_toml)?;
    Ok(config)
}
