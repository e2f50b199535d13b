use anyhow::{anyhow, Result};
use std::{env, path::PathBuf};

const APP_DIR: &str = "dev-tools";
const STORAGE_ENV: &str = "DEV_TOOLS_STORAGE";
const STORAGE_FILE: &str = "storage.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub storage_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let storage_path = match env::var_os(STORAGE_ENV) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => default_storage_path()?,
        };

        log::debug!("Using storage file {:?}", storage_path);

        Ok(Self { storage_path })
    }
}

fn default_storage_path() -> Result<PathBuf> {
    let config_dir =
        dirs::config_dir().ok_or_else(|| anyhow!("Could not determine config directory"))?;

    Ok(config_dir.join(APP_DIR).join(STORAGE_FILE))
}
