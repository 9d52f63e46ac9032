use libhumane::Config;
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable pointing at an alternative config file
pub const ENV_CONFIG: &str = "HUMANE_CONFIG";

/// Get the config file path, respecting HUMANE_CONFIG environment variable
pub fn get_config_path() -> PathBuf {
    if let Ok(config_path) = env::var(ENV_CONFIG) {
        return PathBuf::from(config_path);
    }

    // Default to ~/.config/humane/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("humane").join("config.yaml")
    } else {
        // Fallback to current directory
        PathBuf::from("config.yaml")
    }
}

/// Load the config file if it exists, otherwise the defaults.
///
/// A file that exists but cannot be parsed is reported and skipped.
pub fn load_or_default(path: Option<&Path>) -> Config {
    let Some(path) = path.filter(|p| p.exists()) else {
        log::debug!("no config file found, using defaults");
        return Config::default();
    };

    match Config::load(Some(path)) {
        Ok(config) => {
            log::info!("loaded config from {}", path.display());
            config
        }
        Err(e) => {
            log::warn!("ignoring config file {}: {}", path.display(), e);
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests;
