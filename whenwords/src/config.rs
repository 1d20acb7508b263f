use libwhenwords::Config;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config file path, respecting WHENWORDS_CONFIG environment variable
pub fn get_config_path() -> PathBuf {
    if let Ok(config_path) = env::var("WHENWORDS_CONFIG") {
        return PathBuf::from(config_path);
    }

    // Default to ~/.config/whenwords/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("whenwords").join("config.yaml")
    } else {
        // Fallback to current directory
        PathBuf::from("config.yaml")
    }
}

/// Save configuration to a file as YAML
pub fn save_config(config: &Config, path: &Path) -> Result<(), String> {
    // Create parent directory if it doesn't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }

    let yaml = serde_yaml::to_string(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    fs::write(path, yaml).map_err(|e| format!("Failed to write config file: {}", e))?;
    log::info!("wrote config to {}", path.display());

    Ok(())
}

/// Initialize a new config file with default values
pub fn init_config(config_path: &Path) -> Result<(), String> {
    if config_path.exists() {
        return Err(
            "Config file already exists. Edit it directly or remove it to recreate.".to_string(),
        );
    }

    save_config(&Config::default(), config_path)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
