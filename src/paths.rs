use anyhow::{Context, Result};
use std::path::PathBuf;

/// Configuration for overriding default application paths
#[derive(Debug, Clone, Default)]
pub struct PathConfig {
    /// Custom config directory (from CLI or ENV)
    pub config_dir: Option<PathBuf>,
}

impl PathConfig {
    /// Create PathConfig from CLI arguments and environment variables
    ///
    /// Priority: CLI args → ENV var (VITRINE_CONFIG_DIR) → None (use defaults)
    pub fn from_env_and_cli(cli_dir: Option<PathBuf>) -> Self {
        let config_dir = cli_dir.or_else(|| {
            std::env::var("VITRINE_CONFIG_DIR")
                .ok()
                .map(PathBuf::from)
        });

        Self { config_dir }
    }
}

/// Get path to a configuration file
///
/// Priority:
/// 1. CLI --config-dir argument
/// 2. VITRINE_CONFIG_DIR environment variable
/// 3. Local folder IF any config files exist (vitrine.json, vitrine.log)
/// 4. Platform-specific config directory from dirs-next (default)
///
/// Platform paths:
/// - Linux: ~/.config/vitrine/{name}
/// - macOS: ~/Library/Application Support/vitrine/{name}
/// - Windows: %APPDATA%\vitrine\{name}
pub fn config_file(name: &str, config: &PathConfig) -> PathBuf {
    get_config_dir(config).join(name)
}

/// Get path to a data file (logs etc.)
///
/// Same priority chain as [`config_file`], resolving to the platform data
/// directory in the default case:
/// - Linux: ~/.local/share/vitrine/{name}
/// - macOS: ~/Library/Application Support/vitrine/{name}
/// - Windows: %APPDATA%\vitrine\{name}
pub fn data_file(name: &str, config: &PathConfig) -> PathBuf {
    get_data_dir(config).join(name)
}

/// Ensure that configuration and data directories exist
///
/// Creates directories if they don't exist. Returns error if creation fails.
pub fn ensure_dirs(config: &PathConfig) -> Result<()> {
    let config_dir = get_config_dir(config);
    let data_dir = get_data_dir(config);

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir).with_context(|| {
            format!("Failed to create config directory: {}", config_dir.display())
        })?;
    }

    // Only create data_dir if it's different from config_dir
    if data_dir != config_dir && !data_dir.exists() {
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    }

    Ok(())
}

/// Check if any config files exist in the given directory
fn has_local_config_files(dir: &PathBuf) -> bool {
    let files = ["vitrine.json", "vitrine.log"];
    files.iter().any(|f| dir.join(f).exists())
}

/// Get the configuration directory
fn get_config_dir(config: &PathConfig) -> PathBuf {
    // Priority 1: Custom directory from CLI or ENV
    if let Some(dir) = &config.config_dir {
        return dir.clone();
    }

    // Priority 2: Local folder IF config files exist there
    if let Ok(current_dir) = std::env::current_dir() {
        if has_local_config_files(&current_dir) {
            return current_dir;
        }
    }

    // Priority 3: Platform-specific config directory
    if let Some(dir) = dirs_next::config_dir() {
        return dir.join("vitrine");
    }

    // Fallback: "." if everything else fails
    PathBuf::from(".")
}

/// Get the data directory
fn get_data_dir(config: &PathConfig) -> PathBuf {
    // Priority 1: Custom directory from CLI or ENV (same as config)
    if let Some(dir) = &config.config_dir {
        return dir.clone();
    }

    // Priority 2: Local folder IF config files exist there
    if let Ok(current_dir) = std::env::current_dir() {
        if has_local_config_files(&current_dir) {
            return current_dir;
        }
    }

    // Priority 3: Platform-specific data directory
    if let Some(dir) = dirs_next::data_dir() {
        return dir.join("vitrine");
    }

    // Fallback: "." if everything else fails
    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_with_custom_dir() {
        let config = PathConfig {
            config_dir: Some(PathBuf::from("/custom")),
        };

        let path = config_file("test.json", &config);
        assert_eq!(path, PathBuf::from("/custom/test.json"));
    }

    #[test]
    fn test_data_file_with_custom_dir() {
        let config = PathConfig {
            config_dir: Some(PathBuf::from("/custom")),
        };

        let path = data_file("vitrine.log", &config);
        assert_eq!(path, PathBuf::from("/custom/vitrine.log"));
    }

    #[test]
    fn test_config_file_uses_platform_defaults() {
        let config = PathConfig { config_dir: None };

        let path = config_file("test.json", &config);
        // Should contain "vitrine" and "test.json" in the path
        assert!(path.to_string_lossy().contains("vitrine"));
        assert!(path.to_string_lossy().contains("test.json"));
    }
}
