//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["roi-simulator.toml", ".roi-simulator.toml"];

/// Prefix of structured environment overrides (`ROI_SERVER__PORT=8080`)
const ENV_PREFIX: &str = "ROI_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `ROI_`-prefixed environment variables (`__` separates sections)
    /// 2. `PORT`, `NODE_ENV`, `RATE_LIMIT_WINDOW_MS`, `RATE_LIMIT_MAX_REQUESTS`
    /// 3. Explicit config path (if provided)
    /// 4. Project root: `./roi-simulator.toml` or `./.roi-simulator.toml`
    /// 5. XDG config: `$XDG_CONFIG_HOME/roi-simulator/config.toml`
    /// 6. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Load defaults plus environment overrides only (for --no-config)
    pub fn load_without_files() -> Result<FileConfig, Box<figment::Error>> {
        Self::with_env(Self::defaults()).extract().map_err(Box::new)
    }

    fn defaults() -> Figment {
        Figment::new().merge(Serialized::defaults(FileConfig::default()))
    }

    fn figment(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Self::defaults();

        // Add global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        // Add project-level config file (first name found wins)
        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        // Add explicit config path (highest priority for files)
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        Self::with_env(figment)
    }

    fn with_env(figment: Figment) -> Figment {
        figment
            .merge(Env::raw().filter_map(|key| {
                legacy_env_key(key.as_str()).map(Into::into)
            }))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/roi-simulator/config.toml if set,
    /// otherwise falls back to ~/.config/roi-simulator/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("roi-simulator").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] {ENV_PREFIX}* (e.g. {ENV_PREFIX}SERVER__PORT)");
        println!("  [ENV  ] PORT, NODE_ENV, RATE_LIMIT_WINDOW_MS, RATE_LIMIT_MAX_REQUESTS");

        // Project config
        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./roi-simulator.toml or ./.roi-simulator.toml");
        }

        // Global config
        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

/// Map the plain environment variables the service has always honored onto
/// config keys.
fn legacy_env_key(name: &str) -> Option<&'static str> {
    match name.to_ascii_uppercase().as_str() {
        "PORT" => Some("server.port"),
        "NODE_ENV" => Some("server.environment"),
        "RATE_LIMIT_WINDOW_MS" => Some("rate_limit.window_ms"),
        "RATE_LIMIT_MAX_REQUESTS" => Some("rate_limit.max_requests"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_without_files_uses_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file("roi-simulator.toml", "[server]\nport = 4100\n")?;

            let config = ConfigLoader::load_without_files().map_err(|e| *e)?;
            assert_eq!(config, FileConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("roi-simulator"));
    }

    #[test]
    fn test_legacy_env_key() {
        assert_eq!(legacy_env_key("PORT"), Some("server.port"));
        assert_eq!(legacy_env_key("node_env"), Some("server.environment"));
        assert_eq!(legacy_env_key("HOME"), None);
    }

    #[test]
    fn test_project_file_is_merged() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "roi-simulator.toml",
                r#"
                [server]
                port = 4100

                [rate_limit]
                max_requests = 10
                "#,
            )?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.server.port, 4100);
            assert_eq!(config.server.host, "0.0.0.0");
            assert_eq!(config.rate_limit.max_requests, 10);
            assert_eq!(config.rate_limit.window_ms, 900_000);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file("roi-simulator.toml", "[server]\nport = 4100\n")?;
            jail.create_file("custom.toml", "[server]\nport = 4200\n")?;

            let path = PathBuf::from("custom.toml");
            let config = ConfigLoader::load(Some(&path)).map_err(|e| *e)?;
            assert_eq!(config.server.port, 4200);
            Ok(())
        });
    }

    #[test]
    fn test_legacy_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file("roi-simulator.toml", "[server]\nport = 4100\n")?;
            jail.set_env("PORT", "8080");
            jail.set_env("NODE_ENV", "production");
            jail.set_env("RATE_LIMIT_MAX_REQUESTS", "5");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.server.port, 8080);
            assert_eq!(config.server.environment, "production");
            assert_eq!(config.rate_limit.max_requests, 5);
            Ok(())
        });
    }

    #[test]
    fn test_prefixed_env_has_highest_priority() {
        Jail::expect_with(|jail| {
            jail.set_env("PORT", "8080");
            jail.set_env("ROI_SERVER__PORT", "9090");
            jail.set_env("ROI_RATE_LIMIT__ENABLED", "false");

            let config = ConfigLoader::load_without_files().map_err(|e| *e)?;
            assert_eq!(config.server.port, 9090);
            assert!(!config.rate_limit.enabled);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file("roi-simulator.toml", "[server]\nport = \"not a port\"\n")?;
            assert!(ConfigLoader::load(None).is_err());
            Ok(())
        });
    }
}
