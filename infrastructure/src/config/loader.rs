//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "decision-swarm";
const PROJECT_FILES: [&str; 2] = ["swarm.toml", ".swarm.toml"];
const ENV_PREFIX: &str = "SWARM_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `SWARM_`-prefixed environment variables (`SWARM_GATEWAY__TIMEOUT_SECS=30`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./swarm.toml` or `./.swarm.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/decision-swarm/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config sources in priority order (for --show-config)
    pub fn describe_sources(config_path: Option<&Path>) -> Vec<String> {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        lines.push(format!("  [     ] Env:     {}<SECTION>__<KEY>", ENV_PREFIX));

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            lines.push(format!("  [{}] Explicit: {}", mark, path.display()));
        }

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  [FOUND] Project: {}", path.display())),
            None => lines.push("  [     ] Project: ./swarm.toml or ./.swarm.toml".to_string()),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Global:  {}", mark, path.display()));
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn isolate(jail: &mut Jail) {
        let dir = jail.directory().to_path_buf();
        jail.set_env("XDG_CONFIG_HOME", dir.join("xdg").display());
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.gateway.timeout_secs, 90);
        assert_eq!(config.server.allowed_origin, "*");
    }

    #[test]
    fn test_global_config_path_names_app() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains(APP_DIR));
    }

    #[test]
    fn test_project_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file(
                "swarm.toml",
                r#"
[gateway]
max_tokens = 900
"#,
            )?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.gateway.max_tokens, 900);
            assert_eq!(config.gateway.timeout_secs, 90);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_beats_project_file() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file("swarm.toml", "[server]\nbind = \"127.0.0.1:1000\"\n")?;
            jail.create_file("custom.toml", "[server]\nbind = \"127.0.0.1:2000\"\n")?;

            let config = ConfigLoader::load(Some(Path::new("custom.toml"))).map_err(|e| *e)?;
            assert_eq!(config.server.bind, "127.0.0.1:2000");
            Ok(())
        });
    }

    #[test]
    fn test_env_beats_files() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file(".swarm.toml", "[gateway]\ntimeout_secs = 10\n")?;
            jail.set_env("SWARM_GATEWAY__TIMEOUT_SECS", "45");
            jail.set_env("SWARM_FOLLOWUPS__MODEL", "google/gemini-2.5-pro");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.gateway.timeout_secs, 45);
            assert_eq!(config.followups.model, "google/gemini-2.5-pro");
            Ok(())
        });
    }

    #[test]
    fn test_global_file_is_read() {
        Jail::expect_with(|jail| {
            isolate(jail);
            std::fs::create_dir_all(jail.directory().join("xdg").join(APP_DIR))
                .map_err(|e| e.to_string())?;
            jail.create_file(
                "xdg/decision-swarm/config.toml",
                "[gateway]\nbase_url = \"http://global.test/v1\"\n",
            )?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.gateway.base_url, "http://global.test/v1");
            Ok(())
        });
    }

    #[test]
    fn test_describe_sources_lists_defaults() {
        let lines = ConfigLoader::describe_sources(None);
        assert!(lines.last().unwrap().contains("built-in defaults"));
    }
}
