//! Board configuration loaded with Figment.
//!
//! Sources, later overriding earlier:
//! 1. Built-in defaults
//! 2. `.kanban-dnd.{toml,yaml,yml,json}` in the working directory, or an explicit file
//! 3. Environment variables prefixed with `KANBAN_DND_` (e.g. `KANBAN_DND_IDS=ulid`)
//!
//! ```toml
//! column_title = "Stage {n}"
//! task_content = "Card {n}"
//! ids = "sequential"
//! activity_limit = 500
//! actor = "alice"
//! ```

use crate::id_generator::IdStrategy;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

/// Placeholder in title/content templates replaced by the 1-based count
pub const COUNT_PLACEHOLDER: &str = "{n}";

const FILE_STEM: &str = ".kanban-dnd";
const ENV_PREFIX: &str = "KANBAN_DND_";
const EXTENSIONS: [&str; 4] = ["toml", "yaml", "yml", "json"];

/// Result type for configuration loading
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Explicit configuration file not found
    #[error("configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Configuration file format not supported
    #[error("unsupported configuration file format: {format}")]
    UnsupportedFormat { format: String },

    /// Configuration parsing failed
    #[error("failed to parse configuration: {source}")]
    Parse {
        #[source]
        source: Box<figment::Error>,
    },

    /// Configuration validation failed
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        Self::Parse {
            source: Box::new(error),
        }
    }
}

impl ConfigError {
    fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Settings for a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Title template for new columns; `{n}` is the new column count
    pub column_title: String,
    /// Content template for new tasks; `{n}` is the new board-wide task count
    pub task_content: String,
    /// Identifier generator
    pub ids: IdStrategy,
    /// Maximum number of activity log entries kept in memory
    pub activity_limit: usize,
    /// Actor recorded on activity log entries
    pub actor: Option<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            column_title: "Column {n}".to_string(),
            task_content: "Task {n}".to_string(),
            ids: IdStrategy::Sequential,
            activity_limit: 1000,
            actor: None,
        }
    }
}

impl BoardConfig {
    /// Load from defaults, config files in the current directory, and the environment
    pub fn load() -> ConfigResult<Self> {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::load_from_dir(&cwd)
    }

    /// Load from defaults, config files discovered in `dir`, and the environment
    pub fn load_from_dir(dir: &Path) -> ConfigResult<Self> {
        let mut figment = Self::defaults();
        for ext in EXTENSIONS {
            let path = dir.join(format!("{FILE_STEM}.{ext}"));
            if path.is_file() {
                trace!(path = %path.display(), "found board config file");
                figment = figment.merge(file_provider(&path, ext)?);
            }
        }
        Self::extract(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Load from defaults, one explicit file, and the environment
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        if !path.is_file() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let figment = Self::defaults()
            .merge(file_provider(path, &ext)?)
            .merge(Env::prefixed(ENV_PREFIX));
        Self::extract(figment)
    }

    fn defaults() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
    }

    fn extract(figment: Figment) -> ConfigResult<Self> {
        let config: Self = figment.extract()?;
        config.validate()?;
        debug!(ids = ?config.ids, activity_limit = config.activity_limit, "loaded board config");
        Ok(config)
    }

    /// Reject settings the board cannot work with
    pub fn validate(&self) -> ConfigResult<()> {
        if self.column_title.trim().is_empty() {
            return Err(ConfigError::invalid_value("column_title", "must not be empty"));
        }
        if self.task_content.trim().is_empty() {
            return Err(ConfigError::invalid_value("task_content", "must not be empty"));
        }
        if self.activity_limit == 0 {
            return Err(ConfigError::invalid_value(
                "activity_limit",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Title for the `n`th column
    pub fn column_title_for(&self, n: usize) -> String {
        render(&self.column_title, n)
    }

    /// Content for the `n`th task
    pub fn task_content_for(&self, n: usize) -> String {
        render(&self.task_content, n)
    }
}

fn render(template: &str, n: usize) -> String {
    template.replace(COUNT_PLACEHOLDER, &n.to_string())
}

fn file_provider(path: &Path, ext: &str) -> ConfigResult<Figment> {
    match ext {
        "toml" => Ok(Figment::from(Toml::file(path))),
        "yaml" | "yml" => Ok(Figment::from(Yaml::file(path))),
        "json" => Ok(Figment::from(Json::file(path))),
        other => Err(ConfigError::UnsupportedFormat {
            format: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_default_templates() {
        let config = BoardConfig::default();
        assert_eq!(config.column_title_for(1), "Column 1");
        assert_eq!(config.task_content_for(12), "Task 12");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_activity_limit() {
        let config = BoardConfig {
            activity_limit: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "activity_limit")
        );
    }

    #[test]
    #[serial]
    fn test_load_from_dir_without_files_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = BoardConfig::load_from_dir(temp.path()).unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    #[serial]
    fn test_load_from_dir_reads_toml() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(".kanban-dnd.toml"),
            "column_title = \"Stage {n}\"\nids = \"ulid\"\nactivity_limit = 5\n",
        )
        .unwrap();

        let config = BoardConfig::load_from_dir(temp.path()).unwrap();
        assert_eq!(config.column_title_for(2), "Stage 2");
        assert_eq!(config.ids, IdStrategy::Ulid);
        assert_eq!(config.activity_limit, 5);
        assert_eq!(config.task_content, "Task {n}");
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("board.yaml");
        std::fs::write(&path, "actor: alice\ntask_content: \"Card {n}\"\n").unwrap();

        std::env::set_var("KANBAN_DND_ACTOR", "bob");
        let config = BoardConfig::from_file(&path);
        std::env::remove_var("KANBAN_DND_ACTOR");

        let config = config.unwrap();
        assert_eq!(config.actor.as_deref(), Some("bob"));
        assert_eq!(config.task_content_for(3), "Card 3");
    }

    #[test]
    #[serial]
    fn test_from_file_errors() {
        let temp = TempDir::new().unwrap();

        let missing = BoardConfig::from_file(&temp.path().join("nope.toml"));
        assert!(matches!(missing, Err(ConfigError::FileNotFound { .. })));

        let ini = temp.path().join("board.ini");
        std::fs::write(&ini, "x=1").unwrap();
        let unsupported = BoardConfig::from_file(&ini);
        assert!(matches!(unsupported, Err(ConfigError::UnsupportedFormat { .. })));

        let bad = temp.path().join("board.toml");
        std::fs::write(&bad, "activity_limit = \"lots\"").unwrap();
        assert!(matches!(BoardConfig::from_file(&bad), Err(ConfigError::Parse { .. })));
    }
}
