//! Engine configuration loaded with Figment.
//!
//! Sources, later ones overriding earlier ones:
//! 1. Built-in defaults
//! 2. An optional configuration file (TOML, YAML or JSON, chosen by extension)
//! 3. Environment variables prefixed with `KANBAN_`

use crate::error::{KanbanError, Result};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "KANBAN_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KanbanConfig {
    /// Column titles for boards created with `Board::with_default_columns`
    pub default_columns: Vec<String>,
    /// Re-check the board invariants after every applied mutation
    pub verify_invariants: bool,
    /// Actor stamped on log entries when the context names none
    pub actor: Option<String>,
}

impl Default for KanbanConfig {
    fn default() -> Self {
        Self {
            default_columns: vec!["To Do".into(), "Doing".into(), "Done".into()],
            verify_invariants: false,
            actor: None,
        }
    }
}

impl KanbanConfig {
    /// Defaults overridden by environment variables
    pub fn load() -> Result<Self> {
        Self::from_figment(Self::base_figment().merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Defaults, then the given file, then environment variables
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading kanban configuration from {}", path.display());

        let file = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Figment::from(Toml::file(path)),
            Some("yaml") | Some("yml") => Figment::from(Yaml::file(path)),
            Some("json") => Figment::from(Json::file(path)),
            _ => {
                return Err(KanbanError::UnsupportedConfigFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        Self::from_figment(
            Self::base_figment()
                .merge(file)
                .merge(Env::prefixed(ENV_PREFIX)),
        )
    }

    /// Extract a configuration from an arbitrary figment
    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Self = figment.extract()?;
        debug!(
            "Loaded kanban configuration: {} default columns, verify_invariants={}",
            config.default_columns.len(),
            config.verify_invariants
        );
        Ok(config)
    }

    fn base_figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
    }

    /// Set the default actor
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// Turn post-mutation invariant checks on or off
    pub fn with_verify_invariants(mut self, verify: bool) -> Self {
        self.verify_invariants = verify;
        self
    }
}
