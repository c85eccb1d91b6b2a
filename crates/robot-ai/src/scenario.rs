//! Scenario files: a world snapshot plus tree parameters, stored as TOML.
//!
//! ```toml
//! [world]
//! attacker = true
//! enemy_possession = true
//! ball_distance_cm = 9
//!
//! [params]
//! ball_far_threshold_cm = 10
//!
//! [params.odds]
//! defend = 75
//! ```
//!
//! Every field is optional; omitted fields take their defaults. Unknown keys
//! are rejected so a misspelt fact or play cannot silently fall back.

use std::path::{Path, PathBuf};

use behavior_tree::TreeError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::WorldState;
use crate::presets::{SoccerTree, TreeParams, soccer_tree};

/// Errors raised while loading a scenario or building its tree.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scenario: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// A world snapshot together with the parameters of the tree to run on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    pub world: WorldState,
    pub params: TreeParams,
}

impl Scenario {
    /// The kick-off situation with default parameters.
    pub fn initial() -> Self {
        Self {
            world: WorldState::initial(),
            params: TreeParams::default(),
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scenario = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?scenario, "scenario loaded");
        Ok(scenario)
    }

    /// Builds the soccer tree configured by this scenario.
    pub fn build_tree(&self) -> Result<SoccerTree, ScenarioError> {
        Ok(soccer_tree(&self.params)?)
    }
}
