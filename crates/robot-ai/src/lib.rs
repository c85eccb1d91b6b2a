//! Robot soccer decision making.
//!
//! Wires the generic [`behavior_tree`] engine to a soccer robot:
//!
//! - [`WorldState`]: the facts a robot knows at the start of a cycle
//! - [`nodes`]: conditions ([`Fact`]) and actions ([`Play`]) over that state
//! - [`presets`]: the attacker/defender decision tree
//! - [`scenario`]: TOML files bundling a snapshot with tree parameters

pub mod nodes;
pub mod presets;
pub mod scenario;
pub mod world;

pub use nodes::{Fact, Play, PlayOdds};
pub use presets::{SoccerTree, TreeParams, attacker_branch, defender_branch, soccer_tree};
pub use scenario::{Scenario, ScenarioError};
pub use world::WorldState;
