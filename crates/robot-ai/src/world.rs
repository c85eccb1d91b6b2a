//! World-state snapshot read by soccer conditions.

use serde::{Deserialize, Serialize};

/// Situational facts about one robot at the start of a decision cycle.
///
/// The snapshot is owned by whoever drives the tree. Conditions only borrow
/// it during a tick, so the driver may overwrite it between cycles and the
/// next tick sees the new values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorldState {
    /// The robot plays the attacker role (otherwise it defends).
    pub attacker: bool,
    pub self_possession: bool,
    pub enemy_possession: bool,
    pub no_one_possession: bool,
    pub ally_possession: bool,
    /// The robot stands between the ball carrier and its own goal.
    pub behind_enemy: bool,
    pub ball_close: bool,
    /// Distance to the ball, in centimetres.
    pub ball_distance_cm: i32,
}

impl WorldState {
    /// Kick-off situation: attacking robot, enemy holds the ball, robot is
    /// behind the enemy, ball 9 cm away.
    pub fn initial() -> Self {
        Self {
            attacker: true,
            enemy_possession: true,
            behind_enemy: true,
            ball_distance_cm: 9,
            ..Self::default()
        }
    }
}
