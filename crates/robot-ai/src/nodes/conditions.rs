//! Condition nodes for soccer behavior trees.
//!
//! Each [`Fact`] names one question about the [`WorldState`]. Condition nodes
//! built from facts return Success or Failure and never modify state.

use behavior_tree::{Behavior, Condition};

use crate::WorldState;

/// A named fact about the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Fact {
    Attacker,
    SelfPossession,
    EnemyPossession,
    NoOnePossession,
    AllyPossession,
    BehindEnemy,
    BallClose,
    /// Ball distance strictly greater than the given centimetres.
    BallFartherThan(i32),
}

impl Fact {
    /// Evaluates this fact against `world`.
    pub fn holds(self, world: &WorldState) -> bool {
        match self {
            Fact::Attacker => world.attacker,
            Fact::SelfPossession => world.self_possession,
            Fact::EnemyPossession => world.enemy_possession,
            Fact::NoOnePossession => world.no_one_possession,
            Fact::AllyPossession => world.ally_possession,
            Fact::BehindEnemy => world.behind_enemy,
            Fact::BallClose => world.ball_close,
            Fact::BallFartherThan(cm) => world.ball_distance_cm > cm,
        }
    }

    /// Trace name of this fact. Distance facts carry their threshold, e.g.
    /// `ball_farther_than_10cm`.
    pub fn name(self) -> String {
        match self {
            Fact::BallFartherThan(cm) => format!("{self}_{cm}cm"),
            _ => self.to_string(),
        }
    }

    /// A condition leaf checking this fact, named after it.
    pub fn condition(self) -> Condition<WorldState> {
        Condition::new(self.name(), move |world: &WorldState| self.holds(world))
    }

    /// Boxed form of [`condition`](Self::condition) for tree assembly.
    pub fn node(self) -> Box<dyn Behavior<WorldState>> {
        Box::new(self.condition())
    }
}
