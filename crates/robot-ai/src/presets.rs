//! Complete decision trees for a soccer robot.
//!
//! The full tree is a selector over two role branches:
//!
//! ```text
//! soccer_tree()
//!   └─ Selector
//!       ├─ attacker_branch()
//!       │   └─ Sequence [attacker, Selector
//!       │       ├─ self_possession  → attack
//!       │       ├─ enemy_possession → Selector
//!       │       │   ├─ behind_enemy    → back_to_area
//!       │       │   └─ !behind_enemy   → defend
//!       │       ├─ no_one_possession → attack
//!       │       └─ ally_possession   → go_close_to_defender]
//!       └─ defender_branch()
//!           └─ Sequence [!attacker, Selector
//!               ├─ ball_close → Selector
//!               │   ├─ enemy_possession → Selector
//!               │   │   ├─ !ball_farther_than_Xcm → rotate_to_push_ball
//!               │   │   └─ ball_farther_than_Xcm  → follow_ball
//!               │   └─ ally_possession → follow_inside_area
//!               └─ !ball_close → wait_in_center]
//! ```
//!
//! Branches are composed from two patterns: [`when`] (fact, then node) and
//! [`unless`] (negated fact, then node).

use behavior_tree::builder::{inverter, selector, sequence};
use behavior_tree::{Behavior, BehaviorTree, Result};
use serde::{Deserialize, Serialize};

use crate::WorldState;
use crate::nodes::{Fact, Play, PlayOdds};

/// Boxed node over the soccer world snapshot.
pub type Node = Box<dyn Behavior<WorldState>>;

/// A complete soccer decision tree.
pub type SoccerTree = BehaviorTree<WorldState>;

/// Distance (cm) above which the ball counts as far for the defender.
pub const DEFAULT_BALL_FAR_THRESHOLD_CM: i32 = 10;

/// Tunables for the preset trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TreeParams {
    pub odds: PlayOdds,
    pub ball_far_threshold_cm: i32,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            odds: PlayOdds::default(),
            ball_far_threshold_cm: DEFAULT_BALL_FAR_THRESHOLD_CM,
        }
    }
}

// ============================================================================
// Patterns
// ============================================================================

/// Runs `then` only if `fact` holds.
pub fn when(fact: Fact, then: Node) -> Node {
    sequence(vec![fact.node(), then])
}

/// Runs `then` only if `fact` does not hold.
pub fn unless(fact: Fact, then: Node) -> Node {
    sequence(vec![inverter(fact.node()), then])
}

// ============================================================================
// Role branches
// ============================================================================

/// Attacker role: react to whoever holds the ball.
pub fn attacker_branch(params: &TreeParams) -> Result<Node> {
    let odds = &params.odds;
    Ok(when(
        Fact::Attacker,
        selector(vec![
            when(Fact::SelfPossession, Play::Attack.node(odds)?),
            when(
                Fact::EnemyPossession,
                selector(vec![
                    when(Fact::BehindEnemy, Play::BackToArea.node(odds)?),
                    unless(Fact::BehindEnemy, Play::Defend.node(odds)?),
                ]),
            ),
            when(Fact::NoOnePossession, Play::Attack.node(odds)?),
            when(Fact::AllyPossession, Play::GoCloseToDefender.node(odds)?),
        ]),
    ))
}

/// Defender role: engage a nearby ball, otherwise hold the centre.
pub fn defender_branch(params: &TreeParams) -> Result<Node> {
    let odds = &params.odds;
    let ball_far = Fact::BallFartherThan(params.ball_far_threshold_cm);
    Ok(unless(
        Fact::Attacker,
        selector(vec![
            when(
                Fact::BallClose,
                selector(vec![
                    when(
                        Fact::EnemyPossession,
                        selector(vec![
                            unless(ball_far, Play::RotateToPushBall.node(odds)?),
                            when(ball_far, Play::FollowBall.node(odds)?),
                        ]),
                    ),
                    when(Fact::AllyPossession, Play::FollowInsideArea.node(odds)?),
                ]),
            ),
            unless(Fact::BallClose, Play::WaitInCenter.node(odds)?),
        ]),
    ))
}

/// The complete two-role soccer tree.
pub fn soccer_tree(params: &TreeParams) -> Result<SoccerTree> {
    let root = selector(vec![attacker_branch(params)?, defender_branch(params)?]);
    tracing::debug!(
        threshold_cm = params.ball_far_threshold_cm,
        "soccer tree assembled"
    );
    Ok(BehaviorTree::new("soccer", root))
}
