//! Action nodes for soccer behavior trees.
//!
//! A [`Play`] is something the robot can attempt. Whether an attempt lands is
//! sampled from its success probability in [`PlayOdds`].

use behavior_tree::{Action, Behavior, Result};
use serde::{Deserialize, Serialize};

use crate::WorldState;

/// The plays available to the robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Play {
    Attack,
    BackToArea,
    Defend,
    GoCloseToDefender,
    WaitInCenter,
    FollowInsideArea,
    RotateToPushBall,
    FollowBall,
}

impl Play {
    /// Builds the action leaf for this play using its configured odds.
    ///
    /// # Errors
    ///
    /// Fails if the configured probability is above 100.
    pub fn action(self, odds: &PlayOdds) -> Result<Action> {
        Action::new(self.to_string(), odds.get(self))
    }

    /// Boxed form of [`action`](Self::action) for tree assembly.
    pub fn node(self, odds: &PlayOdds) -> Result<Box<dyn Behavior<WorldState>>> {
        Ok(Box::new(self.action(odds)?))
    }
}

/// Success probability (percent) of every play.
///
/// Plays missing from a scenario file keep the default of 100, i.e. every
/// attempt lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayOdds {
    pub attack: u32,
    pub back_to_area: u32,
    pub defend: u32,
    pub go_close_to_defender: u32,
    pub wait_in_center: u32,
    pub follow_inside_area: u32,
    pub rotate_to_push_ball: u32,
    pub follow_ball: u32,
}

impl PlayOdds {
    /// Every play succeeds with the same probability.
    pub const fn uniform(probability: u32) -> Self {
        Self {
            attack: probability,
            back_to_area: probability,
            defend: probability,
            go_close_to_defender: probability,
            wait_in_center: probability,
            follow_inside_area: probability,
            rotate_to_push_ball: probability,
            follow_ball: probability,
        }
    }

    pub fn get(&self, play: Play) -> u32 {
        match play {
            Play::Attack => self.attack,
            Play::BackToArea => self.back_to_area,
            Play::Defend => self.defend,
            Play::GoCloseToDefender => self.go_close_to_defender,
            Play::WaitInCenter => self.wait_in_center,
            Play::FollowInsideArea => self.follow_inside_area,
            Play::RotateToPushBall => self.rotate_to_push_ball,
            Play::FollowBall => self.follow_ball,
        }
    }

    /// Returns a copy with `play` set to `probability`.
    pub fn with(mut self, play: Play, probability: u32) -> Self {
        let slot = match play {
            Play::Attack => &mut self.attack,
            Play::BackToArea => &mut self.back_to_area,
            Play::Defend => &mut self.defend,
            Play::GoCloseToDefender => &mut self.go_close_to_defender,
            Play::WaitInCenter => &mut self.wait_in_center,
            Play::FollowInsideArea => &mut self.follow_inside_area,
            Play::RotateToPushBall => &mut self.rotate_to_push_ball,
            Play::FollowBall => &mut self.follow_ball,
        };
        *slot = probability;
        self
    }
}

impl Default for PlayOdds {
    fn default() -> Self {
        Self::uniform(100)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use behavior_tree::TreeError;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn play_names_are_distinct_snake_case() {
        let names: HashSet<String> = Play::iter().map(|play| play.to_string()).collect();
        assert_eq!(names.len(), Play::iter().count());
        assert!(names.contains("back_to_area"));
        assert!(names.contains("go_close_to_defender"));
    }

    #[test]
    fn with_overrides_a_single_play() {
        let odds = PlayOdds::default().with(Play::Defend, 30);
        for play in Play::iter() {
            let expected = if play == Play::Defend { 30 } else { 100 };
            assert_eq!(odds.get(play), expected, "{play}");
        }
    }

    #[test]
    fn invalid_odds_fail_at_construction() {
        let odds = PlayOdds::default().with(Play::Attack, 120);
        assert_eq!(
            Play::Attack.action(&odds),
            Err(TreeError::InvalidProbability {
                action: "attack".to_string(),
                probability: 120,
            })
        );
        assert_eq!(Play::Defend.action(&odds).unwrap().probability(), 100);
    }
}
