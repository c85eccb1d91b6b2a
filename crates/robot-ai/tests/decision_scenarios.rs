use behavior_tree::builder::{selector, sequence};
use behavior_tree::{BehaviorTree, RecordingSink, Status};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use robot_ai::{
    Fact, Play, PlayOdds, Scenario, SoccerTree, TreeParams, WorldState, attacker_branch,
    defender_branch, soccer_tree,
};

fn decide(tree: &SoccerTree, world: &WorldState) -> (Status, RecordingSink) {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut sink = RecordingSink::new();
    let status = tree.tick(world, &mut rng, &mut sink).unwrap();
    (status, sink)
}

fn default_tree() -> SoccerTree {
    soccer_tree(&TreeParams::default()).unwrap()
}

fn attacker() -> WorldState {
    WorldState {
        attacker: true,
        ..WorldState::default()
    }
}

fn defender_near_ball() -> WorldState {
    WorldState {
        ball_close: true,
        ..WorldState::default()
    }
}

#[test]
fn possession_leads_to_attack() {
    let odds = PlayOdds::default();
    let tree = BehaviorTree::new(
        "possession",
        selector(vec![sequence(vec![
            Fact::SelfPossession.node(),
            Play::Attack.node(&odds).unwrap(),
        ])]),
    );
    let world = WorldState {
        self_possession: true,
        ..attacker()
    };

    let (status, sink) = decide(&tree, &world);
    assert_eq!(status, Status::Success);
    assert_eq!(sink.actions(), vec!["attack"]);
}

#[test]
fn attacker_with_ball_attacks_in_full_tree() {
    let world = WorldState {
        self_possession: true,
        ..attacker()
    };
    let (status, sink) = decide(&default_tree(), &world);
    assert_eq!(status, Status::Success);
    assert_eq!(sink.actions(), vec!["attack"]);
}

#[test]
fn attacker_in_front_of_enemy_defends() {
    let world = WorldState {
        enemy_possession: true,
        behind_enemy: false,
        ..attacker()
    };
    let (status, sink) = decide(&default_tree(), &world);
    assert_eq!(status, Status::Success);
    assert_eq!(sink.actions(), vec!["defend"]);
    assert!(!sink.actions().contains(&"back_to_area"));
}

#[test]
fn kickoff_attacker_behind_enemy_goes_back_to_area() {
    let (status, sink) = decide(&default_tree(), &WorldState::initial());
    assert_eq!(status, Status::Success);
    assert_eq!(sink.actions(), vec!["back_to_area"]);
    assert_eq!(
        sink.conditions(),
        vec!["attacker", "self_possession", "enemy_possession", "behind_enemy"]
    );
}

#[test]
fn loose_ball_is_attacked() {
    let world = WorldState {
        no_one_possession: true,
        ..attacker()
    };
    let (_, sink) = decide(&default_tree(), &world);
    assert_eq!(sink.actions(), vec!["attack"]);
}

#[test]
fn ally_with_ball_is_supported() {
    let world = WorldState {
        ally_possession: true,
        ..attacker()
    };
    let (_, sink) = decide(&default_tree(), &world);
    assert_eq!(sink.actions(), vec!["go_close_to_defender"]);
}

#[test]
fn defender_pushes_away_a_near_enemy_ball() {
    let world = WorldState {
        enemy_possession: true,
        ball_distance_cm: 5,
        ..defender_near_ball()
    };
    let (status, sink) = decide(&default_tree(), &world);
    assert_eq!(status, Status::Success);
    assert_eq!(sink.actions(), vec!["rotate_to_push_ball"]);
}

#[test]
fn defender_follows_a_distant_enemy_ball() {
    let world = WorldState {
        enemy_possession: true,
        ball_distance_cm: 25,
        ..defender_near_ball()
    };
    let (_, sink) = decide(&default_tree(), &world);
    assert_eq!(sink.actions(), vec!["follow_ball"]);
}

#[test]
fn defender_follows_inside_area_when_ally_has_ball() {
    let world = WorldState {
        ally_possession: true,
        ..defender_near_ball()
    };
    let (_, sink) = decide(&default_tree(), &world);
    assert_eq!(sink.actions(), vec!["follow_inside_area"]);
}

#[test]
fn defender_waits_in_center_when_ball_is_away() {
    let (status, sink) = decide(&default_tree(), &WorldState::default());
    assert_eq!(status, Status::Success);
    assert_eq!(sink.actions(), vec!["wait_in_center"]);
}

#[test]
fn unmatched_situation_fails_without_acting() {
    // Defender near a ball nobody in particular holds: no branch applies.
    let (status, sink) = decide(&default_tree(), &defender_near_ball());
    assert_eq!(status, Status::Failure);
    assert!(sink.actions().is_empty());
}

#[test]
fn missed_action_falls_through_the_tree() {
    let params = TreeParams {
        odds: PlayOdds::default().with(Play::Defend, 0),
        ..TreeParams::default()
    };
    let tree = soccer_tree(&params).unwrap();
    let world = WorldState {
        enemy_possession: true,
        ..attacker()
    };

    let (status, sink) = decide(&tree, &world);
    assert_eq!(status, Status::Failure);
    assert_eq!(sink.actions(), vec!["defend"]);
    let defend = sink
        .records()
        .iter()
        .find(|record| record.name == "defend")
        .unwrap();
    assert_eq!(defend.status, Status::Failure);
}

#[test]
fn refreshed_snapshot_changes_the_decision() {
    let tree = default_tree();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut sink = RecordingSink::new();

    let mut world = WorldState::initial();
    tree.tick(&world, &mut rng, &mut sink).unwrap();
    assert_eq!(sink.actions(), vec!["back_to_area"]);

    world.behind_enemy = false;
    sink.clear();
    tree.tick(&world, &mut rng, &mut sink).unwrap();
    assert_eq!(sink.actions(), vec!["defend"]);
}

#[test]
fn threshold_parameter_moves_the_near_far_boundary() {
    let params = TreeParams {
        ball_far_threshold_cm: 30,
        ..TreeParams::default()
    };
    let tree = soccer_tree(&params).unwrap();
    let world = WorldState {
        enemy_possession: true,
        ball_distance_cm: 25,
        ..defender_near_ball()
    };

    let (_, sink) = decide(&tree, &world);
    assert_eq!(sink.actions(), vec!["rotate_to_push_ball"]);
    assert!(sink.conditions().contains(&"ball_farther_than_30cm"));
}

#[test]
fn branches_are_usable_on_their_own() {
    let params = TreeParams::default();
    let attacker_only = BehaviorTree::new("attacker", attacker_branch(&params).unwrap());
    let defender_only = BehaviorTree::new("defender", defender_branch(&params).unwrap());

    let (status, sink) = decide(&attacker_only, &WorldState::default());
    assert_eq!(status, Status::Failure);
    assert_eq!(sink.conditions(), vec!["attacker"]);

    let (status, sink) = decide(&defender_only, &WorldState::initial());
    assert_eq!(status, Status::Failure);
    assert!(sink.actions().is_empty());
}

#[test]
fn scenario_file_drives_the_decision() {
    let scenario = Scenario::from_toml_str(
        "[world]\nattacker = true\nenemy_possession = true\n\n[params.odds]\ndefend = 100\n",
    )
    .unwrap();
    let tree = scenario.build_tree().unwrap();

    let (_, sink) = decide(&tree, &scenario.world);
    assert_eq!(sink.actions(), vec!["defend"]);
}

#[test]
fn bundled_scenarios_parse_and_decide() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../scenarios");
    let expected = [
        ("kickoff.toml", "back_to_area"),
        ("defend.toml", "defend"),
        ("goalkeeper.toml", "follow_ball"),
    ];

    for (file, play) in expected {
        let scenario = Scenario::load(dir.join(file)).unwrap();
        let tree = scenario.build_tree().unwrap();
        let (_, sink) = decide(&tree, &scenario.world);
        assert_eq!(sink.actions(), vec![play], "{file}");
    }
}
