mod common;

use rusty_golf_engine::EngineError;
use rusty_golf_engine::aggregate::{
    IndividualScoreboardInput, TournamentLeaderboardInput, TournamentLeaderboardRoundInput,
    calculate_individual_scoreboard, calculate_tournament_leaderboard,
};
use rusty_golf_engine::formats::{
    BonusAwardInput, CompetitionResult, GroupedCompetitionResult, bonus_holes,
    calculate_competition_results, calculate_grouped_results, format_bonus_label,
};
use rusty_golf_engine::model::{
    BonusConfig, BonusMode, ChairConfig, CompetitionConfig, CompetitionInput, FormatType,
    GroupScope, ResolvedScore, StablefordConfig, WolfConfig,
};

fn within_group(mut input: CompetitionInput) -> CompetitionInput {
    input.competition.group_scope = GroupScope::WithinGroup;
    input
}

#[test]
fn within_group_matches_running_each_group_alone() {
    let players = common::scratch_players(&["a", "b", "c", "d"]);
    let mut scores = common::card("a", &[3, 4]);
    scores.extend(common::card("b", &[4, 4]));
    scores.extend(common::card("c", &[5, 5]));
    scores.extend(common::card("d", &[4, 3]));
    let config = CompetitionConfig::Stableford(StablefordConfig::default());

    let mut input = within_group(common::input(
        config.clone(),
        common::holes(2),
        players.clone(),
        scores.clone(),
    ));
    input.groups = vec![
        common::group("g1", 1, &["a", "b"]),
        common::group("g2", 2, &["c", "d"]),
    ];

    let GroupedCompetitionResult::WithinGroup { results } =
        calculate_grouped_results(&input).unwrap()
    else {
        panic!("expected per-group results");
    };
    assert_eq!(results.len(), 2);
    assert_eq!(results[1].group_id, "g2");
    assert_eq!(results[1].group_name.as_deref(), Some("Group 2"));

    let alone = common::input(
        config,
        common::holes(2),
        players[2..].to_vec(),
        scores
            .into_iter()
            .filter(|s| s.round_participant_id == "c" || s.round_participant_id == "d")
            .collect(),
    );
    let CompetitionResult::Stableford(expected) = calculate_competition_results(&alone).unwrap()
    else {
        panic!("expected stableford");
    };
    let CompetitionResult::Stableford(actual) = &results[1].result else {
        panic!("expected stableford");
    };
    assert_eq!(actual.leaderboard, expected.leaderboard);
}

#[test]
fn failing_group_is_dropped_not_fatal() {
    let players = common::scratch_players(&["a", "b", "c", "d", "e", "f", "g"]);
    let config = CompetitionConfig::Chair(ChairConfig::default());

    let mut input = within_group(common::input(
        config.clone(),
        common::holes(2),
        players.clone(),
        Vec::new(),
    ));
    input.groups = vec![
        common::group("g1", 1, &["a", "b", "c", "d"]),
        common::group("g2", 2, &["e", "f", "g"]),
    ];
    let grouped = calculate_grouped_results(&input).unwrap();
    assert_eq!(grouped.results().len(), 1);

    // the same shortfall over the whole field is an error
    let whole = common::input(config, common::holes(2), players[..3].to_vec(), Vec::new());
    assert!(matches!(
        calculate_grouped_results(&whole),
        Err(EngineError::CardinalityViolation { .. })
    ));
}

#[test]
fn wolf_groups_keep_their_own_partner_on_a_shared_hole() {
    let players = common::scratch_players(&["a", "b", "c", "d", "e", "f", "g", "h"]);
    let mut scores = Vec::new();
    let strokes_by_player = [
        ("a", 3),
        ("b", 4),
        ("c", 4),
        ("d", 4),
        ("e", 4),
        ("f", 3),
        ("g", 4),
        ("h", 4),
    ];
    for (id, strokes) in strokes_by_player {
        scores.extend(common::card(id, &[strokes]));
    }
    let mut input = within_group(common::input(
        CompetitionConfig::Wolf(WolfConfig::default()),
        common::holes(1),
        players,
        scores,
    ));
    input.groups = vec![
        common::group("g1", 1, &["a", "b", "c", "d"]),
        common::group("g2", 2, &["e", "f", "g", "h"]),
    ];
    input.game_decisions = vec![
        common::decision(1, "a", Some("b")),
        common::decision(1, "e", Some("f")),
    ];

    let grouped = calculate_grouped_results(&input).unwrap();
    let results = grouped.results();
    assert_eq!(results.len(), 2);
    for (result, wolf, partner) in [(results[0], "a", "b"), (results[1], "e", "f")] {
        let CompetitionResult::Wolf(wolf_result) = result else {
            panic!("expected wolf");
        };
        let hole = &wolf_result.holes[0];
        assert_eq!(hole.wolf_player_id, wolf);
        assert_eq!(hole.partner_player_id.as_deref(), Some(partner));
        assert!(!hole.is_lone_wolf);
        assert_eq!(hole.points_awarded, vec![2, 2, 0, 0]);
    }
}

#[test]
fn within_group_without_groups_runs_once() {
    let input = within_group(common::input(
        CompetitionConfig::Stableford(StablefordConfig::default()),
        common::holes(2),
        common::scratch_players(&["a"]),
        Vec::new(),
    ));
    assert!(matches!(
        calculate_grouped_results(&input).unwrap(),
        GroupedCompetitionResult::All { .. }
    ));
}

fn nearest_pin(hole_number: u32) -> CompetitionConfig {
    CompetitionConfig::NearestPin(BonusConfig {
        hole_number,
        bonus_mode: BonusMode::Standalone,
        bonus_points: 1.0,
    })
}

#[test]
fn bonus_competitions_compute_nothing() {
    let input = common::input(nearest_pin(3), common::holes(18), Vec::new(), Vec::new());
    assert_eq!(calculate_competition_results(&input).unwrap(), CompetitionResult::NearestPin);
    assert_eq!(format_bonus_label(FormatType::NearestPin, 3), "Nearest the Pin - Hole 3");

    let mut unplaced = common::competition(nearest_pin(0));
    unplaced.id = "comp-2".to_string();
    let competitions = vec![
        common::competition(nearest_pin(3)),
        unplaced,
        common::competition(CompetitionConfig::Stableford(StablefordConfig::default())),
    ];
    let holes = bonus_holes(&competitions);
    assert_eq!(holes.len(), 1);
    assert_eq!(holes[0].hole_number, 3);
    assert_eq!(holes[0].format_type, FormatType::NearestPin);
}

fn award(mode: BonusMode, format_type: FormatType, winner: &str) -> BonusAwardInput {
    BonusAwardInput {
        competition_id: format!("{format_type:?}"),
        competition_name: format_bonus_label(format_type, 7),
        format_type,
        bonus_mode: mode,
        bonus_points: 1.0,
        hole_number: 7,
        round_participant_id: Some(winner.to_string()),
    }
}

/// 33 stableford points: three bogeys and fifteen pars.
fn thirty_three(id: &str) -> Vec<ResolvedScore> {
    let mut strokes = vec![5; 3];
    strokes.extend(vec![4; 15]);
    common::card(id, &strokes)
}

#[test]
fn contributor_bonus_adds_to_total_and_standalone_adds_a_badge() {
    let mut scores = thirty_three("a");
    scores.extend(thirty_three("b"));
    let input = IndividualScoreboardInput {
        holes: common::holes(18),
        participants: common::scratch_players(&["a", "b"]),
        scores,
        bonus_awards: vec![
            award(BonusMode::Contributor, FormatType::NearestPin, "a"),
            award(BonusMode::Standalone, FormatType::LongestDrive, "b"),
        ],
    };

    let result = calculate_individual_scoreboard(&input);
    assert!(result.has_contributor_bonuses);

    let a = result.rows.iter().find(|r| r.round_participant_id == "a").unwrap();
    assert_eq!(a.stableford, 33);
    assert_eq!(a.total, 34.0);
    assert!(a.standalone_badges.is_empty());

    let b = result.rows.iter().find(|r| r.round_participant_id == "b").unwrap();
    assert_eq!(b.total, 33.0);
    assert_eq!(b.standalone_badges.len(), 1);
    assert_eq!(b.standalone_badges[0].short_label, "LD H7");

    // ordering is stableford then gross, so the bonus does not split them
    assert_eq!((result.rows[0].rank, result.rows[1].rank), (1, 1));
}

#[test]
fn scoreboard_sorts_on_stableford_then_gross() {
    let players = vec![
        common::player("a", 0.0),
        common::player("b", 18.0),
        common::player("c", 0.0),
    ];
    let mut scores = common::flat_card("a", 4, 2); // 4 pts, 8 gross
    scores.extend(common::flat_card("b", 5, 2)); // 4 pts, 10 gross
    scores.extend(common::card("c", &[4])); // 2 pts
    let input = IndividualScoreboardInput {
        holes: common::holes(2),
        participants: players,
        scores,
        bonus_awards: Vec::new(),
    };

    let result = calculate_individual_scoreboard(&input);
    let order: Vec<(&str, u32)> = result
        .rows
        .iter()
        .map(|r| (r.round_participant_id.as_str(), r.rank))
        .collect();
    assert_eq!(order, vec![("a", 1), ("b", 2), ("c", 3)]);
    assert!(!result.has_contributor_bonuses);
    assert_eq!(result.rows[2].holes_completed, 1);
    assert_eq!(result.rows[2].hole_scores[1].display, None);
}

fn round(id: &str, finalized: bool, scores: Vec<ResolvedScore>) -> TournamentLeaderboardRoundInput {
    let board = calculate_individual_scoreboard(&IndividualScoreboardInput {
        holes: common::holes(2),
        participants: common::scratch_players(&["a", "b"]),
        scores,
        bonus_awards: Vec::new(),
    });
    TournamentLeaderboardRoundInput {
        round_id: id.to_string(),
        round_name: format!("Round {id}"),
        is_finalized: finalized,
        total_holes: 2,
        scoreboard_rows: board.rows,
    }
}

#[test]
fn tournament_leaderboard_counts_only_finished_finalized_rounds() {
    let mut r1 = common::flat_card("a", 4, 2);
    r1.extend(common::flat_card("b", 3, 2));
    // b walks off after one hole
    let mut r2 = common::flat_card("a", 4, 2);
    r2.extend(common::card("b", &[3]));
    let mut r3 = common::flat_card("a", 3, 2);
    r3.extend(common::flat_card("b", 3, 2));

    let input = TournamentLeaderboardInput {
        rounds: vec![round("1", true, r1), round("2", true, r2), round("3", false, r3)],
    };
    let result = calculate_tournament_leaderboard(&input);

    let a = result.rows.iter().find(|r| r.person_id == "person-a").unwrap();
    assert_eq!(a.rounds_played, 2);
    assert_eq!(a.stableford, 8);
    assert_eq!(a.gross_strokes, 16);

    let b = result.rows.iter().find(|r| r.person_id == "person-b").unwrap();
    assert_eq!(b.rounds_played, 1);
    assert_eq!(b.stableford, 6);
    assert_eq!(b.round_contributions[0].round_id, "1");

    assert_eq!(result.rows[0].person_id, "person-a");
    assert_eq!(result.rows[1].rank, 2);
}
