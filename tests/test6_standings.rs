mod common;

use rusty_golf_engine::aggregate::{
    ContributorBonusAward, RoundCompetitionData, SortDirection, StandingsResult,
    calculate_standings,
};
use rusty_golf_engine::model::{
    AggregationConfig, BestBallConfig, CompetitionConfig, CompetitionInput, HiLoConfig,
    LowestStrokesConfig, MatchPlayConfig, MatchWinsConfig, ParticipantType, PlayerPairing,
    ResolvedScore, StablefordConfig, StrokeBasis, StrokePlayConfig, Team, TeamPairing,
};

fn round(id: &str, number: u32, competition_inputs: Vec<CompetitionInput>) -> RoundCompetitionData {
    RoundCompetitionData {
        round_id: id.to_string(),
        round_number: Some(number),
        groups: Vec::new(),
        competition_inputs,
    }
}

fn totals(result: &StandingsResult) -> Vec<(&str, f64, u32)> {
    result
        .leaderboard
        .iter()
        .map(|e| (e.entity_id.as_str(), e.total, e.rank))
        .collect()
}

fn stableford_round(id: &str, number: u32, scores: Vec<ResolvedScore>) -> RoundCompetitionData {
    let input = common::input(
        CompetitionConfig::Stableford(StablefordConfig::default()),
        common::holes(2),
        common::scratch_players(&["a", "b"]),
        scores,
    );
    round(id, number, vec![input])
}

#[test]
fn sum_stableford_adds_rounds_and_contributor_bonuses() {
    let mut r1 = common::flat_card("a", 4, 2); // 4
    r1.extend(common::flat_card("b", 5, 2)); // 2
    let mut r2 = common::flat_card("a", 4, 2); // 4
    r2.extend(common::flat_card("b", 3, 2)); // 6
    let rounds = vec![stableford_round("r1", 1, r1), stableford_round("r2", 2, r2)];
    let bonuses = vec![ContributorBonusAward {
        round_id: "r1".to_string(),
        round_number: Some(1),
        round_participant_id: "b".to_string(),
        bonus_points: 1.0,
    }];

    let result = calculate_standings(
        &AggregationConfig::SumStableford,
        &rounds,
        ParticipantType::Individual,
        &bonuses,
    );

    assert_eq!(result.sort_direction, SortDirection::Desc);
    assert_eq!(totals(&result), vec![("person-b", 9.0, 1), ("person-a", 8.0, 2)]);

    let b = &result.leaderboard[0];
    assert_eq!(b.rounds_played, 2);
    assert_eq!(b.per_round[0].value, 3.0);
    assert_eq!(b.per_round[1].round_number, Some(2));
}

#[test]
fn individual_methods_ignore_team_standings() {
    let rounds = vec![stableford_round("r1", 1, common::flat_card("a", 4, 2))];
    let result = calculate_standings(
        &AggregationConfig::SumStableford,
        &rounds,
        ParticipantType::Team,
        &[],
    );
    assert!(result.leaderboard.is_empty());
}

#[test]
fn lowest_strokes_sorts_ascending_and_skips_empty_cards() {
    let config = StrokePlayConfig {
        scoring_basis: StrokeBasis::GrossStrokes,
    };
    let players = common::scratch_players(&["a", "b", "c"]);
    let round_with = |id: &str, number: u32, scores: Vec<ResolvedScore>| {
        round(
            id,
            number,
            vec![common::input(
                CompetitionConfig::StrokePlay(config.clone()),
                common::holes(2),
                players.clone(),
                scores,
            )],
        )
    };

    let mut r1 = common::flat_card("a", 4, 2);
    r1.extend(common::flat_card("b", 5, 2));
    let mut r2 = common::flat_card("a", 5, 2);
    r2.extend(common::flat_card("b", 4, 2));
    let rounds = vec![round_with("r1", 1, r1), round_with("r2", 2, r2)];

    let result = calculate_standings(
        &AggregationConfig::LowestStrokes(LowestStrokesConfig {
            scoring_basis: StrokeBasis::GrossStrokes,
        }),
        &rounds,
        ParticipantType::Individual,
        &[],
    );

    assert_eq!(result.sort_direction, SortDirection::Asc);
    assert_eq!(totals(&result), vec![("person-a", 18.0, 1), ("person-b", 18.0, 1)]);
}

fn singles_round(
    id: &str,
    number: u32,
    a_card: &[i32],
    b_card: &[i32],
    opponent: &str,
) -> RoundCompetitionData {
    let config = MatchPlayConfig {
        points_per_win: 1.0,
        points_per_half: 0.5,
        pairings: vec![PlayerPairing {
            player_a: "a".to_string(),
            player_b: opponent.to_string(),
        }],
    };
    let mut scores = common::card("a", a_card);
    scores.extend(common::card("b", b_card));
    let input = common::input(
        CompetitionConfig::MatchPlay(config),
        common::holes(2),
        common::scratch_players(&["a", "b"]),
        scores,
    );
    round(id, number, vec![input])
}

#[test]
fn match_wins_sums_awards_and_skips_broken_rounds() {
    let rounds = vec![
        singles_round("r1", 1, &[4, 4], &[5, 5], "b"),
        singles_round("r2", 2, &[4, 4], &[4, 4], "b"),
        singles_round("r3", 3, &[4, 4], &[5, 5], "ghost"),
    ];

    let result = calculate_standings(
        &AggregationConfig::MatchWins(MatchWinsConfig::default()),
        &rounds,
        ParticipantType::Individual,
        &[],
    );
    assert_eq!(totals(&result), vec![("person-a", 1.5, 1), ("person-b", 0.5, 2)]);
    assert_eq!(result.leaderboard[0].rounds_played, 2);

    let overridden = calculate_standings(
        &AggregationConfig::MatchWins(MatchWinsConfig {
            points_per_win: Some(3.0),
            points_per_half: None,
        }),
        &rounds,
        ParticipantType::Individual,
        &[],
    );
    assert_eq!(totals(&overridden), vec![("person-a", 3.5, 1), ("person-b", 0.5, 2)]);
}

fn tournament_teams() -> Vec<Team> {
    let mut t1 = common::team("t1", "Team1", &["a", "b"]);
    t1.tournament_team_id = Some("tt1".to_string());
    let mut t2 = common::team("t2", "Team2", &["c", "d"]);
    t2.tournament_team_id = Some("tt2".to_string());
    vec![t1, t2]
}

fn four_ball_scores() -> Vec<ResolvedScore> {
    let mut scores = common::card("a", &[3, 4]);
    scores.extend(common::card("b", &[5, 4]));
    scores.extend(common::card("c", &[4, 4]));
    scores.extend(common::card("d", &[4, 5]));
    scores
}

fn best_ball_round(id: &str, number: u32, team_b: &str) -> RoundCompetitionData {
    let config = BestBallConfig {
        points_per_win: 1.0,
        points_per_half: 0.5,
        pairings: vec![TeamPairing {
            team_a: "t1".to_string(),
            team_b: team_b.to_string(),
        }],
    };
    let mut input = common::input(
        CompetitionConfig::BestBall(config),
        common::holes(2),
        common::scratch_players(&["a", "b", "c", "d"]),
        four_ball_scores(),
    );
    input.teams = tournament_teams();
    round(id, number, vec![input])
}

#[test]
fn team_match_wins_roll_up_to_tournament_teams() {
    // hi-lo picks up the round's groups
    let mut hi_lo = common::input(
        CompetitionConfig::HiLo(HiLoConfig::default()),
        common::holes(2),
        common::scratch_players(&["a", "b", "c", "d"]),
        four_ball_scores(),
    );
    hi_lo.teams = tournament_teams();
    let mut r2 = round("r2", 2, vec![hi_lo]);
    r2.groups = vec![common::group("g1", 1, &["a", "b", "c", "d"])];

    let rounds = vec![best_ball_round("r1", 1, "t2"), r2, best_ball_round("r3", 3, "t9")];
    let result = calculate_standings(
        &AggregationConfig::MatchWins(MatchWinsConfig::default()),
        &rounds,
        ParticipantType::Team,
        &[],
    );

    assert_eq!(totals(&result), vec![("tt1", 2.0, 1), ("tt2", 0.0, 2)]);
    let tt1 = &result.leaderboard[0];
    assert_eq!(tt1.display_name, "Team1");
    assert_eq!(tt1.rounds_played, 2);
}

#[test]
fn team_standings_credit_singles_to_the_players_team() {
    let mut r1 = singles_round("r1", 1, &[4, 4], &[5, 5], "b");
    let input = &mut r1.competition_inputs[0];
    let mut t1 = common::team("t1", "Team1", &["a"]);
    t1.tournament_team_id = Some("tt1".to_string());
    input.teams = vec![t1, common::team("t2", "Team2", &["b"])];

    let result = calculate_standings(
        &AggregationConfig::MatchWins(MatchWinsConfig::default()),
        &[r1],
        ParticipantType::Team,
        &[],
    );
    assert_eq!(totals(&result), vec![("tt1", 1.0, 1), ("t2", 0.0, 2)]);
}
