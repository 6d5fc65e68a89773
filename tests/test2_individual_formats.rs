mod common;

use rusty_golf_engine::formats::{calculate_stableford, calculate_stroke_play, count_back_windows};
use rusty_golf_engine::model::{CompetitionConfig, StablefordConfig, StrokeBasis, StrokePlayConfig};

fn stableford_config(count_back: bool) -> CompetitionConfig {
    CompetitionConfig::Stableford(StablefordConfig { count_back })
}

#[test]
fn stableford_totals_and_competition_ranks() {
    let holes = common::holes(3);
    let players = common::scratch_players(&["a", "b", "c", "d"]);
    let mut scores = common::card("a", &[3, 4, 4]); // 7
    scores.extend(common::card("b", &[4, 4, 5])); // 5
    scores.extend(common::card("c", &[4, 5, 4])); // 5
    scores.extend(common::card("d", &[5, 5])); // 2, one hole short

    let input = common::input(stableford_config(false), holes, players, scores);
    let result = calculate_stableford(&input, &StablefordConfig::default());

    let lb = &result.leaderboard;
    assert_eq!(lb[0].round_participant_id, "a");
    assert_eq!(lb[0].total_points, 7);
    assert_eq!((lb[1].rank, lb[2].rank, lb[3].rank), (2, 2, 4));
    assert_eq!(lb[3].holes_completed, 2);
    assert_eq!(lb[3].hole_scores[2].gross_strokes, None);
    assert!(lb[0].count_back.is_empty());
}

#[test]
fn handicap_strokes_feed_net_and_points() {
    let holes = common::holes(2);
    // 1 stroke on stroke index 1 only
    let players = vec![common::player("a", 1.0)];
    let scores = common::card("a", &[5, 5]);
    let input = common::input(stableford_config(false), holes, players, scores);
    let result = calculate_stableford(&input, &StablefordConfig::default());

    let row = &result.leaderboard[0];
    assert_eq!(row.hole_scores[0].strokes_received, 1);
    assert_eq!(row.hole_scores[0].net_strokes, Some(4));
    assert_eq!(row.hole_scores[0].points, 2);
    assert_eq!(row.hole_scores[1].points, 1);
    assert_eq!((row.gross_total, row.net_total), (10, 9));
}

#[test]
fn count_back_splits_equal_totals() {
    assert_eq!(count_back_windows(18), [9, 6, 3, 1]);

    let holes = common::holes(18);
    let players = common::scratch_players(&["a", "b"]);
    // both 36 points; b is stronger over the back nine
    let mut a_card = vec![4; 18];
    a_card[0] = 3;
    a_card[17] = 5;
    let mut b_card = vec![4; 18];
    b_card[0] = 5;
    b_card[17] = 3;
    let mut scores = common::card("a", &a_card);
    scores.extend(common::card("b", &b_card));

    let config = StablefordConfig { count_back: true };
    let input = common::input(
        CompetitionConfig::Stableford(config.clone()),
        holes,
        players,
        scores,
    );
    let result = calculate_stableford(&input, &config);

    let lb = &result.leaderboard;
    assert_eq!(lb[0].total_points, lb[1].total_points);
    assert_eq!(lb[0].round_participant_id, "b");
    assert_eq!((lb[0].rank, lb[1].rank), (1, 2));
    assert_eq!(lb[0].count_back, vec![19, 13, 7, 3]);
}

#[test]
fn equal_totals_share_rank_without_count_back() {
    let holes = common::holes(2);
    let players = common::scratch_players(&["a", "b"]);
    let mut scores = common::card("a", &[3, 5]);
    scores.extend(common::card("b", &[5, 3]));
    let input = common::input(stableford_config(false), holes, players, scores);
    let result = calculate_stableford(&input, &StablefordConfig::default());
    assert!(result.leaderboard.iter().all(|r| r.rank == 1));
}

#[test]
fn stroke_play_ranks_lowest_first_and_leaves_unscored_unranked() {
    let holes = common::holes(2);
    let players = vec![
        common::player("a", 0.0),
        common::player("b", 2.0),
        common::player("c", 0.0),
    ];
    let mut scores = common::card("a", &[4, 5]); // gross 9, net 9
    scores.extend(common::card("b", &[5, 5])); // gross 10, net 8

    let config = StrokePlayConfig {
        scoring_basis: StrokeBasis::NetStrokes,
    };
    let input = common::input(
        CompetitionConfig::StrokePlay(config.clone()),
        holes,
        players,
        scores,
    );
    let net = calculate_stroke_play(&input, &config);
    assert_eq!(net.leaderboard[0].round_participant_id, "b");
    assert_eq!(net.leaderboard[0].ranking_score, 8);
    assert_eq!(net.leaderboard[0].relative_to_par, 0);
    assert_eq!(net.leaderboard[1].rank, Some(2));
    assert_eq!(net.leaderboard[2].round_participant_id, "c");
    assert_eq!(net.leaderboard[2].rank, None);

    let gross_config = StrokePlayConfig {
        scoring_basis: StrokeBasis::GrossStrokes,
    };
    let gross = calculate_stroke_play(&input, &gross_config);
    assert_eq!(gross.leaderboard[0].round_participant_id, "a");
    assert_eq!(gross.leaderboard[0].ranking_score, 9);
}
