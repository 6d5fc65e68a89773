use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::scoreboard::{IndividualScoreboardRow, sort_and_rank};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TournamentLeaderboardRoundInput {
    pub round_id: String,
    pub round_name: String,
    pub is_finalized: bool,
    /// Holes on this round's card.
    pub total_holes: u32,
    pub scoreboard_rows: Vec<IndividualScoreboardRow>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TournamentLeaderboardInput {
    pub rounds: Vec<TournamentLeaderboardRoundInput>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundContribution {
    pub round_id: String,
    pub round_name: String,
    pub gross_strokes: i32,
    pub net_strokes: i32,
    pub stableford: i32,
    pub contributor_bonus_total: f64,
    pub total: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TournamentLeaderboardRow {
    pub person_id: String,
    pub display_name: String,
    pub round_participant_ids: Vec<String>,
    /// Only rounds the player finished.
    pub round_contributions: Vec<RoundContribution>,
    pub rounds_played: u32,
    pub gross_strokes: i32,
    pub net_strokes: i32,
    pub stableford: i32,
    pub contributor_bonus_total: f64,
    pub total: f64,
    pub rank: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TournamentLeaderboardResult {
    pub rows: Vec<TournamentLeaderboardRow>,
}

/// Sums finished cards from finalized rounds, per person.
///
/// A round the player did not complete is left out for that player rather
/// than counted as zero.
#[must_use]
pub fn calculate_tournament_leaderboard(
    input: &TournamentLeaderboardInput,
) -> TournamentLeaderboardResult {
    let mut rows: Vec<TournamentLeaderboardRow> = Vec::new();
    let mut by_person: HashMap<String, usize, RandomState> = HashMap::default();

    for round in input.rounds.iter().filter(|r| r.is_finalized) {
        for card in &round.scoreboard_rows {
            if card.holes_completed < round.total_holes {
                continue;
            }

            let idx = *by_person.entry(card.person_id.clone()).or_insert_with(|| {
                rows.push(TournamentLeaderboardRow {
                    person_id: card.person_id.clone(),
                    display_name: card.display_name.clone(),
                    round_participant_ids: Vec::new(),
                    round_contributions: Vec::new(),
                    rounds_played: 0,
                    gross_strokes: 0,
                    net_strokes: 0,
                    stableford: 0,
                    contributor_bonus_total: 0.0,
                    total: 0.0,
                    rank: 0,
                });
                rows.len() - 1
            });

            let row = &mut rows[idx];
            row.round_participant_ids.push(card.round_participant_id.clone());
            row.round_contributions.push(RoundContribution {
                round_id: round.round_id.clone(),
                round_name: round.round_name.clone(),
                gross_strokes: card.gross_strokes,
                net_strokes: card.net_strokes,
                stableford: card.stableford,
                contributor_bonus_total: card.contributor_bonus_total,
                total: card.total,
            });
            row.rounds_played += 1;
            row.gross_strokes += card.gross_strokes;
            row.net_strokes += card.net_strokes;
            row.stableford += card.stableford;
            row.contributor_bonus_total += card.contributor_bonus_total;
            row.total += card.total;
        }
    }

    sort_and_rank(
        &mut rows,
        |r| (r.stableford, r.gross_strokes),
        |r, rank| r.rank = rank,
    );

    TournamentLeaderboardResult { rows }
}
