use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::head_to_head::{MatchStatus, MatchTracker, PlayerRef, Verdict};
use crate::error::EngineError;
use crate::model::{CompetitionInput, Hole, MatchPlayConfig, Participant, sorted_holes};
use crate::score::ScoreLookup;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchHoleResult {
    pub hole_number: u32,
    pub player_a_points: i32,
    pub player_b_points: i32,
    pub hole_winner: Verdict,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub player_a: PlayerRef,
    pub player_b: PlayerRef,
    pub hole_results: Vec<MatchHoleResult>,
    #[serde(flatten)]
    pub status: MatchStatus,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchPlayResult {
    pub matches: Vec<MatchResult>,
}

/// One match per configured pairing, in pairing order.
///
/// # Errors
///
/// Returns `InvalidReference` if a pairing names a participant that is not
/// in the input.
pub fn calculate_match_play(
    input: &CompetitionInput,
    config: &MatchPlayConfig,
) -> Result<MatchPlayResult, EngineError> {
    let lookup = ScoreLookup::new(&input.scores);
    let holes = sorted_holes(&input.holes);
    let by_id: HashMap<&str, &Participant, RandomState> = input
        .participants
        .iter()
        .map(|p| (p.round_participant_id.as_str(), p))
        .collect();

    let matches = config
        .pairings
        .iter()
        .map(|pairing| {
            let (Some(a), Some(b)) = (
                by_id.get(pairing.player_a.as_str()),
                by_id.get(pairing.player_b.as_str()),
            ) else {
                return Err(EngineError::InvalidReference(format!(
                    "match play pairing {} v {} references an unknown participant",
                    pairing.player_a, pairing.player_b
                )));
            };
            Ok(calculate_match(a, b, &holes, &lookup, config))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MatchPlayResult { matches })
}

fn calculate_match(
    a: &Participant,
    b: &Participant,
    holes: &[Hole],
    lookup: &ScoreLookup<'_>,
    config: &MatchPlayConfig,
) -> MatchResult {
    let mut tracker = MatchTracker::new(holes.len());
    let mut hole_results = Vec::new();

    for hole in holes {
        // both need a card for the hole to count
        let (Some(a_points), Some(b_points)) = (lookup.points(a, hole), lookup.points(b, hole))
        else {
            continue;
        };
        let hole_winner = Verdict::compare(a_points, b_points);
        tracker.record(hole_winner);
        hole_results.push(MatchHoleResult {
            hole_number: hole.hole_number,
            player_a_points: a_points,
            player_b_points: b_points,
            hole_winner,
        });
    }

    MatchResult {
        player_a: PlayerRef {
            round_participant_id: a.round_participant_id.clone(),
            display_name: a.display_name.clone(),
        },
        player_b: PlayerRef {
            round_participant_id: b.round_participant_id.clone(),
            display_name: b.display_name.clone(),
        },
        hole_results,
        status: tracker.finish(
            &a.display_name,
            &b.display_name,
            config.points_per_win,
            config.points_per_half,
        ),
    }
}
