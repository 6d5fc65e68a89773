use serde::{Deserialize, Serialize};

use super::wolf::PlayerStableford;
use crate::error::EngineError;
use crate::model::{CompetitionInput, sorted_holes};
use crate::score::{ScoreLookup, assign_ranks};

const CHAIR_GROUP_SIZE: usize = 4;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChairHoleResult {
    pub hole_number: u32,
    pub played: bool,
    pub player_stableford: Vec<PlayerStableford>,
    /// Set only on the hole where the chair changed hands.
    pub chair_taken_by: Option<String>,
    /// Holder once the hole is resolved.
    pub chair_holder_id: Option<String>,
    pub point_earned: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChairPlayerResult {
    pub round_participant_id: String,
    pub display_name: String,
    pub total_points: i32,
    pub holes_completed: u32,
    pub rank: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChairResult {
    pub holes: Vec<ChairHoleResult>,
    pub leaderboard: Vec<ChairPlayerResult>,
}

/// An outright best score takes the chair; any tie at the top leaves it
/// where it is. The holder after each fully scored hole earns a point.
///
/// # Errors
///
/// Returns `CardinalityViolation` unless there are exactly four participants.
pub fn calculate_chair(input: &CompetitionInput) -> Result<ChairResult, EngineError> {
    let players = &input.participants;
    if players.len() != CHAIR_GROUP_SIZE {
        return Err(EngineError::cardinality("Chair", CHAIR_GROUP_SIZE, players.len()));
    }

    let lookup = ScoreLookup::new(&input.scores);
    let holes = sorted_holes(&input.holes);
    let mut totals = [0; CHAIR_GROUP_SIZE];
    let mut holes_completed = 0;
    let mut holder: Option<usize> = None;
    let mut hole_results = Vec::with_capacity(holes.len());

    let holder_id = |holder: Option<usize>| holder.map(|i| players[i].round_participant_id.clone());

    for hole in &holes {
        let points: Option<Vec<i32>> = players.iter().map(|p| lookup.points(p, hole)).collect();
        let Some(points) = points else {
            hole_results.push(ChairHoleResult {
                hole_number: hole.hole_number,
                played: false,
                player_stableford: players
                    .iter()
                    .map(|p| PlayerStableford {
                        round_participant_id: p.round_participant_id.clone(),
                        stableford: 0,
                    })
                    .collect(),
                chair_taken_by: None,
                chair_holder_id: holder_id(holder),
                point_earned: false,
            });
            continue;
        };

        let best = points.iter().copied().max().unwrap_or(0);
        let leaders: Vec<usize> = (0..players.len()).filter(|&i| points[i] == best).collect();

        let mut chair_taken_by = None;
        if let [outright] = leaders.as_slice() {
            if holder != Some(*outright) {
                holder = Some(*outright);
                chair_taken_by = holder_id(holder);
            }
        }

        if let Some(idx) = holder {
            totals[idx] += 1;
        }
        holes_completed += 1;

        hole_results.push(ChairHoleResult {
            hole_number: hole.hole_number,
            played: true,
            player_stableford: players
                .iter()
                .zip(&points)
                .map(|(p, &stableford)| PlayerStableford {
                    round_participant_id: p.round_participant_id.clone(),
                    stableford,
                })
                .collect(),
            chair_taken_by,
            chair_holder_id: holder_id(holder),
            point_earned: holder.is_some(),
        });
    }

    let mut leaderboard: Vec<ChairPlayerResult> = players
        .iter()
        .zip(totals)
        .map(|(p, total_points)| ChairPlayerResult {
            round_participant_id: p.round_participant_id.clone(),
            display_name: p.display_name.clone(),
            total_points,
            holes_completed,
            rank: 0,
        })
        .collect();
    leaderboard.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    assign_ranks(&mut leaderboard, |p| p.total_points, |p, rank| p.rank = rank);

    Ok(ChairResult {
        holes: hole_results,
        leaderboard,
    })
}
