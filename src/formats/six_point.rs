use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::model::{CompetitionInput, SixPointBasis, SixPointConfig, sorted_holes};
use crate::score::{ScoreLookup, assign_ranks};

const SIX_POINT_GROUP_SIZE: usize = 3;

/// Points for first, second and third on a hole.
pub const SIX_POINT_DISTRIBUTION: [i32; 3] = [4, 2, 0];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SixPointPlayerScore {
    pub round_participant_id: String,
    /// Stableford points or gross strokes, depending on the basis.
    pub score: i32,
    pub points: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SixPointHoleScore {
    pub hole_number: u32,
    /// False when someone has no card yet; every player then gets 0.
    pub played: bool,
    pub player_scores: Vec<SixPointPlayerScore>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SixPointPlayerResult {
    pub round_participant_id: String,
    pub display_name: String,
    pub total_points: i32,
    pub holes_completed: u32,
    pub rank: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SixPointResult {
    pub scoring_basis: SixPointBasis,
    pub holes: Vec<SixPointHoleScore>,
    pub leaderboard: Vec<SixPointPlayerResult>,
}

/// Points for each position of a best-first list of values. A block of
/// equal values shares the points of the positions it covers evenly.
#[must_use]
pub fn distribute_points(sorted_values: &[i32], distribution: &[i32]) -> Vec<i32> {
    let mut result = vec![0; sorted_values.len()];
    let mut start = 0;
    while start < sorted_values.len() {
        let end = sorted_values[start..]
            .iter()
            .position(|v| *v != sorted_values[start])
            .map_or(sorted_values.len(), |offset| start + offset);
        let shared: i32 = (start..end).map(|k| distribution.get(k).copied().unwrap_or(0)).sum();
        let block = i32::try_from(end - start).unwrap_or(i32::MAX);
        for slot in &mut result[start..end] {
            *slot = shared / block;
        }
        start = end;
    }
    result
}

/// # Errors
///
/// Returns `CardinalityViolation` unless there are exactly three participants.
pub fn calculate_six_point(
    input: &CompetitionInput,
    config: &SixPointConfig,
) -> Result<SixPointResult, EngineError> {
    let players = &input.participants;
    if players.len() != SIX_POINT_GROUP_SIZE {
        return Err(EngineError::cardinality("Six Point", SIX_POINT_GROUP_SIZE, players.len()));
    }

    let lookup = ScoreLookup::new(&input.scores);
    let holes = sorted_holes(&input.holes);
    let mut totals = [0; SIX_POINT_GROUP_SIZE];
    let mut holes_completed = 0;
    let mut hole_scores = Vec::with_capacity(holes.len());

    for hole in &holes {
        let scores: Option<Vec<i32>> = players
            .iter()
            .map(|p| match config.scoring_basis {
                SixPointBasis::Gross => lookup.get(&p.round_participant_id, hole.hole_number),
                SixPointBasis::Stableford => lookup.points(p, hole),
            })
            .collect();

        let Some(scores) = scores else {
            hole_scores.push(SixPointHoleScore {
                hole_number: hole.hole_number,
                played: false,
                player_scores: players
                    .iter()
                    .map(|p| SixPointPlayerScore {
                        round_participant_id: p.round_participant_id.clone(),
                        score: 0,
                        points: 0,
                    })
                    .collect(),
            });
            continue;
        };

        // best first: fewest strokes, or most stableford points
        let mut order: Vec<usize> = (0..players.len()).collect();
        match config.scoring_basis {
            SixPointBasis::Gross => order.sort_by_key(|&i| scores[i]),
            SixPointBasis::Stableford => order.sort_by_key(|&i| std::cmp::Reverse(scores[i])),
        }
        let sorted_values: Vec<i32> = order.iter().map(|&i| scores[i]).collect();
        let allocation = distribute_points(&sorted_values, &SIX_POINT_DISTRIBUTION);

        let mut points = [0; SIX_POINT_GROUP_SIZE];
        for (&player_idx, awarded) in order.iter().zip(allocation) {
            points[player_idx] = awarded;
            totals[player_idx] += awarded;
        }
        holes_completed += 1;

        hole_scores.push(SixPointHoleScore {
            hole_number: hole.hole_number,
            played: true,
            player_scores: players
                .iter()
                .enumerate()
                .map(|(idx, p)| SixPointPlayerScore {
                    round_participant_id: p.round_participant_id.clone(),
                    score: scores[idx],
                    points: points[idx],
                })
                .collect(),
        });
    }

    let mut leaderboard: Vec<SixPointPlayerResult> = players
        .iter()
        .zip(totals)
        .map(|(p, total_points)| SixPointPlayerResult {
            round_participant_id: p.round_participant_id.clone(),
            display_name: p.display_name.clone(),
            total_points,
            holes_completed,
            rank: 0,
        })
        .collect();
    leaderboard.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    assign_ranks(&mut leaderboard, |p| p.total_points, |p, rank| p.rank = rank);

    Ok(SixPointResult {
        scoring_basis: config.scoring_basis,
        holes: hole_scores,
        leaderboard,
    })
}

#[cfg(test)]
mod tests {
    use super::{SIX_POINT_DISTRIBUTION, distribute_points};

    #[test]
    fn tie_patterns_split_evenly() {
        assert_eq!(distribute_points(&[3, 2, 1], &SIX_POINT_DISTRIBUTION), vec![4, 2, 0]);
        assert_eq!(distribute_points(&[3, 3, 1], &SIX_POINT_DISTRIBUTION), vec![3, 3, 0]);
        assert_eq!(distribute_points(&[3, 1, 1], &SIX_POINT_DISTRIBUTION), vec![4, 1, 1]);
        assert_eq!(distribute_points(&[2, 2, 2], &SIX_POINT_DISTRIBUTION), vec![2, 2, 2]);
    }
}
