use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::EngineError;
use crate::model::{CompetitionInput, GameDecision, sorted_holes};
use crate::score::{ScoreLookup, assign_ranks};

const WOLF_GROUP_SIZE: usize = 4;
const LONE_WOLF_WIN: i32 = 4;
const SIDE_WIN: i32 = 2;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WolfOutcome {
    WolfWins,
    WolfLoses,
    Tie,
    NotPlayed,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStableford {
    pub round_participant_id: String,
    pub stableford: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WolfHoleResult {
    pub hole_number: u32,
    pub wolf_player_id: String,
    pub partner_player_id: Option<String>,
    pub is_lone_wolf: bool,
    pub player_stableford: Vec<PlayerStableford>,
    pub wolf_side_best: i32,
    pub opposing_side_best: i32,
    pub outcome: WolfOutcome,
    /// Points per player, in rotation order.
    pub points_awarded: Vec<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WolfPlayerResult {
    pub round_participant_id: String,
    pub display_name: String,
    /// 1-based seat in the rotation.
    pub rotation_position: u32,
    pub total_points: i32,
    pub holes_completed: u32,
    pub rank: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WolfResult {
    pub holes: Vec<WolfHoleResult>,
    pub leaderboard: Vec<WolfPlayerResult>,
}

/// Seat (0-based) of the wolf on a hole.
#[must_use]
pub fn wolf_index_for_hole(hole_number: u32, player_count: usize) -> usize {
    if player_count == 0 {
        return 0;
    }
    (hole_number.saturating_sub(1) as usize) % player_count
}

/// Participants play in input order; seat 1 is wolf on holes 1, 5, 9, ...
/// A hole only counts once all four have a card.
///
/// # Errors
///
/// Returns `CardinalityViolation` unless there are exactly four participants.
pub fn calculate_wolf(input: &CompetitionInput) -> Result<WolfResult, EngineError> {
    let players = &input.participants;
    if players.len() != WOLF_GROUP_SIZE {
        return Err(EngineError::cardinality("Wolf", WOLF_GROUP_SIZE, players.len()));
    }

    let lookup = ScoreLookup::new(&input.scores);
    let holes = sorted_holes(&input.holes);
    let decisions: HashMap<u32, &GameDecision, RandomState> =
        input.game_decisions.iter().map(|d| (d.hole_number, d)).collect();

    let mut totals = vec![0; players.len()];
    let mut holes_completed = 0;
    let mut hole_results = Vec::with_capacity(holes.len());

    for hole in &holes {
        let wolf_idx = wolf_index_for_hole(hole.hole_number, players.len());
        let wolf = &players[wolf_idx];

        // a partner outside the group, or the wolf itself, means lone wolf
        let partner_idx = decisions
            .get(&hole.hole_number)
            .and_then(|d| d.partner_player_id.as_deref())
            .and_then(|id| players.iter().position(|p| p.round_participant_id == id))
            .filter(|&idx| idx != wolf_idx);
        let partner_player_id = partner_idx.map(|idx| players[idx].round_participant_id.clone());
        let is_lone_wolf = partner_idx.is_none();

        let points: Option<Vec<i32>> = players.iter().map(|p| lookup.points(p, hole)).collect();
        let Some(points) = points else {
            hole_results.push(WolfHoleResult {
                hole_number: hole.hole_number,
                wolf_player_id: wolf.round_participant_id.clone(),
                partner_player_id,
                is_lone_wolf,
                player_stableford: players
                    .iter()
                    .map(|p| PlayerStableford {
                        round_participant_id: p.round_participant_id.clone(),
                        stableford: 0,
                    })
                    .collect(),
                wolf_side_best: 0,
                opposing_side_best: 0,
                outcome: WolfOutcome::NotPlayed,
                points_awarded: vec![0; players.len()],
            });
            continue;
        };

        let on_wolf_side = |idx: usize| idx == wolf_idx || Some(idx) == partner_idx;
        let side_best = |wolf_side: bool| {
            points
                .iter()
                .enumerate()
                .filter(|(idx, _)| on_wolf_side(*idx) == wolf_side)
                .map(|(_, pts)| *pts)
                .max()
                .unwrap_or(0)
        };
        let wolf_side_best = side_best(true);
        let opposing_side_best = side_best(false);

        let outcome = match wolf_side_best.cmp(&opposing_side_best) {
            std::cmp::Ordering::Greater => WolfOutcome::WolfWins,
            std::cmp::Ordering::Less => WolfOutcome::WolfLoses,
            std::cmp::Ordering::Equal => WolfOutcome::Tie,
        };

        let points_awarded: Vec<i32> = (0..players.len())
            .map(|idx| match (outcome, is_lone_wolf) {
                (WolfOutcome::WolfWins, true) if idx == wolf_idx => LONE_WOLF_WIN,
                (WolfOutcome::WolfWins, false) if on_wolf_side(idx) => SIDE_WIN,
                (WolfOutcome::WolfLoses, _) if !on_wolf_side(idx) => SIDE_WIN,
                _ => 0,
            })
            .collect();

        for (total, awarded) in totals.iter_mut().zip(&points_awarded) {
            *total += *awarded;
        }
        holes_completed += 1;

        hole_results.push(WolfHoleResult {
            hole_number: hole.hole_number,
            wolf_player_id: wolf.round_participant_id.clone(),
            partner_player_id,
            is_lone_wolf,
            player_stableford: players
                .iter()
                .zip(&points)
                .map(|(p, &stableford)| PlayerStableford {
                    round_participant_id: p.round_participant_id.clone(),
                    stableford,
                })
                .collect(),
            wolf_side_best,
            opposing_side_best,
            outcome,
            points_awarded,
        });
    }

    let mut leaderboard: Vec<WolfPlayerResult> = players
        .iter()
        .zip(totals)
        .enumerate()
        .map(|(idx, (p, total_points))| WolfPlayerResult {
            round_participant_id: p.round_participant_id.clone(),
            display_name: p.display_name.clone(),
            rotation_position: u32::try_from(idx).unwrap_or(u32::MAX - 1) + 1,
            total_points,
            holes_completed,
            rank: 0,
        })
        .collect();
    leaderboard.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    assign_ranks(&mut leaderboard, |p| p.total_points, |p, rank| p.rank = rank);

    Ok(WolfResult {
        holes: hole_results,
        leaderboard,
    })
}
