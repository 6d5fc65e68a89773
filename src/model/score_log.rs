//! Helpers for callers that hold the append-only score and decision logs.
//! The calculators never call these; they expect already-resolved input.

use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::types::{GameDecision, ResolvedScore};

/// One raw entry from the score log.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEvent {
    pub round_participant_id: String,
    pub hole_number: u32,
    pub strokes: i32,
}

/// Keeps the first event per (participant, hole).
///
/// `events` must be ordered newest first.
#[must_use]
pub fn resolve_latest_scores(events: &[ScoreEvent]) -> Vec<ResolvedScore> {
    let mut seen: HashSet<(&str, u32), RandomState> = HashSet::default();
    events
        .iter()
        .filter(|e| seen.insert((e.round_participant_id.as_str(), e.hole_number)))
        .map(|e| ResolvedScore {
            round_participant_id: e.round_participant_id.clone(),
            hole_number: e.hole_number,
            strokes: e.strokes,
        })
        .collect()
}

/// Keeps the first decision per (wolf, hole), so each group keeps its own.
/// `decisions` must be ordered newest first.
#[must_use]
pub fn latest_game_decisions(decisions: &[GameDecision]) -> Vec<GameDecision> {
    let mut seen: HashSet<(&str, u32), RandomState> = HashSet::default();
    decisions
        .iter()
        .filter(|d| seen.insert((d.wolf_player_id.as_str(), d.hole_number)))
        .cloned()
        .collect()
}
