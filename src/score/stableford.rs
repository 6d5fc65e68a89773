use ahash::RandomState;
use std::collections::HashMap;

use super::handicap::get_strokes_on_hole;
use crate::model::{Hole, Participant, ResolvedScore};

/// Net score against par: double bogey or worse 0, bogey 1, par 2,
/// birdie 3, eagle 4, albatross 5.
#[must_use]
pub fn stableford_points(gross_strokes: i32, par: i32, strokes_received: i32) -> i32 {
    let net_strokes = gross_strokes - strokes_received;
    let diff = net_strokes - par;
    (2 - diff).max(0)
}

/// (participant, hole) -> strokes, built once per calculation.
///
/// A pair missing from the lookup has not been scored yet, which is not the
/// same as a score of zero.
#[derive(Debug, Default)]
pub struct ScoreLookup<'a> {
    by_participant: HashMap<&'a str, HashMap<u32, i32, RandomState>, RandomState>,
}

impl<'a> ScoreLookup<'a> {
    #[must_use]
    pub fn new(scores: &'a [ResolvedScore]) -> Self {
        let mut by_participant: HashMap<&'a str, HashMap<u32, i32, RandomState>, RandomState> =
            HashMap::default();
        for score in scores {
            by_participant
                .entry(score.round_participant_id.as_str())
                .or_default()
                .insert(score.hole_number, score.strokes);
        }
        Self { by_participant }
    }

    #[must_use]
    pub fn get(&self, round_participant_id: &str, hole_number: u32) -> Option<i32> {
        self.by_participant
            .get(round_participant_id)
            .and_then(|holes| holes.get(&hole_number))
            .copied()
    }

    #[must_use]
    pub fn has(&self, round_participant_id: &str, hole_number: u32) -> bool {
        self.get(round_participant_id, hole_number).is_some()
    }

    /// The player's stableford points on the hole, if they have a score.
    #[must_use]
    pub fn points(&self, participant: &Participant, hole: &Hole) -> Option<i32> {
        self.get(&participant.round_participant_id, hole.hole_number)
            .map(|gross| {
                let received = get_strokes_on_hole(participant.playing_handicap, hole.stroke_index);
                stableford_points(gross, hole.par, received)
            })
    }

    #[must_use]
    pub fn card(&self, participant: &Participant, hole: &Hole) -> HoleCard {
        let strokes_received = get_strokes_on_hole(participant.playing_handicap, hole.stroke_index);
        let gross_strokes = self.get(&participant.round_participant_id, hole.hole_number);
        HoleCard {
            gross_strokes,
            strokes_received,
            net_strokes: gross_strokes.map(|g| g - strokes_received),
            points: gross_strokes
                .map_or(0, |g| stableford_points(g, hole.par, strokes_received)),
        }
    }
}

/// One player's line on one hole. `points` is 0 when unscored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCard {
    pub gross_strokes: Option<i32>,
    pub strokes_received: i32,
    pub net_strokes: Option<i32>,
    pub points: i32,
}
