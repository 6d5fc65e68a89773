use serde::{Deserialize, Serialize};

use crate::model::{CompetitionInput, StablefordConfig, sorted_holes};
use crate::score::{ScoreLookup, assign_ranks};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StablefordHoleScore {
    pub hole_number: u32,
    pub par: i32,
    pub stroke_index: i32,
    pub gross_strokes: Option<i32>,
    pub strokes_received: i32,
    pub net_strokes: Option<i32>,
    pub points: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StablefordPlayerResult {
    pub round_participant_id: String,
    pub person_id: String,
    pub display_name: String,
    pub playing_handicap: i32,
    pub hole_scores: Vec<StablefordHoleScore>,
    pub total_points: i32,
    pub gross_total: i32,
    pub net_total: i32,
    /// Holes with a score entered.
    pub holes_completed: u32,
    /// Points over the back half, third, sixth and last hole of the card.
    /// Empty unless count-back is switched on.
    pub count_back: Vec<i32>,
    pub rank: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StablefordResult {
    pub leaderboard: Vec<StablefordPlayerResult>,
}

/// Trailing window sizes for count-back on a card of `holes` holes.
#[must_use]
pub fn count_back_windows(holes: usize) -> [usize; 4] {
    [holes / 2, holes / 3, holes / 6, holes.min(1)]
}

fn count_back_values(hole_scores: &[StablefordHoleScore]) -> Vec<i32> {
    count_back_windows(hole_scores.len())
        .iter()
        .map(|&window| {
            hole_scores[hole_scores.len() - window..]
                .iter()
                .map(|h| h.points)
                .sum()
        })
        .collect()
}

#[must_use]
pub fn calculate_stableford(
    input: &CompetitionInput,
    config: &StablefordConfig,
) -> StablefordResult {
    let lookup = ScoreLookup::new(&input.scores);
    let holes = sorted_holes(&input.holes);

    let mut leaderboard: Vec<StablefordPlayerResult> = input
        .participants
        .iter()
        .map(|p| {
            let mut total_points = 0;
            let mut gross_total = 0;
            let mut net_total = 0;
            let mut holes_completed = 0;

            let hole_scores: Vec<StablefordHoleScore> = holes
                .iter()
                .map(|hole| {
                    let card = lookup.card(p, hole);
                    if let (Some(gross), Some(net)) = (card.gross_strokes, card.net_strokes) {
                        total_points += card.points;
                        gross_total += gross;
                        net_total += net;
                        holes_completed += 1;
                    }
                    StablefordHoleScore {
                        hole_number: hole.hole_number,
                        par: hole.par,
                        stroke_index: hole.stroke_index,
                        gross_strokes: card.gross_strokes,
                        strokes_received: card.strokes_received,
                        net_strokes: card.net_strokes,
                        points: card.points,
                    }
                })
                .collect();

            let count_back = if config.count_back {
                count_back_values(&hole_scores)
            } else {
                Vec::new()
            };

            StablefordPlayerResult {
                round_participant_id: p.round_participant_id.clone(),
                person_id: p.person_id.clone(),
                display_name: p.display_name.clone(),
                playing_handicap: p.playing_handicap,
                hole_scores,
                total_points,
                gross_total,
                net_total,
                holes_completed,
                count_back,
                rank: 0,
            }
        })
        .collect();

    leaderboard.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| b.count_back.cmp(&a.count_back))
    });
    assign_ranks(
        &mut leaderboard,
        |p| (p.total_points, p.count_back.clone()),
        |p, rank| p.rank = rank,
    );

    StablefordResult { leaderboard }
}
