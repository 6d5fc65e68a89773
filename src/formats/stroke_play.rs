use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::model::{CompetitionInput, StrokeBasis, StrokePlayConfig, sorted_holes};
use crate::score::ScoreLookup;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StrokePlayHoleScore {
    pub hole_number: u32,
    pub par: i32,
    pub stroke_index: i32,
    pub gross_strokes: Option<i32>,
    pub strokes_received: i32,
    pub net_strokes: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StrokePlayPlayerResult {
    pub round_participant_id: String,
    pub person_id: String,
    pub display_name: String,
    pub playing_handicap: i32,
    pub hole_scores: Vec<StrokePlayHoleScore>,
    pub gross_total: i32,
    pub net_total: i32,
    /// Gross or net total, whichever the competition ranks on.
    pub ranking_score: i32,
    /// `ranking_score` against the par of the whole card.
    pub relative_to_par: i32,
    pub holes_completed: u32,
    /// `None` until the player has scored a hole.
    pub rank: Option<u32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StrokePlayResult {
    pub scoring_basis: StrokeBasis,
    pub leaderboard: Vec<StrokePlayPlayerResult>,
}

/// Lowest ranking score first. Players with nothing scored go to the bottom
/// and stay unranked.
#[must_use]
pub fn calculate_stroke_play(
    input: &CompetitionInput,
    config: &StrokePlayConfig,
) -> StrokePlayResult {
    let lookup = ScoreLookup::new(&input.scores);
    let holes = sorted_holes(&input.holes);
    let total_par: i32 = holes.iter().map(|h| h.par).sum();

    let mut leaderboard: Vec<StrokePlayPlayerResult> = input
        .participants
        .iter()
        .map(|p| {
            let mut gross_total = 0;
            let mut net_total = 0;
            let mut holes_completed = 0;

            let hole_scores = holes
                .iter()
                .map(|hole| {
                    let card = lookup.card(p, hole);
                    if let (Some(gross), Some(net)) = (card.gross_strokes, card.net_strokes) {
                        gross_total += gross;
                        net_total += net;
                        holes_completed += 1;
                    }
                    StrokePlayHoleScore {
                        hole_number: hole.hole_number,
                        par: hole.par,
                        stroke_index: hole.stroke_index,
                        gross_strokes: card.gross_strokes,
                        strokes_received: card.strokes_received,
                        net_strokes: card.net_strokes,
                    }
                })
                .collect();

            let ranking_score = match config.scoring_basis {
                StrokeBasis::GrossStrokes => gross_total,
                StrokeBasis::NetStrokes => net_total,
            };

            StrokePlayPlayerResult {
                round_participant_id: p.round_participant_id.clone(),
                person_id: p.person_id.clone(),
                display_name: p.display_name.clone(),
                playing_handicap: p.playing_handicap,
                hole_scores,
                gross_total,
                net_total,
                ranking_score,
                relative_to_par: ranking_score - total_par,
                holes_completed,
                rank: None,
            }
        })
        .collect();

    leaderboard.sort_by(|a, b| match (a.holes_completed == 0, b.holes_completed == 0) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.ranking_score.cmp(&b.ranking_score),
    });

    let mut rank = 1;
    for idx in 0..leaderboard.len() {
        if leaderboard[idx].holes_completed == 0 {
            continue;
        }
        if idx > 0 && leaderboard[idx].ranking_score != leaderboard[idx - 1].ranking_score {
            rank = u32::try_from(idx).unwrap_or(u32::MAX - 1) + 1;
        }
        leaderboard[idx].rank = Some(rank);
    }

    StrokePlayResult {
        scoring_basis: config.scoring_basis,
        leaderboard,
    }
}
