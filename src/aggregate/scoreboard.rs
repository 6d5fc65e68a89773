use serde::{Deserialize, Serialize};

use crate::formats::BonusAwardInput;
use crate::model::{BonusMode, Hole, Participant, ResolvedScore, ScoreDisplay, sorted_holes};
use crate::score::{ScoreLookup, assign_ranks};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IndividualScoreboardInput {
    pub holes: Vec<Hole>,
    pub participants: Vec<Participant>,
    pub scores: Vec<ResolvedScore>,
    #[serde(default)]
    pub bonus_awards: Vec<BonusAwardInput>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IndividualHoleScore {
    pub hole_number: u32,
    pub par: i32,
    pub stroke_index: i32,
    pub gross_strokes: Option<i32>,
    pub strokes_received: i32,
    pub net_strokes: Option<i32>,
    pub stableford: i32,
    pub display: Option<ScoreDisplay>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StandaloneBadge {
    pub competition_id: String,
    pub label: String,
    pub short_label: String,
    pub hole_number: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IndividualScoreboardRow {
    pub round_participant_id: String,
    pub person_id: String,
    pub display_name: String,
    pub playing_handicap: i32,
    pub hole_scores: Vec<IndividualHoleScore>,
    pub gross_strokes: i32,
    pub net_strokes: i32,
    pub stableford: i32,
    pub contributor_bonus_total: f64,
    pub standalone_badges: Vec<StandaloneBadge>,
    /// Stableford plus contributor bonuses.
    pub total: f64,
    pub holes_completed: u32,
    pub rank: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IndividualScoreboardResult {
    pub rows: Vec<IndividualScoreboardRow>,
    pub has_contributor_bonuses: bool,
}

/// Sorts best stableford first, fewer gross strokes breaking ties, and
/// ranks; rows share a rank only when both match.
pub(crate) fn sort_and_rank<T>(
    rows: &mut [T],
    key: impl Fn(&T) -> (i32, i32),
    set_rank: impl FnMut(&mut T, u32),
) {
    rows.sort_by(|a, b| {
        let (stableford_a, gross_a) = key(a);
        let (stableford_b, gross_b) = key(b);
        stableford_b.cmp(&stableford_a).then(gross_a.cmp(&gross_b))
    });
    assign_ranks(rows, key, set_rank);
}

/// The always-on round leaderboard: every player's card plus the bonus
/// awards they won.
#[must_use]
pub fn calculate_individual_scoreboard(
    input: &IndividualScoreboardInput,
) -> IndividualScoreboardResult {
    let lookup = ScoreLookup::new(&input.scores);
    let holes = sorted_holes(&input.holes);
    let has_contributor_bonuses = input
        .bonus_awards
        .iter()
        .any(|b| b.bonus_mode == BonusMode::Contributor);

    let mut rows: Vec<IndividualScoreboardRow> = input
        .participants
        .iter()
        .map(|p| {
            let mut gross_strokes = 0;
            let mut net_strokes = 0;
            let mut stableford = 0;
            let mut holes_completed = 0;

            let hole_scores = holes
                .iter()
                .map(|hole| {
                    let card = lookup.card(p, hole);
                    if let (Some(gross), Some(net)) = (card.gross_strokes, card.net_strokes) {
                        gross_strokes += gross;
                        net_strokes += net;
                        stableford += card.points;
                        holes_completed += 1;
                    }
                    IndividualHoleScore {
                        hole_number: hole.hole_number,
                        par: hole.par,
                        stroke_index: hole.stroke_index,
                        gross_strokes: card.gross_strokes,
                        strokes_received: card.strokes_received,
                        net_strokes: card.net_strokes,
                        stableford: card.points,
                        display: card
                            .gross_strokes
                            .map(|g| ScoreDisplay::from_strokes(g, hole.par)),
                    }
                })
                .collect();

            let mut contributor_bonus_total = 0.0;
            let mut standalone_badges = Vec::new();
            for award in input
                .bonus_awards
                .iter()
                .filter(|b| {
                    b.round_participant_id.as_deref() == Some(p.round_participant_id.as_str())
                })
            {
                match award.bonus_mode {
                    BonusMode::Contributor => contributor_bonus_total += award.bonus_points,
                    BonusMode::Standalone => standalone_badges.push(StandaloneBadge {
                        competition_id: award.competition_id.clone(),
                        label: award.competition_name.clone(),
                        short_label: award.short_label(),
                        hole_number: award.hole_number,
                    }),
                }
            }

            IndividualScoreboardRow {
                round_participant_id: p.round_participant_id.clone(),
                person_id: p.person_id.clone(),
                display_name: p.display_name.clone(),
                playing_handicap: p.playing_handicap,
                hole_scores,
                gross_strokes,
                net_strokes,
                stableford,
                contributor_bonus_total,
                standalone_badges,
                total: f64::from(stableford) + contributor_bonus_total,
                holes_completed,
                rank: 0,
            }
        })
        .collect();

    sort_and_rank(
        &mut rows,
        |r| (r.stableford, r.gross_strokes),
        |r, rank| r.rank = rank,
    );

    IndividualScoreboardResult {
        rows,
        has_contributor_bonuses,
    }
}
