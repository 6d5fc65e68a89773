use ahash::RandomState;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::best_ball::team_ref;
use super::head_to_head::{PlayerPoints, PlayerRef, TeamRef, Verdict};
use crate::error::EngineError;
use crate::model::{CompetitionInput, Group, HiLoConfig, Hole, Participant, Team, sorted_holes};
use crate::score::ScoreLookup;

const HI_LO_GROUP_SIZE: usize = 4;

/// High ball or low ball on one hole.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubMatch {
    pub team_a_score: i32,
    pub team_b_score: i32,
    pub winner: Verdict,
    pub points_a: f64,
    pub points_b: f64,
}

impl SubMatch {
    fn play(team_a_score: i32, team_b_score: i32, config: &HiLoConfig) -> Self {
        let winner = Verdict::compare(team_a_score, team_b_score);
        let (points_a, points_b) = winner.award(config.points_per_win, config.points_per_half);
        Self {
            team_a_score,
            team_b_score,
            winner,
            points_a,
            points_b,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HiLoHoleResult {
    pub hole_number: u32,
    pub team_a_player_points: Vec<PlayerPoints>,
    pub team_b_player_points: Vec<PlayerPoints>,
    pub high_ball: SubMatch,
    pub low_ball: SubMatch,
    pub hole_points_a: f64,
    pub hole_points_b: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HiLoMatchResult {
    pub team_a: TeamRef,
    pub team_b: TeamRef,
    pub team_a_players: Vec<PlayerRef>,
    pub team_b_players: Vec<PlayerRef>,
    pub hole_results: Vec<HiLoHoleResult>,
    pub total_points_a: f64,
    pub total_points_b: f64,
    pub holes_completed: u32,
    pub total_holes: u32,
    pub result_text: String,
    /// Only set once every hole has been played.
    pub winner: Option<Verdict>,
    pub points_a: f64,
    pub points_b: f64,
    pub group_id: String,
    pub group_name: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HiLoResult {
    pub matches: Vec<HiLoMatchResult>,
}

/// 2 -> "2", 2.5 -> "2.5"
pub(crate) fn format_points(points: f64) -> String {
    if points.fract() == 0.0 {
        format!("{points:.0}")
    } else {
        format!("{points}")
    }
}

/// One match per group, between the first two teams found among the
/// group's members.
///
/// # Errors
///
/// Returns `CardinalityViolation` when a group with members present does not
/// have exactly four of them.
pub fn calculate_hi_lo(
    input: &CompetitionInput,
    config: &HiLoConfig,
) -> Result<HiLoResult, EngineError> {
    let lookup = ScoreLookup::new(&input.scores);
    let holes = sorted_holes(&input.holes);
    let by_id: HashMap<&str, &Participant, RandomState> = input
        .participants
        .iter()
        .map(|p| (p.round_participant_id.as_str(), p))
        .collect();

    let mut matches = Vec::new();
    for group in &input.groups {
        let members: Vec<&Participant> = group
            .member_participant_ids
            .iter()
            .filter_map(|id| by_id.get(id.as_str()).copied())
            .collect();
        if members.is_empty() {
            debug!("hi-lo: group {} has no participants", group.round_group_id);
            continue;
        }
        if members.len() != HI_LO_GROUP_SIZE {
            return Err(EngineError::cardinality("Hi-Lo", HI_LO_GROUP_SIZE, members.len()));
        }

        // team -> members, in order of first appearance
        let mut sides: Vec<(&Team, Vec<&Participant>)> = Vec::new();
        for member in members {
            let Some(team) = input.teams.iter().find(|t| t.has_member(&member.round_participant_id))
            else {
                continue;
            };
            match sides.iter_mut().find(|(t, _)| t.team_id == team.team_id) {
                Some((_, list)) => list.push(member),
                None => sides.push((team, vec![member])),
            }
        }
        if sides.len() < 2 {
            debug!("hi-lo: group {} does not hold two teams", group.round_group_id);
            continue;
        }

        let (team_a, members_a) = &sides[0];
        let (team_b, members_b) = &sides[1];
        matches.push(calculate_hi_lo_match(
            group, team_a, members_a, team_b, members_b, &holes, &lookup, config,
        ));
    }

    Ok(HiLoResult { matches })
}

fn side_points(
    members: &[&Participant],
    hole: &Hole,
    lookup: &ScoreLookup<'_>,
) -> Option<Vec<PlayerPoints>> {
    members
        .iter()
        .map(|p| {
            lookup.points(p, hole).map(|points| PlayerPoints {
                round_participant_id: p.round_participant_id.clone(),
                points,
            })
        })
        .collect()
}

fn best(side: &[PlayerPoints]) -> i32 {
    side.iter().map(|p| p.points).max().unwrap_or(0)
}

fn worst(side: &[PlayerPoints]) -> i32 {
    side.iter().map(|p| p.points).min().unwrap_or(0)
}

fn player_refs(members: &[&Participant]) -> Vec<PlayerRef> {
    members
        .iter()
        .map(|p| PlayerRef {
            round_participant_id: p.round_participant_id.clone(),
            display_name: p.display_name.clone(),
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn calculate_hi_lo_match(
    group: &Group,
    team_a: &Team,
    members_a: &[&Participant],
    team_b: &Team,
    members_b: &[&Participant],
    holes: &[Hole],
    lookup: &ScoreLookup<'_>,
    config: &HiLoConfig,
) -> HiLoMatchResult {
    let mut hole_results = Vec::new();
    let mut total_points_a = 0.0;
    let mut total_points_b = 0.0;

    for hole in holes {
        // every member of both sides must have a card
        let (Some(team_a_player_points), Some(team_b_player_points)) = (
            side_points(members_a, hole, lookup),
            side_points(members_b, hole, lookup),
        ) else {
            continue;
        };

        let high_ball = SubMatch::play(
            best(&team_a_player_points),
            best(&team_b_player_points),
            config,
        );
        let low_ball = SubMatch::play(
            worst(&team_a_player_points),
            worst(&team_b_player_points),
            config,
        );
        let hole_points_a = high_ball.points_a + low_ball.points_a;
        let hole_points_b = high_ball.points_b + low_ball.points_b;
        total_points_a += hole_points_a;
        total_points_b += hole_points_b;

        hole_results.push(HiLoHoleResult {
            hole_number: hole.hole_number,
            team_a_player_points,
            team_b_player_points,
            high_ball,
            low_ball,
            hole_points_a,
            hole_points_b,
        });
    }

    let holes_completed = u32::try_from(hole_results.len()).unwrap_or(u32::MAX);
    let total_holes = u32::try_from(holes.len()).unwrap_or(u32::MAX);
    // a match with no holes to play is never decided
    let is_complete = total_holes > 0 && holes_completed == total_holes;

    let leader = if total_points_a > total_points_b {
        Verdict::A
    } else if total_points_b > total_points_a {
        Verdict::B
    } else {
        Verdict::Halved
    };
    let score = |x: f64, y: f64| format!("{}-{}", format_points(x), format_points(y));
    let verb = if is_complete { "wins" } else { "leads" };
    let result_text = match leader {
        _ if holes_completed == 0 => "Not started".to_string(),
        Verdict::A => format!("{} {verb} {}", team_a.name, score(total_points_a, total_points_b)),
        Verdict::B => format!("{} {verb} {}", team_b.name, score(total_points_b, total_points_a)),
        Verdict::Halved => format!("All Square {}", score(total_points_a, total_points_b)),
    };

    let winner = is_complete.then_some(leader);
    let (points_a, points_b) =
        winner.map_or((0.0, 0.0), |v| v.award(config.points_per_win, config.points_per_half));

    HiLoMatchResult {
        team_a: team_ref(team_a),
        team_b: team_ref(team_b),
        team_a_players: player_refs(members_a),
        team_b_players: player_refs(members_b),
        hole_results,
        total_points_a,
        total_points_b,
        holes_completed,
        total_holes,
        result_text,
        winner,
        points_a,
        points_b,
        group_id: group.round_group_id.clone(),
        group_name: group.name.clone(),
    }
}
