use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::head_to_head::{MatchStatus, MatchTracker, PlayerPoints, TeamRef, Verdict};
use crate::error::EngineError;
use crate::model::{BestBallConfig, CompetitionInput, Hole, Participant, Team, sorted_holes};
use crate::score::ScoreLookup;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BestBallHoleResult {
    pub hole_number: u32,
    pub team_a_best_points: i32,
    pub team_b_best_points: i32,
    pub team_a_player_points: Vec<PlayerPoints>,
    pub team_b_player_points: Vec<PlayerPoints>,
    pub hole_winner: Verdict,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BestBallMatchResult {
    pub team_a: TeamRef,
    pub team_b: TeamRef,
    pub hole_results: Vec<BestBallHoleResult>,
    #[serde(flatten)]
    pub status: MatchStatus,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BestBallResult {
    pub matches: Vec<BestBallMatchResult>,
}

pub(crate) fn team_ref(team: &Team) -> TeamRef {
    TeamRef {
        team_id: team.team_id.clone(),
        name: team.name.clone(),
        tournament_team_id: team.tournament_team_id.clone(),
    }
}

/// Team members present in the input, in roster order.
pub(crate) fn present_members<'a>(
    team: &Team,
    by_id: &HashMap<&str, &'a Participant, RandomState>,
) -> Vec<&'a Participant> {
    team.member_participant_ids
        .iter()
        .filter_map(|id| by_id.get(id.as_str()).copied())
        .collect()
}

/// # Errors
///
/// Returns `InvalidReference` if a pairing names a team that is not in the
/// input.
pub fn calculate_best_ball(
    input: &CompetitionInput,
    config: &BestBallConfig,
) -> Result<BestBallResult, EngineError> {
    let lookup = ScoreLookup::new(&input.scores);
    let holes = sorted_holes(&input.holes);
    let teams: HashMap<&str, &Team, RandomState> =
        input.teams.iter().map(|t| (t.team_id.as_str(), t)).collect();
    let by_id: HashMap<&str, &Participant, RandomState> = input
        .participants
        .iter()
        .map(|p| (p.round_participant_id.as_str(), p))
        .collect();

    let matches = config
        .pairings
        .iter()
        .map(|pairing| {
            let (Some(team_a), Some(team_b)) = (
                teams.get(pairing.team_a.as_str()),
                teams.get(pairing.team_b.as_str()),
            ) else {
                return Err(EngineError::InvalidReference(format!(
                    "best ball pairing {} v {} references an unknown team",
                    pairing.team_a, pairing.team_b
                )));
            };
            let members_a = present_members(team_a, &by_id);
            let members_b = present_members(team_b, &by_id);
            Ok(calculate_best_ball_match(
                team_a, &members_a, team_b, &members_b, &holes, &lookup, config,
            ))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(BestBallResult { matches })
}

fn side_points(
    members: &[&Participant],
    hole: &Hole,
    lookup: &ScoreLookup<'_>,
) -> Vec<PlayerPoints> {
    members
        .iter()
        .map(|p| PlayerPoints {
            round_participant_id: p.round_participant_id.clone(),
            points: lookup.points(p, hole).unwrap_or(0),
        })
        .collect()
}

fn calculate_best_ball_match(
    team_a: &Team,
    members_a: &[&Participant],
    team_b: &Team,
    members_b: &[&Participant],
    holes: &[Hole],
    lookup: &ScoreLookup<'_>,
    config: &BestBallConfig,
) -> BestBallMatchResult {
    let mut tracker = MatchTracker::new(holes.len());
    let mut hole_results = Vec::new();

    for hole in holes {
        let a_scored = members_a
            .iter()
            .any(|p| lookup.has(&p.round_participant_id, hole.hole_number));
        let b_scored = members_b
            .iter()
            .any(|p| lookup.has(&p.round_participant_id, hole.hole_number));
        if !a_scored || !b_scored {
            continue;
        }

        let team_a_player_points = side_points(members_a, hole, lookup);
        let team_b_player_points = side_points(members_b, hole, lookup);
        let team_a_best_points = team_a_player_points.iter().map(|p| p.points).max().unwrap_or(0);
        let team_b_best_points = team_b_player_points.iter().map(|p| p.points).max().unwrap_or(0);

        let hole_winner = Verdict::compare(team_a_best_points, team_b_best_points);
        tracker.record(hole_winner);
        hole_results.push(BestBallHoleResult {
            hole_number: hole.hole_number,
            team_a_best_points,
            team_b_best_points,
            team_a_player_points,
            team_b_player_points,
            hole_winner,
        });
    }

    BestBallMatchResult {
        team_a: team_ref(team_a),
        team_b: team_ref(team_b),
        hole_results,
        status: tracker.finish(
            &team_a.name,
            &team_b.name,
            config.points_per_win,
            config.points_per_half,
        ),
    }
}
