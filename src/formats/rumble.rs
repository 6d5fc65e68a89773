use ahash::RandomState;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::head_to_head::PlayerPoints;
use crate::model::{CompetitionInput, Hole, Participant, RumbleConfig, sorted_holes};
use crate::score::ScoreLookup;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RumbleHoleScore {
    pub hole_number: u32,
    pub player_points: Vec<PlayerPoints>,
    /// Scores counted on this hole; 0 when nobody in the group has a card.
    pub count_used: usize,
    pub group_contribution: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RumbleGroupResult {
    pub round_group_id: String,
    pub group_number: u32,
    pub group_name: Option<String>,
    pub team_id: String,
    pub team_name: String,
    pub hole_scores: Vec<RumbleHoleScore>,
    pub group_total: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RumbleTeamResult {
    pub team_id: String,
    pub team_name: String,
    pub group_results: Vec<RumbleGroupResult>,
    pub team_total: i32,
    pub points: f64,
    /// On the top total. Still true for every team in a tie, which scores 0.
    pub winner: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RumbleResult {
    pub team_results: Vec<RumbleTeamResult>,
    pub result_text: String,
}

/// How many of the group's scores count on a hole: 1 on 1-6, 2 on 7-12,
/// 3 on 13-17 and all 4 on the 18th.
#[must_use]
pub fn rumble_count_for_hole(hole_number: u32) -> usize {
    match hole_number {
        0..=6 => 1,
        7..=12 => 2,
        13..=17 => 3,
        _ => 4,
    }
}

fn score_group(
    members: &[&Participant],
    holes: &[Hole],
    lookup: &ScoreLookup<'_>) -> (Vec<RumbleHoleScore>, i32,
) {
    let mut group_total = 0;
    let hole_scores = holes
        .iter()
        .map(|hole| {
            let player_points: Vec<PlayerPoints> = members
                .iter()
                .map(|p| PlayerPoints {
                    round_participant_id: p.round_participant_id.clone(),
                    points: lookup.points(p, hole).unwrap_or(0),
                })
                .collect();

            let any_scored = members
                .iter()
                .any(|p| lookup.has(&p.round_participant_id, hole.hole_number));
            if !any_scored {
                return RumbleHoleScore {
                    hole_number: hole.hole_number,
                    player_points,
                    count_used: 0,
                    group_contribution: 0,
                };
            }

            let count_used = rumble_count_for_hole(hole.hole_number);
            let mut ordered: Vec<i32> = player_points.iter().map(|p| p.points).collect();
            ordered.sort_unstable_by(|a, b| b.cmp(a));
            let group_contribution: i32 = ordered.iter().take(count_used).sum();
            group_total += group_contribution;

            RumbleHoleScore {
                hole_number: hole.hole_number,
                player_points,
                count_used,
                group_contribution,
            }
        })
        .collect();
    (hole_scores, group_total)
}

/// Group totals roll up to teams; the single best team total takes
/// `points_per_win`. Every input team appears, in input order.
#[must_use]
pub fn calculate_rumble(input: &CompetitionInput, config: &RumbleConfig) -> RumbleResult {
    let lookup = ScoreLookup::new(&input.scores);
    let holes = sorted_holes(&input.holes);
    let by_id: HashMap<&str, &Participant, RandomState> = input
        .participants
        .iter()
        .map(|p| (p.round_participant_id.as_str(), p))
        .collect();

    let mut team_results: Vec<RumbleTeamResult> = input
        .teams
        .iter()
        .map(|t| RumbleTeamResult {
            team_id: t.team_id.clone(),
            team_name: t.name.clone(),
            group_results: Vec::new(),
            team_total: 0,
            points: 0.0,
            winner: false,
        })
        .collect();

    for group in &input.groups {
        let members: Vec<&Participant> = group
            .member_participant_ids
            .iter()
            .filter_map(|id| by_id.get(id.as_str()).copied())
            .collect();
        if members.is_empty() {
            continue;
        }

        let Some(team_idx) = input
            .teams
            .iter()
            .position(|t| group.member_participant_ids.iter().any(|id| t.has_member(id)))
        else {
            debug!("rumble: group {} has no team", group.round_group_id);
            continue;
        };

        let (hole_scores, group_total) = score_group(&members, &holes, &lookup);
        let entry = &mut team_results[team_idx];
        entry.team_total += group_total;
        entry.group_results.push(RumbleGroupResult {
            round_group_id: group.round_group_id.clone(),
            group_number: group.group_number,
            group_name: group.name.clone(),
            team_id: entry.team_id.clone(),
            team_name: entry.team_name.clone(),
            hole_scores,
            group_total,
        });
    }

    let max_total = team_results.iter().map(|t| t.team_total).max().unwrap_or(0).max(0);
    let top: Vec<usize> = team_results
        .iter()
        .enumerate()
        .filter(|(_, t)| t.team_total == max_total)
        .map(|(idx, _)| idx)
        .collect();
    let is_tie = top.len() > 1;

    for team in &mut team_results {
        team.winner = team.team_total == max_total;
        if team.winner && !is_tie {
            team.points = config.points_per_win;
        }
    }

    let result_text = match top.as_slice() {
        _ if team_results.is_empty() => "No teams".to_string(),
        [] => "No result".to_string(),
        [only] => {
            let winner = &team_results[*only];
            match team_results.iter().find(|t| t.team_id != winner.team_id) {
                Some(runner_up) => format!(
                    "{} wins {}-{}",
                    winner.team_name, winner.team_total, runner_up.team_total
                ),
                None => format!("{} wins {}", winner.team_name, winner.team_total),
            }
        }
        tied => {
            let names: Vec<&str> = tied
                .iter()
                .map(|&i| team_results[i].team_name.as_str())
                .collect();
            format!("Tied - {} ({max_total} pts each)", names.join(" & "))
        }
    };

    RumbleResult {
        team_results,
        result_text,
    }
}
