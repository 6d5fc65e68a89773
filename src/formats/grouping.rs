use ahash::RandomState;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{CompetitionResult, calculate_competition_results};
use crate::error::EngineError;
use crate::model::{CompetitionInput, Group, GroupScope};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupCompetitionResult {
    pub group_id: String,
    pub group_number: u32,
    pub group_name: Option<String>,
    pub result: CompetitionResult,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum GroupedCompetitionResult {
    All { result: CompetitionResult },
    WithinGroup { results: Vec<GroupCompetitionResult> },
}

impl GroupedCompetitionResult {
    /// Every calculated result, whatever the scope.
    #[must_use]
    pub fn results(&self) -> Vec<&CompetitionResult> {
        match self {
            Self::All { result } => vec![result],
            Self::WithinGroup { results } => results.iter().map(|g| &g.result).collect(),
        }
    }
}

/// The slice of `input` that belongs to one group: its members, their
/// scores and decisions, and every team with at least one member in it.
#[must_use]
pub fn filter_input_for_group(input: &CompetitionInput, group: &Group) -> CompetitionInput {
    let members: HashSet<&str, RandomState> =
        group.member_participant_ids.iter().map(String::as_str).collect();

    CompetitionInput {
        competition: input.competition.clone(),
        holes: input.holes.clone(),
        participants: input
            .participants
            .iter()
            .filter(|p| members.contains(p.round_participant_id.as_str()))
            .cloned()
            .collect(),
        scores: input
            .scores
            .iter()
            .filter(|s| members.contains(s.round_participant_id.as_str()))
            .cloned()
            .collect(),
        teams: input
            .teams
            .iter()
            .filter(|t| t.member_participant_ids.iter().any(|id| members.contains(id.as_str())))
            .cloned()
            .collect(),
        groups: vec![group.clone()],
        game_decisions: input
            .game_decisions
            .iter()
            .filter(|d| members.contains(d.wolf_player_id.as_str()))
            .cloned()
            .collect(),
    }
}

/// Runs the competition once over everyone, or once per group for a
/// `within_group` competition. A group whose calculation fails is logged
/// and left out.
///
/// # Errors
///
/// Only an `all`-scope calculation can fail; its error is returned as is.
pub fn calculate_grouped_results(
    input: &CompetitionInput,
) -> Result<GroupedCompetitionResult, EngineError> {
    if input.competition.group_scope != GroupScope::WithinGroup || input.groups.is_empty() {
        return Ok(GroupedCompetitionResult::All {
            result: calculate_competition_results(input)?,
        });
    }

    let mut results = Vec::with_capacity(input.groups.len());
    for group in &input.groups {
        let group_input = filter_input_for_group(input, group);
        match calculate_competition_results(&group_input) {
            Ok(result) => results.push(GroupCompetitionResult {
                group_id: group.round_group_id.clone(),
                group_number: group.group_number,
                group_name: group.name.clone(),
                result,
            }),
            Err(e) => warn!(
                "competition {} dropped group {}: {e}",
                input.competition.id, group.round_group_id
            ),
        }
    }

    Ok(GroupedCompetitionResult::WithinGroup { results })
}
