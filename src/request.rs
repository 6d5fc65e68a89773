use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::aggregate::{
    ContributorBonusAward, IndividualScoreboardInput, RoundCompetitionData,
    TournamentLeaderboardInput, calculate_individual_scoreboard, calculate_standings,
    calculate_tournament_leaderboard,
};
use crate::error::EngineError;
use crate::formats::{bonus_holes, calculate_grouped_results};
use crate::model::{
    AggregationConfig, Competition, CompetitionInput, ParticipantType, RoundStatus,
    derive_tournament_status,
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StandingsRequest {
    pub aggregation: AggregationConfig,
    pub participant_type: ParticipantType,
    pub rounds: Vec<RoundCompetitionData>,
    #[serde(default)]
    pub contributor_bonuses: Vec<ContributorBonusAward>,
}

/// One engine call, as read from a JSON document with a `kind` field.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EngineRequest {
    Competition(CompetitionInput),
    Scoreboard(IndividualScoreboardInput),
    Leaderboard(TournamentLeaderboardInput),
    Standings(StandingsRequest),
    #[serde(rename_all = "camelCase")]
    BonusHoles { competitions: Vec<Competition> },
    #[serde(rename_all = "camelCase")]
    TournamentStatus { round_statuses: Vec<RoundStatus> },
}

impl EngineRequest {
    /// # Errors
    ///
    /// Returns `Parse` if the document is not a request.
    pub fn from_value(value: Value) -> Result<Self, EngineError> {
        Ok(serde_json::from_value(value)?)
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Competition(_) => "competition",
            Self::Scoreboard(_) => "scoreboard",
            Self::Leaderboard(_) => "leaderboard",
            Self::Standings(_) => "standings",
            Self::BonusHoles { .. } => "bonus_holes",
            Self::TournamentStatus { .. } => "tournament_status",
        }
    }
}

/// Runs a request and returns its result as JSON.
///
/// # Errors
///
/// Returns whatever the calculation fails with.
pub fn run_request(request: &EngineRequest) -> Result<Value, EngineError> {
    let value = match request {
        EngineRequest::Competition(input) => {
            serde_json::to_value(calculate_grouped_results(input)?)?
        }
        EngineRequest::Scoreboard(input) => {
            serde_json::to_value(calculate_individual_scoreboard(input))?
        }
        EngineRequest::Leaderboard(input) => {
            serde_json::to_value(calculate_tournament_leaderboard(input))?
        }
        EngineRequest::Standings(req) => serde_json::to_value(calculate_standings(
            &req.aggregation,
            &req.rounds,
            req.participant_type,
            &req.contributor_bonuses,
        ))?,
        EngineRequest::BonusHoles { competitions } => {
            serde_json::to_value(bonus_holes(competitions))?
        }
        EngineRequest::TournamentStatus { round_statuses } => {
            let status = derive_tournament_status(round_statuses);
            serde_json::json!({ "status": status, "label": status.to_string() })
        }
    };
    Ok(value)
}
