use serde::{Deserialize, Serialize};

use crate::model::config::CompetitionConfig;
use crate::score::handicap::get_playing_handicap;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Hole {
    pub hole_number: u32,
    pub par: i32,
    pub stroke_index: i32,
}

/// Holes in playing order. Every calculator walks the card this way.
#[must_use]
pub fn sorted_holes(holes: &[Hole]) -> Vec<Hole> {
    let mut sorted = holes.to_vec();
    sorted.sort_by_key(|h| h.hole_number);
    sorted
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub round_participant_id: String,
    pub person_id: String,
    pub display_name: String,
    /// Already resolved from the override cascade.
    pub effective_handicap: f64,
    /// `effective_handicap` rounded and clamped to 0..=54.
    pub playing_handicap: i32,
    #[serde(default)]
    pub round_group_id: Option<String>,
}

impl Participant {
    #[must_use]
    pub fn new(
        round_participant_id: impl Into<String>,
        person_id: impl Into<String>,
        display_name: impl Into<String>,
        effective_handicap: f64,
    ) -> Self {
        Self {
            round_participant_id: round_participant_id.into(),
            person_id: person_id.into(),
            display_name: display_name.into(),
            effective_handicap,
            playing_handicap: get_playing_handicap(effective_handicap),
            round_group_id: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub round_group_id: String,
    pub group_number: u32,
    #[serde(default)]
    pub name: Option<String>,
    pub member_participant_ids: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub team_id: String,
    pub name: String,
    #[serde(default)]
    pub tournament_team_id: Option<String>,
    pub member_participant_ids: Vec<String>,
}

impl Team {
    /// Identity that survives across rounds: the tournament team when known.
    #[must_use]
    pub fn standings_id(&self) -> &str {
        self.tournament_team_id.as_deref().unwrap_or(&self.team_id)
    }

    #[must_use]
    pub fn has_member(&self, round_participant_id: &str) -> bool {
        self.member_participant_ids
            .iter()
            .any(|id| id == round_participant_id)
    }
}

/// The latest entry for a (participant, hole) pair.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedScore {
    pub round_participant_id: String,
    pub hole_number: u32,
    pub strokes: i32,
}

impl ResolvedScore {
    #[must_use]
    pub fn new(round_participant_id: impl Into<String>, hole_number: u32, strokes: i32) -> Self {
        Self {
            round_participant_id: round_participant_id.into(),
            hole_number,
            strokes,
        }
    }
}

/// Wolf's declaration for a hole. `partner_player_id: None` is a lone wolf.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameDecision {
    pub hole_number: u32,
    pub wolf_player_id: String,
    #[serde(default)]
    pub partner_player_id: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GroupScope {
    #[default]
    All,
    WithinGroup,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantType {
    Individual,
    Team,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    pub id: String,
    pub name: String,
    pub config: CompetitionConfig,
    #[serde(default)]
    pub group_scope: GroupScope,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionInput {
    pub competition: Competition,
    pub holes: Vec<Hole>,
    pub participants: Vec<Participant>,
    pub scores: Vec<ResolvedScore>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub groups: Vec<Group>,
    /// Only read by wolf.
    #[serde(default)]
    pub game_decisions: Vec<GameDecision>,
}
