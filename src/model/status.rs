use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoundStatus {
    Draft,
    Scheduled,
    Open,
    Finalized,
}

/// Stored on the tournament but always derived from its rounds.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    Setup,
    Scheduled,
    Underway,
    Complete,
}

impl fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TournamentStatus::Setup => "Draft",
            TournamentStatus::Scheduled => "Awaiting Start",
            TournamentStatus::Underway => "Underway",
            TournamentStatus::Complete => "Finished",
        };
        write!(f, "{s}")
    }
}

#[must_use]
pub fn derive_tournament_status(round_statuses: &[RoundStatus]) -> TournamentStatus {
    if round_statuses.is_empty() {
        return TournamentStatus::Setup;
    }
    if round_statuses.iter().all(|s| *s == RoundStatus::Finalized) {
        return TournamentStatus::Complete;
    }
    if round_statuses
        .iter()
        .any(|s| matches!(s, RoundStatus::Open | RoundStatus::Finalized))
    {
        return TournamentStatus::Underway;
    }
    if round_statuses.contains(&RoundStatus::Scheduled) {
        return TournamentStatus::Scheduled;
    }
    TournamentStatus::Setup
}
