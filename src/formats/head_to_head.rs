use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Outcome of a hole, a sub-match or a whole match between side A and side B.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    A,
    B,
    #[serde(rename = "halved")]
    Halved,
}

impl Verdict {
    /// Higher score wins.
    #[must_use]
    pub fn compare(score_a: i32, score_b: i32) -> Self {
        match score_a.cmp(&score_b) {
            Ordering::Greater => Self::A,
            Ordering::Less => Self::B,
            Ordering::Equal => Self::Halved,
        }
    }

    /// (points for A, points for B)
    #[must_use]
    pub fn award(self, points_per_win: f64, points_per_half: f64) -> (f64, f64) {
        match self {
            Self::A => (points_per_win, 0.0),
            Self::B => (0.0, points_per_win),
            Self::Halved => (points_per_half, points_per_half),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRef {
    pub round_participant_id: String,
    pub display_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamRef {
    pub team_id: String,
    pub name: String,
    #[serde(default)]
    pub tournament_team_id: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPoints {
    pub round_participant_id: String,
    pub points: i32,
}

/// Status and award of a hole-by-hole match. Flattened into every match
/// result of the head-to-head formats.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchStatus {
    /// Positive when A leads, negative when B leads.
    pub match_score: i32,
    pub holes_completed: u32,
    pub total_holes: u32,
    pub is_decided: bool,
    /// Completed holes at the point the match could no longer be caught.
    pub decided_at: Option<u32>,
    pub result_text: String,
    pub winner: Option<Verdict>,
    pub points_a: f64,
    pub points_b: f64,
}

/// Running state of a match play style contest.
///
/// Once the leader is more holes up than there are holes left the result
/// is frozen; holes recorded after that still move `match_score` but never
/// the winner or the reported margin.
#[derive(Debug, Clone)]
pub struct MatchTracker {
    total_holes: u32,
    match_score: i32,
    holes_completed: u32,
    decided: Option<(u32, i32)>,
}

impl MatchTracker {
    #[must_use]
    pub fn new(total_holes: usize) -> Self {
        Self {
            total_holes: u32::try_from(total_holes).unwrap_or(u32::MAX),
            match_score: 0,
            holes_completed: 0,
            decided: None,
        }
    }

    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::A => self.match_score += 1,
            Verdict::B => self.match_score -= 1,
            Verdict::Halved => {}
        }
        self.holes_completed += 1;

        let holes_remaining = self.total_holes.saturating_sub(self.holes_completed);
        if self.decided.is_none() && self.match_score.unsigned_abs() > holes_remaining {
            self.decided = Some((self.holes_completed, self.match_score));
        }
    }

    #[must_use]
    pub fn holes_completed(&self) -> u32 {
        self.holes_completed
    }

    #[must_use]
    pub fn finish(
        &self,
        name_a: &str,
        name_b: &str,
        points_per_win: f64,
        points_per_half: f64,
    ) -> MatchStatus {
        let all_played = self.holes_completed >= self.total_holes;

        let (winner, result_text) = match self.decided {
            Some((decided_at, margin)) => {
                let verdict = if margin > 0 { Verdict::A } else { Verdict::B };
                let name = if margin > 0 { name_a } else { name_b };
                let holes_remaining = self.total_holes.saturating_sub(decided_at);
                let text = if holes_remaining > 0 {
                    format!("{name} wins {}&{holes_remaining}", margin.abs())
                } else {
                    format!("{name} wins {} UP", margin.abs())
                };
                (Some(verdict), text)
            }
            // Level after every hole; a lead at the end is always caught above.
            None if all_played => (Some(Verdict::Halved), "All Square".to_string()),
            None => {
                let text = match self.match_score.cmp(&0) {
                    Ordering::Greater => format!("{name_a} {} UP", self.match_score),
                    Ordering::Less => format!("{name_b} {} UP", -self.match_score),
                    Ordering::Equal => "All Square".to_string(),
                };
                (None, text)
            }
        };

        let (points_a, points_b) =
            winner.map_or((0.0, 0.0), |v| v.award(points_per_win, points_per_half));

        MatchStatus {
            match_score: self.match_score,
            holes_completed: self.holes_completed,
            total_holes: self.total_holes,
            is_decided: winner.is_some(),
            decided_at: self.decided.map(|(at, _)| at),
            result_text,
            winner,
            points_a,
            points_b,
        }
    }
}
