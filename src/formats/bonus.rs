use serde::{Deserialize, Serialize};

use crate::model::{BonusMode, Competition, FormatType};

/// Nearest-the-pin and longest-drive winners are recorded by hand during the
/// round; the calculator has nothing to compute for them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BonusHole {
    pub competition_id: String,
    pub competition_name: String,
    pub format_type: FormatType,
    pub hole_number: u32,
}

/// A recorded award, as the scoreboard sees it. `round_participant_id` is
/// `None` until a winner has been picked.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BonusAwardInput {
    pub competition_id: String,
    pub competition_name: String,
    pub format_type: FormatType,
    pub bonus_mode: BonusMode,
    pub bonus_points: f64,
    pub hole_number: u32,
    #[serde(default)]
    pub round_participant_id: Option<String>,
}

impl BonusAwardInput {
    /// "NTP H3", "LD H7"
    #[must_use]
    pub fn short_label(&self) -> String {
        let prefix = match self.format_type {
            FormatType::LongestDrive => "LD",
            _ => "NTP",
        };
        format!("{prefix} H{}", self.hole_number)
    }
}

#[must_use]
pub fn format_bonus_label(format_type: FormatType, hole_number: u32) -> String {
    format!("{} - Hole {hole_number}", format_type.label())
}

/// The bonus competitions of a round and the hole each is played on.
/// Competitions without a hole are left out.
#[must_use]
pub fn bonus_holes(competitions: &[Competition]) -> Vec<BonusHole> {
    competitions
        .iter()
        .filter_map(|c| {
            let bonus = c.config.bonus()?;
            (bonus.hole_number > 0).then(|| BonusHole {
                competition_id: c.id.clone(),
                competition_name: c.name.clone(),
                format_type: c.config.format_type(),
                hole_number: bonus.hole_number,
            })
        })
        .collect()
}
