use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::EngineError;

fn default_points_per_win() -> f64 {
    1.0
}

fn default_points_per_half() -> f64 {
    0.5
}

fn default_bonus_points() -> f64 {
    1.0
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FormatType {
    Stableford,
    StrokePlay,
    MatchPlay,
    BestBall,
    HiLo,
    Rumble,
    Wolf,
    SixPoint,
    Chair,
    NearestPin,
    LongestDrive,
}

impl FormatType {
    pub const ALL: [FormatType; 11] = [
        Self::Stableford,
        Self::StrokePlay,
        Self::MatchPlay,
        Self::BestBall,
        Self::NearestPin,
        Self::LongestDrive,
        Self::Rumble,
        Self::HiLo,
        Self::Wolf,
        Self::SixPoint,
        Self::Chair,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Stableford => "Stableford",
            Self::StrokePlay => "Stroke Play",
            Self::MatchPlay => "Singles",
            Self::BestBall => "Best Ball",
            Self::HiLo => "Hi-Lo",
            Self::Rumble => "Rumble",
            Self::Wolf => "Wolf",
            Self::SixPoint => "Six Point",
            Self::Chair => "Chair",
            Self::NearestPin => "Nearest the Pin",
            Self::LongestDrive => "Longest Drive",
        }
    }

    #[must_use]
    pub fn is_team_format(self) -> bool {
        matches!(self, Self::BestBall | Self::HiLo | Self::Rumble)
    }

    /// Formats that carry pairings and win/half points.
    #[must_use]
    pub fn is_match_format(self) -> bool {
        matches!(
            self,
            Self::MatchPlay | Self::BestBall | Self::HiLo | Self::Rumble
        )
    }

    #[must_use]
    pub fn is_bonus_format(self) -> bool {
        matches!(self, Self::NearestPin | Self::LongestDrive)
    }
}

impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StrokeBasis {
    NetStrokes,
    GrossStrokes,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SixPointBasis {
    #[default]
    Stableford,
    Gross,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BonusMode {
    /// Badge only.
    #[default]
    Standalone,
    /// Adds `bonus_points` to the winner's scoreboard total.
    Contributor,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StablefordConfig {
    #[serde(default)]
    pub count_back: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StrokePlayConfig {
    pub scoring_basis: StrokeBasis,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPairing {
    pub player_a: String,
    pub player_b: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchPlayConfig {
    #[serde(default = "default_points_per_win")]
    pub points_per_win: f64,
    #[serde(default = "default_points_per_half")]
    pub points_per_half: f64,
    pub pairings: Vec<PlayerPairing>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamPairing {
    pub team_a: String,
    pub team_b: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BestBallConfig {
    #[serde(default = "default_points_per_win")]
    pub points_per_win: f64,
    #[serde(default = "default_points_per_half")]
    pub points_per_half: f64,
    pub pairings: Vec<TeamPairing>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HiLoConfig {
    #[serde(default = "default_points_per_win")]
    pub points_per_win: f64,
    #[serde(default = "default_points_per_half")]
    pub points_per_half: f64,
}

impl Default for HiLoConfig {
    fn default() -> Self {
        Self {
            points_per_win: default_points_per_win(),
            points_per_half: default_points_per_half(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RumbleConfig {
    #[serde(default = "default_points_per_win")]
    pub points_per_win: f64,
}

impl Default for RumbleConfig {
    fn default() -> Self {
        Self {
            points_per_win: default_points_per_win(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct WolfConfig {}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SixPointConfig {
    #[serde(default)]
    pub scoring_basis: SixPointBasis,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ChairConfig {}

/// Nearest-the-pin and longest-drive share one shape.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BonusConfig {
    pub hole_number: u32,
    #[serde(default)]
    pub bonus_mode: BonusMode,
    #[serde(default = "default_bonus_points")]
    pub bonus_points: f64,
}

/// Persisted as `{ "formatType": "...", "config": { ... } }`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "formatType", content = "config", rename_all = "snake_case")]
pub enum CompetitionConfig {
    Stableford(StablefordConfig),
    StrokePlay(StrokePlayConfig),
    MatchPlay(MatchPlayConfig),
    BestBall(BestBallConfig),
    HiLo(HiLoConfig),
    Rumble(RumbleConfig),
    Wolf(WolfConfig),
    SixPoint(SixPointConfig),
    Chair(ChairConfig),
    NearestPin(BonusConfig),
    LongestDrive(BonusConfig),
}

impl CompetitionConfig {
    /// Builds a config from the stored format tag and its config object.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for an unknown format tag or a config object
    /// that does not fit the format.
    pub fn from_parts(format_type: &str, config: serde_json::Value) -> Result<Self, EngineError> {
        let tagged = serde_json::json!({ "formatType": format_type, "config": config });
        serde_json::from_value(tagged)
            .map_err(|e| EngineError::InvalidConfig(format!("{format_type}: {e}")))
    }

    #[must_use]
    pub fn format_type(&self) -> FormatType {
        match self {
            Self::Stableford(_) => FormatType::Stableford,
            Self::StrokePlay(_) => FormatType::StrokePlay,
            Self::MatchPlay(_) => FormatType::MatchPlay,
            Self::BestBall(_) => FormatType::BestBall,
            Self::HiLo(_) => FormatType::HiLo,
            Self::Rumble(_) => FormatType::Rumble,
            Self::Wolf(_) => FormatType::Wolf,
            Self::SixPoint(_) => FormatType::SixPoint,
            Self::Chair(_) => FormatType::Chair,
            Self::NearestPin(_) => FormatType::NearestPin,
            Self::LongestDrive(_) => FormatType::LongestDrive,
        }
    }

    #[must_use]
    pub fn bonus(&self) -> Option<&BonusConfig> {
        match self {
            Self::NearestPin(c) | Self::LongestDrive(c) => Some(c),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LowestStrokesConfig {
    pub scoring_basis: StrokeBasis,
}

/// When set, these replace the points each match awarded.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchWinsConfig {
    #[serde(default)]
    pub points_per_win: Option<f64>,
    #[serde(default)]
    pub points_per_half: Option<f64>,
}

/// How round results roll up into tournament standings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "method", content = "config", rename_all = "snake_case")]
pub enum AggregationConfig {
    SumStableford,
    LowestStrokes(LowestStrokesConfig),
    MatchWins(MatchWinsConfig),
}

impl AggregationConfig {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::SumStableford => "Total Stableford Points",
            Self::LowestStrokes(_) => "Lowest Total Strokes",
            Self::MatchWins(_) => "Match Wins",
        }
    }
}
