pub mod best_ball;
pub mod bonus;
pub mod chair;
pub mod grouping;
pub mod head_to_head;
pub mod hi_lo;
pub mod match_play;
pub mod rumble;
pub mod six_point;
pub mod stableford;
pub mod stroke_play;
pub mod wolf;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::model::{CompetitionConfig, CompetitionInput, FormatType};

pub use best_ball::{BestBallMatchResult, BestBallResult, calculate_best_ball};
pub use bonus::{BonusAwardInput, BonusHole, bonus_holes, format_bonus_label};
pub use chair::{ChairResult, calculate_chair};
pub use grouping::{
    GroupCompetitionResult, GroupedCompetitionResult, calculate_grouped_results,
    filter_input_for_group,
};
pub use head_to_head::{MatchStatus, MatchTracker, PlayerPoints, PlayerRef, TeamRef, Verdict};
pub use hi_lo::{HiLoMatchResult, HiLoResult, calculate_hi_lo};
pub use match_play::{MatchResult, MatchPlayResult, calculate_match_play};
pub use rumble::{RumbleResult, calculate_rumble, rumble_count_for_hole};
pub use six_point::{SixPointResult, calculate_six_point, distribute_points};
pub use stableford::{StablefordResult, calculate_stableford, count_back_windows};
pub use stroke_play::{StrokePlayResult, calculate_stroke_play};
pub use wolf::{WolfOutcome, WolfResult, calculate_wolf, wolf_index_for_hole};

/// A calculated competition, tagged like its config.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", content = "result", rename_all = "snake_case")]
pub enum CompetitionResult {
    Stableford(StablefordResult),
    StrokePlay(StrokePlayResult),
    MatchPlay(MatchPlayResult),
    BestBall(BestBallResult),
    HiLo(HiLoResult),
    Rumble(RumbleResult),
    Wolf(WolfResult),
    SixPoint(SixPointResult),
    Chair(ChairResult),
    NearestPin,
    LongestDrive,
}

impl CompetitionResult {
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
            Self::NearestPin => FormatType::NearestPin,
            Self::LongestDrive => FormatType::LongestDrive,
        }
    }
}

/// Runs the calculator for the competition's format over the whole input.
/// Grouping is [`calculate_grouped_results`]' job.
///
/// # Errors
///
/// Propagates the calculator's `InvalidReference` or `CardinalityViolation`.
pub fn calculate_competition_results(
    input: &CompetitionInput,
) -> Result<CompetitionResult, EngineError> {
    let result = match &input.competition.config {
        CompetitionConfig::Stableford(config) => {
            CompetitionResult::Stableford(calculate_stableford(input, config))
        }
        CompetitionConfig::StrokePlay(config) => {
            CompetitionResult::StrokePlay(calculate_stroke_play(input, config))
        }
        CompetitionConfig::MatchPlay(config) => {
            CompetitionResult::MatchPlay(calculate_match_play(input, config)?)
        }
        CompetitionConfig::BestBall(config) => {
            CompetitionResult::BestBall(calculate_best_ball(input, config)?)
        }
        CompetitionConfig::HiLo(config) => CompetitionResult::HiLo(calculate_hi_lo(input, config)?),
        CompetitionConfig::Rumble(config) => {
            CompetitionResult::Rumble(calculate_rumble(input, config))
        }
        CompetitionConfig::Wolf(_) => CompetitionResult::Wolf(calculate_wolf(input)?),
        CompetitionConfig::SixPoint(config) => {
            CompetitionResult::SixPoint(calculate_six_point(input, config)?)
        }
        CompetitionConfig::Chair(_) => CompetitionResult::Chair(calculate_chair(input)?),
        // award based, nothing to compute
        CompetitionConfig::NearestPin(_) => CompetitionResult::NearestPin,
        CompetitionConfig::LongestDrive(_) => CompetitionResult::LongestDrive,
    };
    Ok(result)
}
