pub mod config;
pub mod score;
pub mod score_log;
pub mod status;
pub mod types;

pub use config::{
    AggregationConfig, BestBallConfig, BonusConfig, BonusMode, ChairConfig, CompetitionConfig,
    FormatType, HiLoConfig, LowestStrokesConfig, MatchPlayConfig, MatchWinsConfig, PlayerPairing,
    RumbleConfig, SixPointBasis, SixPointConfig, StablefordConfig, StrokeBasis, StrokePlayConfig,
    TeamPairing, WolfConfig,
};
pub use score::{ScoreDisplay, par_label};
pub use score_log::{ScoreEvent, latest_game_decisions, resolve_latest_scores};
pub use status::{RoundStatus, TournamentStatus, derive_tournament_status};
pub use types::{
    Competition, CompetitionInput, GameDecision, Group, GroupScope, Hole, Participant,
    ParticipantType, ResolvedScore, Team, sorted_holes,
};
