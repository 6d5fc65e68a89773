pub mod leaderboard;
pub mod scoreboard;
pub mod standings;

pub use leaderboard::{
    RoundContribution, TournamentLeaderboardInput, TournamentLeaderboardResult,
    TournamentLeaderboardRoundInput, TournamentLeaderboardRow, calculate_tournament_leaderboard,
};
pub use scoreboard::{
    IndividualHoleScore, IndividualScoreboardInput, IndividualScoreboardResult,
    IndividualScoreboardRow, StandaloneBadge, calculate_individual_scoreboard,
};
pub use standings::{
    ContributorBonusAward, RoundCompetitionData, RoundValue, SortDirection, StandingEntry,
    StandingsResult, calculate_standings,
};
