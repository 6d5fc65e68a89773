use clap::Parser;
use serde_json::Value;

use crate::request::EngineRequest;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON request: a competition, scoreboard, leaderboard, standings,
    /// bonus_holes or tournament_status document with a "kind" field.
    #[arg(
        short = 'i',
        long,
        value_name = "INPUT_JSON",
        value_parser = crate::args::validation::check_readable_file_and_json
    )]
    pub input: Value,
    /// Pretty-print the result.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub request: EngineRequest,
    pub pretty: bool,
}
