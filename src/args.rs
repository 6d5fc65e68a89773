pub mod types;
pub mod validation;

use clap::Parser;

pub use types::{Args, CleanArgs};

use crate::request::EngineRequest;

/// # Errors
///
/// Will return `Err` if the input json is not an engine request
pub fn args_checks() -> Result<CleanArgs, String> {
    let args = Args::parse();
    let request = EngineRequest::from_value(args.input).map_err(|e| e.to_string())?;
    Ok(CleanArgs {
        request,
        pretty: args.pretty,
    })
}
