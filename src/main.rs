use anyhow::{Context, anyhow};
use log::info;
use rusty_golf_engine::{args, run_request};

fn main() -> anyhow::Result<()> {
    sensible_env_logger::init!();

    let args = args::args_checks().map_err(|e| anyhow!(e))?;
    info!("running {} request", args.request.kind());

    let result = run_request(&args.request)
        .with_context(|| format!("{} request failed", args.request.kind()))?;

    let out = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{out}");
    Ok(())
}
