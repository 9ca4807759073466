use crate::reports;
use clap::{ArgMatches, Args};
use fluidscale::api::ScaleStudio;
use fluidscale::config::{OverrideArgs, ScaleParams};
use fluidscale::error::FsResult;

#[derive(Args, Debug, Clone)]
pub struct ScaleArgs {
    #[command(flatten)]
    pub scale: ScaleParams,

    #[command(flatten)]
    pub overrides: OverrideArgs,

    /// Print the steps as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ScaleArgs, config_path: Option<&str>, matches: &ArgMatches) -> FsResult<()> {
    let config = super::resolve_config(config_path, &args.scale, &args.overrides, matches)?;
    let studio = ScaleStudio::new(config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(studio.steps())?);
        return Ok(());
    }

    reports::print_scale_summary(studio.config());
    reports::print_scale_table(studio.steps(), studio.config());
    Ok(())
}
