pub mod contrast;
pub mod export;
pub mod ratios;
pub mod scale;

use clap::ArgMatches;
use fluidscale::config::{OverrideArgs, ScaleConfig, ScaleParams};
use fluidscale::error::FsResult;
use tracing::info;

/// Config file first (or defaults), then whatever was typed on the command
/// line. The result is validated before any engine call.
pub fn resolve_config(
    config_path: Option<&str>,
    cli_scale: &ScaleParams,
    cli_overrides: &OverrideArgs,
    sub_matches: &ArgMatches,
) -> FsResult<ScaleConfig> {
    let mut config = match config_path {
        Some(path) => {
            info!("📂 Loading config from: {}", path);
            let mut file_config = ScaleConfig::load_from_file(path)?;
            file_config.scale.merge_from_cli(cli_scale, sub_matches);
            file_config
        }
        None => ScaleConfig {
            scale: cli_scale.clone(),
            ..Default::default()
        },
    };

    cli_overrides.apply_to(&mut config);
    config.scale.validate()?;
    Ok(config)
}
