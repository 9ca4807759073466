use clap::{ArgMatches, Args};
use fluidscale::api::ScaleStudio;
use fluidscale::config::{FontArgs, OverrideArgs, ScaleParams};
use fluidscale::error::FsResult;
use fluidscale::export::ExportFormat;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub scale: ScaleParams,

    #[command(flatten)]
    pub overrides: OverrideArgs,

    #[command(flatten)]
    pub font: FontArgs,

    /// css, minimal, tailwind or scss
    #[arg(short, long, default_value_t = ExportFormat::Css)]
    pub format: ExportFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the resolved configuration snapshot as JSON
    #[arg(long)]
    pub save_config: Option<PathBuf>,
}

pub fn run(args: ExportArgs, config_path: Option<&str>, matches: &ArgMatches) -> FsResult<()> {
    let mut config = super::resolve_config(config_path, &args.scale, &args.overrides, matches)?;
    args.font.apply_to(&mut config.font);

    if let Some(path) = &args.save_config {
        config.save_to_file(path)?;
        info!("💾 Config saved to {}", path.display());
    }

    let studio = ScaleStudio::new(config)?;
    let code = studio.export(args.format);

    match &args.output {
        Some(path) => {
            fs::write(path, &code)?;
            info!(
                "📝 Wrote {} export ({} steps) to {}",
                args.format,
                studio.steps().len(),
                path.display()
            );
            info!("{}", args.format.description());
        }
        None => print!("{}", code),
    }
    Ok(())
}
