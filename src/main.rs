use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{debug, error, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Fluid typography scale calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config snapshot; explicit flags override its values
    #[arg(global = true, short, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the scale and print it as a table
    Scale(cmd::scale::ScaleArgs),
    /// Render the scale as css, minimal, tailwind or scss
    Export(cmd::export::ExportArgs),
    /// WCAG contrast audit for a color pair
    Contrast(cmd::contrast::ContrastArgs),
    /// List the named ratios
    Ratios(cmd::ratios::RatiosArgs),
}

fn main() {
    // Raw matches tell user input apart from clap defaults
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    debug!("🚀 fluidscale {}", env!("CARGO_PKG_VERSION"));

    let config_path = cli.config.as_deref();
    // Flags like --base-size live in the subcommand's matches, not the root
    let sub_matches = matches.subcommand().map(|(_, m)| m).unwrap_or(&matches);

    let result = match cli.command {
        Commands::Scale(args) => cmd::scale::run(args, config_path, sub_matches),
        Commands::Export(args) => cmd::export::run(args, config_path, sub_matches),
        Commands::Contrast(args) => cmd::contrast::run(args),
        Commands::Ratios(args) => cmd::ratios::run(args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
