use crate::reports;
use clap::Args;
use fluidscale::error::FsResult;
use fluidscale::ratios::{get_all_ratios, get_ratio_name, parse_ratio};

#[derive(Args, Debug, Clone)]
pub struct RatiosArgs {
    /// Name this ratio instead of listing the catalogue
    #[arg(long, value_parser = parse_ratio)]
    pub value: Option<f64>,
}

pub fn run(args: RatiosArgs) -> FsResult<()> {
    match args.value {
        Some(v) => println!("{} → {}", v, get_ratio_name(v)),
        None => reports::print_ratio_table(&get_all_ratios()),
    }
    Ok(())
}
