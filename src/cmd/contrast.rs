use crate::reports;
use clap::Args;
use fluidscale::contrast::{
    audit_contrast, get_contrast_ratio, hex_to_rgb, suggest_better_contrast,
    DEFAULT_TARGET_RATIO,
};
use fluidscale::error::{FluidScaleError, FsResult};

#[derive(Args, Debug, Clone)]
pub struct ContrastArgs {
    #[arg(long, default_value = "#FAFAFA")]
    pub foreground: String,

    #[arg(long, default_value = "#0A0A0A")]
    pub background: String,

    /// Rendered text size in px
    #[arg(long, default_value_t = 16.0)]
    pub font_size: f64,

    #[arg(long, default_value_t = false)]
    pub bold: bool,

    /// Ratio the suggested foreground should reach
    #[arg(long, default_value_t = DEFAULT_TARGET_RATIO)]
    pub target: f64,
}

pub fn run(args: ContrastArgs) -> FsResult<()> {
    let audit = audit_contrast(&args.foreground, &args.background, args.font_size, args.bold);

    // 0 is the sentinel for unparseable input
    if audit.ratio == 0.0 {
        let bad = if hex_to_rgb(&args.foreground).is_none() {
            &args.foreground
        } else {
            &args.background
        };
        return Err(FluidScaleError::InvalidColor(bad.clone()));
    }

    // The audit ratio is rounded for display; 4.499 must not read as 4.5 here
    let ratio = get_contrast_ratio(&args.foreground, &args.background);
    let suggestion = if ratio < args.target || !audit.passes {
        Some(suggest_better_contrast(
            &args.foreground,
            &args.background,
            args.target,
        ))
        .filter(|color| !color.eq_ignore_ascii_case(&args.foreground))
    } else {
        None
    };

    reports::print_contrast_report(&args.foreground, &args.background, &audit, suggestion.as_deref());
    Ok(())
}
