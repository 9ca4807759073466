/// Ratio in effect at `viewport_width`, linearly interpolated between the
/// mobile and desktop ratios. The viewport is clamped into the breakpoint
/// range first.
pub fn interpolate_ratio(
    viewport_width: f64,
    mobile_ratio: f64,
    desktop_ratio: f64,
    min_breakpoint: f64,
    max_breakpoint: f64,
) -> f64 {
    let clamped = viewport_width.min(max_breakpoint).max(min_breakpoint);
    let factor = (clamped - min_breakpoint) / (max_breakpoint - min_breakpoint);
    mobile_ratio + (desktop_ratio - mobile_ratio) * factor
}

/// `base * ratio^step`. Adjacent steps always differ by exactly `ratio`.
pub fn calculate_step_size(base_size: f64, ratio: f64, step: i32) -> f64 {
    base_size * ratio.powi(step)
}

/// Size at `viewport_width`. Same piecewise-linear shape a browser evaluates
/// for the generated `clamp()`.
pub fn calculate_current_size(
    min_size: f64,
    max_size: f64,
    viewport_width: f64,
    min_breakpoint: f64,
    max_breakpoint: f64,
) -> f64 {
    if viewport_width <= min_breakpoint {
        return min_size;
    }
    if viewport_width >= max_breakpoint {
        return max_size;
    }

    let factor = (viewport_width - min_breakpoint) / (max_breakpoint - min_breakpoint);
    min_size + (max_size - min_size) * factor
}

pub const OPSZ_MIN: u32 = 8;
pub const OPSZ_MAX: u32 = 144;

/// Linear px -> `opsz` approximation, clamped to the common axis range.
/// A NaN size maps to the axis floor (8) rather than propagating.
pub fn calculate_optical_size(font_size: f64) -> u32 {
    let raw = (font_size * 0.75 + 0.5).floor();
    if raw.is_nan() {
        return OPSZ_MIN;
    }
    raw.clamp(OPSZ_MIN as f64, OPSZ_MAX as f64) as u32
}
