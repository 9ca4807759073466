use super::types::ClampResult;
use crate::util::to_fixed;

/// Root font size the rem conversion assumes.
pub const REM_BASE_PX: f64 = 16.0;

/// Builds `clamp(MIN, OFFSET + SLOPE*vw, MAX)` in rem/vw units so the result
/// still follows the user's browser font size and zoom.
///
/// `min_breakpoint` must be strictly less than `max_breakpoint`; equal
/// breakpoints produce a non-finite slope.
pub fn generate_accessible_clamp(
    min_size: f64,
    max_size: f64,
    min_breakpoint: f64,
    max_breakpoint: f64,
) -> ClampResult {
    // px of font size per px of viewport
    let slope = (max_size - min_size) / (max_breakpoint - min_breakpoint);
    let intercept = min_size - min_breakpoint * slope;

    let min_rem = min_size / REM_BASE_PX;
    let max_rem = max_size / REM_BASE_PX;
    let relative_rem = intercept / REM_BASE_PX;
    let value_vw = slope * 100.0;

    let css = format!(
        "clamp({}rem, {}rem + {}vw, {}rem)",
        to_fixed(min_rem, 4),
        to_fixed(relative_rem, 4),
        to_fixed(value_vw, 4),
        to_fixed(max_rem, 4),
    );

    ClampResult {
        css,
        value: value_vw,
        relative: relative_rem,
        min_size,
        max_size,
    }
}

/// Evaluates a clamp's preferred (middle) expression at a viewport width,
/// in px. Unbounded: callers wanting the clamped value apply min/max.
pub fn evaluate_preferred(clamp: &ClampResult, viewport_width: f64) -> f64 {
    clamp.relative * REM_BASE_PX + clamp.value / 100.0 * viewport_width
}
