use super::clamp::generate_accessible_clamp;
use super::math::{calculate_current_size, calculate_optical_size, calculate_step_size};
use super::types::{step_name, Overrides, ScaleStep};
use crate::config::ScaleParams;
use crate::util::round_to;
use tracing::trace;

/// Regenerates the full scale, one entry per configured step, in order.
///
/// Overrides replace the whole min/max pair of their step. The pair is
/// rounded once and that rounded pair feeds both the current size and the
/// clamp formula, so the displayed numbers and the displayed CSS agree.
/// Degenerate parameters are not rejected here; see `ScaleParams::validate`.
pub fn generate_scale_steps(params: &ScaleParams, overrides: Option<&Overrides>) -> Vec<ScaleStep> {
    params
        .steps
        .iter()
        .map(|&step| {
            let mut min_size = calculate_step_size(params.base_size, params.mobile_ratio, step);
            let mut max_size = calculate_step_size(params.base_size, params.desktop_ratio, step);

            if let Some(ov) = overrides.and_then(|o| o.get(&step)) {
                min_size = ov.min;
                max_size = ov.max;
            }

            let min_size = round_to(min_size, 2);
            let max_size = round_to(max_size, 2);

            let current_size = calculate_current_size(
                min_size,
                max_size,
                params.simulated_viewport,
                params.min_breakpoint,
                params.max_breakpoint,
            );

            let clamp = generate_accessible_clamp(
                min_size,
                max_size,
                params.min_breakpoint,
                params.max_breakpoint,
            );

            let optical_size = calculate_optical_size(current_size);

            trace!(step, min_size, max_size, current_size, "step computed");

            ScaleStep {
                step,
                name: step_name(step),
                min_size,
                max_size,
                current_size: round_to(current_size, 2),
                clamp_formula: clamp.css,
                optical_size,
            }
        })
        .collect()
}
