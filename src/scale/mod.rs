pub mod clamp;
pub mod math;
pub mod steps;
pub mod types;

pub use self::clamp::{evaluate_preferred, generate_accessible_clamp, REM_BASE_PX};
pub use self::math::{
    calculate_current_size, calculate_optical_size, calculate_step_size, interpolate_ratio,
};
pub use self::steps::generate_scale_steps;
pub use self::types::{step_name, ClampResult, Override, Overrides, ScaleStep, DEFAULT_STEPS};
