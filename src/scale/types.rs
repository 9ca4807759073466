use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One computed step of the fluid scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleStep {
    pub step: i32,
    pub name: String,

    // Pixels at the min/max breakpoint, 2 decimals
    pub min_size: f64,
    pub max_size: f64,

    // Pixels at the simulated viewport, 2 decimals
    pub current_size: f64,

    pub clamp_formula: String,
    pub optical_size: u32,
}

/// Intermediate result of the clamp derivation. `value` is the slope in vw,
/// `relative` the intercept in rem. Both are unrounded; only `css` carries
/// the 4-decimal formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClampResult {
    pub css: String,
    pub value: f64,
    pub relative: f64,
    pub min_size: f64,
    pub max_size: f64,
}

/// Explicit min/max pair replacing the ratio-computed sizes of one step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Override {
    pub min: f64,
    pub max: f64,
}

pub type Overrides = BTreeMap<i32, Override>;

pub const DEFAULT_STEPS: [i32; 8] = [-2, -1, 0, 1, 2, 3, 4, 5];

pub fn step_name(step: i32) -> String {
    let name = match step {
        -2 => "xs",
        -1 => "sm",
        0 => "base",
        1 => "lg",
        2 => "xl",
        3 => "2xl",
        4 => "3xl",
        5 => "4xl",
        _ => return format!("step-{}", step),
    };
    name.to_string()
}
