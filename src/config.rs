use crate::error::{FluidScaleError, FsResult};
use crate::ratios::parse_ratio;
use crate::scale::{Override, Overrides, DEFAULT_STEPS};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Everything the engine needs to compute a scale.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleParams {
    #[arg(long, default_value_t = 16.0)]
    pub base_size: f64,

    // Ratios accept a number or a catalogue name ("golden-ratio")
    #[arg(long, default_value_t = 1.125, value_parser = parse_ratio)]
    pub mobile_ratio: f64,
    #[arg(long, default_value_t = 1.414, value_parser = parse_ratio)]
    pub desktop_ratio: f64,

    #[arg(long, default_value_t = 320.0)]
    pub min_breakpoint: f64,
    #[arg(long, default_value_t = 1280.0)]
    pub max_breakpoint: f64,

    #[arg(long = "viewport", default_value_t = 800.0)]
    pub simulated_viewport: f64,

    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_values_t = DEFAULT_STEPS.to_vec()
    )]
    pub steps: Vec<i32>,
}

impl Default for ScaleParams {
    fn default() -> Self {
        Self {
            base_size: 16.0,
            mobile_ratio: 1.125,
            desktop_ratio: 1.414,
            min_breakpoint: 320.0,
            max_breakpoint: 1280.0,
            simulated_viewport: 800.0,
            steps: DEFAULT_STEPS.to_vec(),
        }
    }
}

impl ScaleParams {
    /// Shell-side guard. The engine itself accepts anything and returns
    /// NaN/Infinity for degenerate input.
    pub fn validate(&self) -> FsResult<()> {
        let numbers = [
            ("base_size", self.base_size),
            ("mobile_ratio", self.mobile_ratio),
            ("desktop_ratio", self.desktop_ratio),
            ("min_breakpoint", self.min_breakpoint),
            ("max_breakpoint", self.max_breakpoint),
            ("simulated_viewport", self.simulated_viewport),
        ];
        for (name, v) in numbers {
            if !v.is_finite() {
                return Err(FluidScaleError::Validation(format!(
                    "{} must be a finite number (got {})",
                    name, v
                )));
            }
        }

        if self.base_size <= 0.0 {
            return Err(FluidScaleError::Validation(format!(
                "base_size must be positive (got {})",
                self.base_size
            )));
        }
        if self.mobile_ratio <= 0.0 || self.desktop_ratio <= 0.0 {
            return Err(FluidScaleError::Validation(format!(
                "ratios must be positive (got {} / {})",
                self.mobile_ratio, self.desktop_ratio
            )));
        }
        if self.min_breakpoint >= self.max_breakpoint {
            return Err(FluidScaleError::Validation(format!(
                "min_breakpoint ({}) must be below max_breakpoint ({})",
                self.min_breakpoint, self.max_breakpoint
            )));
        }
        if self.steps.is_empty() {
            return Err(FluidScaleError::Validation(
                "at least one step index is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Copies over only the values the user typed on the command line, so a
    /// config file is never clobbered by clap defaults.
    pub fn merge_from_cli(&mut self, cli: &ScaleParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(base_size, "base_size");
        update_if_present!(mobile_ratio, "mobile_ratio");
        update_if_present!(desktop_ratio, "desktop_ratio");
        update_if_present!(min_breakpoint, "min_breakpoint");
        update_if_present!(max_breakpoint, "max_breakpoint");
        update_if_present!(simulated_viewport, "simulated_viewport");
        update_if_present!(steps, "steps");
    }
}

/// Custom font and variable-font axis settings carried into exports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSettings {
    /// Font source, usually a data URL.
    pub custom_font: Option<String>,
    pub custom_font_name: Option<String>,
    pub axes: BTreeMap<String, f64>,
}

impl FontSettings {
    /// `"wght" 400, "wdth" 100` or an empty string when no axis is set.
    pub fn variation_settings(&self) -> String {
        self.axes
            .iter()
            .map(|(tag, value)| format!("\"{}\" {}", tag, value))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Full, serializable snapshot of a scale session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleConfig {
    pub scale: ScaleParams,
    pub manual_mode: bool,
    pub overrides: Overrides,
    pub font: FontSettings,
}

impl ScaleConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FsResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            FluidScaleError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> FsResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Overrides the engine should see: none while manual mode is off.
    pub fn active_overrides(&self) -> Option<&Overrides> {
        if self.manual_mode {
            Some(&self.overrides)
        } else {
            None
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct OverrideArgs {
    /// Apply per-step overrides
    #[arg(long, default_value_t = false)]
    pub manual: bool,

    /// STEP=MIN:MAX in px, repeatable (e.g. --override 1=20:30)
    #[arg(long = "override", value_parser = parse_override, allow_hyphen_values = true)]
    pub overrides: Vec<(i32, Override)>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct FontArgs {
    #[arg(long)]
    pub font_name: Option<String>,

    #[arg(long)]
    pub font_url: Option<String>,

    /// TAG=VALUE, repeatable (e.g. --axis wght=650)
    #[arg(long = "axis", value_parser = parse_axis, allow_hyphen_values = true)]
    pub axes: Vec<(String, f64)>,
}

impl OverrideArgs {
    pub fn apply_to(&self, config: &mut ScaleConfig) {
        if self.manual {
            config.manual_mode = true;
        }
        for (step, ov) in &self.overrides {
            config.overrides.insert(*step, *ov);
        }
    }
}

impl FontArgs {
    pub fn apply_to(&self, font: &mut FontSettings) {
        if let Some(name) = &self.font_name {
            font.custom_font_name = Some(name.clone());
        }
        if let Some(url) = &self.font_url {
            font.custom_font = Some(url.clone());
        }
        for (tag, value) in &self.axes {
            font.axes.insert(tag.clone(), *value);
        }
    }
}

pub fn parse_override(s: &str) -> Result<(i32, Override), String> {
    let (step, range) = s
        .split_once('=')
        .ok_or_else(|| format!("override '{}' must look like STEP=MIN:MAX", s))?;
    let (min, max) = range
        .split_once(':')
        .ok_or_else(|| format!("override '{}' must look like STEP=MIN:MAX", s))?;

    let step: i32 = step
        .trim()
        .parse()
        .map_err(|_| format!("invalid step index in override '{}'", s))?;
    let min: f64 = min
        .trim()
        .parse()
        .map_err(|_| format!("invalid min size in override '{}'", s))?;
    let max: f64 = max
        .trim()
        .parse()
        .map_err(|_| format!("invalid max size in override '{}'", s))?;

    Ok((step, Override { min, max }))
}

pub fn parse_axis(s: &str) -> Result<(String, f64), String> {
    let (tag, value) = s
        .split_once('=')
        .ok_or_else(|| format!("axis '{}' must look like TAG=VALUE", s))?;
    let tag = tag.trim();
    if tag.is_empty() || tag.len() > 4 {
        return Err(format!("axis tag '{}' must be 1 to 4 characters", tag));
    }
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("invalid value for axis '{}'", tag))?;
    Ok((tag.to_string(), value))
}
