use crate::config::{ScaleConfig, ScaleParams};
use crate::error::{FluidScaleError, FsResult};
use crate::export::{generate_css_variables, generate_export, ExportFormat};
use crate::scale::{
    calculate_current_size, generate_accessible_clamp, generate_scale_steps, Override, ScaleStep,
};
use serde::Serialize;
use tracing::{debug, warn};

/// Owns one configuration snapshot and everything derived from it.
///
/// Every mutation works on a copy of the config, validates it, and only then
/// swaps it in together with a freshly generated step list and stylesheet.
/// Derived state is never patched in place.
#[derive(Debug, Clone)]
pub struct ScaleStudio {
    config: ScaleConfig,
    steps: Vec<ScaleStep>,
    css_variables: String,
}

/// Sizes and CSS for one step (or an ad-hoc min/max pair).
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FluidValue {
    pub current_size: f64,
    pub min_size: f64,
    pub max_size: f64,
    pub clamp_formula: String,
    pub css_var: String,
}

impl Default for ScaleStudio {
    fn default() -> Self {
        let config = ScaleConfig::default();
        let (steps, css_variables) = derive(&config);
        Self {
            config,
            steps,
            css_variables,
        }
    }
}

fn derive(config: &ScaleConfig) -> (Vec<ScaleStep>, String) {
    let steps = generate_scale_steps(&config.scale, config.active_overrides());
    let css = generate_css_variables(&steps, &config.font);
    (steps, css)
}

impl ScaleStudio {
    pub fn new(config: ScaleConfig) -> FsResult<Self> {
        config.scale.validate()?;
        let (steps, css_variables) = derive(&config);
        Ok(Self {
            config,
            steps,
            css_variables,
        })
    }

    pub fn config(&self) -> &ScaleConfig {
        &self.config
    }

    pub fn steps(&self) -> &[ScaleStep] {
        &self.steps
    }

    pub fn css_variables(&self) -> &str {
        &self.css_variables
    }

    pub fn step(&self, step: i32) -> Option<&ScaleStep> {
        self.steps.iter().find(|s| s.step == step)
    }

    fn update<F>(&mut self, what: &str, mutate: F) -> FsResult<()>
    where
        F: FnOnce(&mut ScaleConfig),
    {
        let mut next = self.config.clone();
        mutate(&mut next);

        if let Err(e) = next.scale.validate() {
            warn!("Rejected {} update: {}", what, e);
            return Err(e);
        }

        let (steps, css_variables) = derive(&next);
        debug!("{} updated, {} steps recomputed", what, steps.len());

        self.config = next;
        self.steps = steps;
        self.css_variables = css_variables;
        Ok(())
    }

    pub fn set_scale(&mut self, scale: ScaleParams) -> FsResult<()> {
        self.update("scale", |c| c.scale = scale)
    }

    pub fn set_base_size(&mut self, size: f64) -> FsResult<()> {
        self.update("base_size", |c| c.scale.base_size = size)
    }

    pub fn set_mobile_ratio(&mut self, ratio: f64) -> FsResult<()> {
        self.update("mobile_ratio", |c| c.scale.mobile_ratio = ratio)
    }

    pub fn set_desktop_ratio(&mut self, ratio: f64) -> FsResult<()> {
        self.update("desktop_ratio", |c| c.scale.desktop_ratio = ratio)
    }

    pub fn set_min_breakpoint(&mut self, bp: f64) -> FsResult<()> {
        self.update("min_breakpoint", |c| c.scale.min_breakpoint = bp)
    }

    pub fn set_max_breakpoint(&mut self, bp: f64) -> FsResult<()> {
        self.update("max_breakpoint", |c| c.scale.max_breakpoint = bp)
    }

    pub fn set_simulated_viewport(&mut self, vw: f64) -> FsResult<()> {
        self.update("simulated_viewport", |c| c.scale.simulated_viewport = vw)
    }

    /// Stored overrides are kept while manual mode is off, just not applied.
    pub fn set_manual_mode(&mut self, enabled: bool) -> FsResult<()> {
        self.update("manual_mode", |c| c.manual_mode = enabled)
    }

    pub fn set_override(&mut self, step: i32, values: Override) -> FsResult<()> {
        if !values.min.is_finite() || !values.max.is_finite() {
            return Err(FluidScaleError::Validation(format!(
                "override for step {} must be finite (got {} / {})",
                step, values.min, values.max
            )));
        }
        self.update("override", |c| {
            c.overrides.insert(step, values);
        })
    }

    /// Sets only the min side. The max side comes from the existing override,
    /// or from the step as currently displayed.
    pub fn set_override_min(&mut self, step: i32, min: f64) -> FsResult<()> {
        let max = self.override_base(step)?.max;
        self.set_override(step, Override { min, max })
    }

    pub fn set_override_max(&mut self, step: i32, max: f64) -> FsResult<()> {
        let min = self.override_base(step)?.min;
        self.set_override(step, Override { min, max })
    }

    fn override_base(&self, step: i32) -> FsResult<Override> {
        if let Some(existing) = self.config.overrides.get(&step) {
            return Ok(*existing);
        }
        self.step(step)
            .map(|s| Override {
                min: s.min_size,
                max: s.max_size,
            })
            .ok_or_else(|| FluidScaleError::Validation(format!("step {} is not in the scale", step)))
    }

    pub fn clear_override(&mut self, step: i32) -> FsResult<()> {
        self.update("override", |c| {
            c.overrides.remove(&step);
        })
    }

    pub fn set_custom_font(&mut self, url: Option<String>, name: Option<String>) -> FsResult<()> {
        self.update("custom_font", |c| {
            c.font.custom_font = url;
            c.font.custom_font_name = name;
        })
    }

    pub fn set_font_axis(&mut self, axis: &str, value: f64) -> FsResult<()> {
        self.update("font_axis", |c| {
            c.font.axes.insert(axis.to_string(), value);
        })
    }

    pub fn recalculate(&mut self) {
        let (steps, css_variables) = derive(&self.config);
        self.steps = steps;
        self.css_variables = css_variables;
    }

    pub fn export(&self, format: ExportFormat) -> String {
        generate_export(format, &self.steps, &self.config.font)
    }

    pub fn fluid_value(&self, step: i32) -> FluidValue {
        match self.step(step) {
            Some(s) => FluidValue {
                current_size: s.current_size,
                min_size: s.min_size,
                max_size: s.max_size,
                clamp_formula: s.clamp_formula.clone(),
                css_var: format!("--font-size-{}", s.name),
            },
            None => FluidValue {
                current_size: 16.0,
                min_size: 16.0,
                max_size: 16.0,
                clamp_formula: "1rem".to_string(),
                css_var: "--font-size-base".to_string(),
            },
        }
    }

    /// Fluid value for sizes outside the scale, at the configured breakpoints
    /// and viewport. No rounding is applied and no CSS variable exists.
    pub fn custom_fluid_value(&self, min_size: f64, max_size: f64) -> FluidValue {
        let p = &self.config.scale;
        let current_size = calculate_current_size(
            min_size,
            max_size,
            p.simulated_viewport,
            p.min_breakpoint,
            p.max_breakpoint,
        );
        let clamp = generate_accessible_clamp(min_size, max_size, p.min_breakpoint, p.max_breakpoint);

        FluidValue {
            current_size,
            min_size,
            max_size,
            clamp_formula: clamp.css,
            css_var: String::new(),
        }
    }
}
