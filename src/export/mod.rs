//! Text renderers for a computed scale.
//!
//! Every renderer is a pure function of the step list and font settings; the
//! numbers are printed as the engine produced them, never re-rounded.

mod css;
mod scss;
mod tailwind;

use crate::config::FontSettings;
use crate::scale::ScaleStep;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, Default, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Custom properties, utility classes and `@font-face`
    #[default]
    Css,
    /// Only the custom-property declarations
    Minimal,
    /// `tailwind.config.js` theme extension
    Tailwind,
    /// Variables, maps and an optical-sizing mixin
    Scss,
}

impl ExportFormat {
    pub fn description(&self) -> &'static str {
        match self {
            Self::Css => "Full CSS with custom properties and utility classes.",
            Self::Minimal => "Just the essential CSS variables.",
            Self::Tailwind => "Extend your Tailwind config with fluid sizes.",
            Self::Scss => "SCSS variables with a mixin for optical sizing.",
        }
    }
}

pub fn generate_export(format: ExportFormat, steps: &[ScaleStep], font: &FontSettings) -> String {
    match format {
        ExportFormat::Css => css::render_full(steps, font),
        ExportFormat::Minimal => css::render_minimal(steps),
        ExportFormat::Tailwind => tailwind::render(steps, font),
        ExportFormat::Scss => scss::render(steps, font),
    }
}

/// The full stylesheet. This is the text a studio keeps alongside its steps.
pub fn generate_css_variables(steps: &[ScaleStep], font: &FontSettings) -> String {
    css::render_full(steps, font)
}

/// `"Name", system-ui, sans-serif`
fn font_stack(name: &str) -> String {
    format!("\"{}\", system-ui, sans-serif", css_string(name))
}

/// Escapes text for the inside of a double-quoted CSS string.
fn css_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\A "),
            _ => out.push(c),
        }
    }
    out
}

/// Axis settings followed by the optical size expression.
fn variation_settings(font: &FontSettings, opsz: &str) -> String {
    let axes = font.variation_settings();
    if axes.is_empty() {
        format!("\"opsz\" {}", opsz)
    } else {
        format!("{}, \"opsz\" {}", axes, opsz)
    }
}
