use super::{font_stack, variation_settings};
use crate::config::FontSettings;
use crate::scale::ScaleStep;
use std::fmt::Write;

pub(super) fn render(steps: &[ScaleStep], font: &FontSettings) -> String {
    let mut out = String::new();
    out.push_str("// Fluid Type Scale\n\n");

    if let Some(name) = &font.custom_font_name {
        let _ = writeln!(out, "$font-family-custom: {};\n", font_stack(name));
    }

    for s in steps {
        let _ = writeln!(out, "$font-size-{}: {};", s.name, s.clamp_formula);
    }
    out.push('\n');
    for s in steps {
        let _ = writeln!(out, "$optical-size-{}: {};", s.name, s.optical_size);
    }

    out.push_str("\n$font-sizes: (\n");
    for s in steps {
        let _ = writeln!(out, "  '{}': $font-size-{},", s.name, s.name);
    }
    out.push_str(");\n");

    out.push_str("\n$optical-sizes: (\n");
    for s in steps {
        let _ = writeln!(out, "  '{}': $optical-size-{},", s.name, s.name);
    }
    out.push_str(");\n");

    out.push_str("\n@mixin fluid-type($step) {\n");
    if font.custom_font_name.is_some() {
        out.push_str("  font-family: $font-family-custom;\n");
    }
    out.push_str("  font-size: map-get($font-sizes, $step);\n");
    let _ = writeln!(
        out,
        "  font-variation-settings: {};",
        variation_settings(font, "#{map-get($optical-sizes, $step)}")
    );
    out.push_str("}\n");

    out
}
