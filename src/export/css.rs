use super::{css_string, font_stack, variation_settings};
use crate::config::FontSettings;
use crate::scale::ScaleStep;
use std::fmt::Write;

pub(super) fn render_full(steps: &[ScaleStep], font: &FontSettings) -> String {
    let mut out = String::new();
    out.push_str("/* Fluid Type Scale */\n");
    out.push_str("/* Sizes interpolate between the min and max breakpoint. */\n\n");

    if let (Some(url), Some(name)) = (&font.custom_font, &font.custom_font_name) {
        out.push_str("@font-face {\n");
        let _ = writeln!(out, "  font-family: \"{}\";", css_string(name));
        let _ = writeln!(out, "  src: url(\"{}\");", css_string(url));
        out.push_str("  font-display: swap;\n");
        out.push_str("}\n\n");
    }

    out.push_str(":root {\n");
    if let Some(name) = &font.custom_font_name {
        let _ = writeln!(out, "  --font-family-custom: {};", font_stack(name));
    }
    for s in steps {
        let _ = writeln!(
            out,
            "  --font-size-{}: {}; /* {}px → {}px */",
            s.name, s.clamp_formula, s.min_size, s.max_size
        );
    }
    out.push('\n');
    for s in steps {
        let _ = writeln!(out, "  --optical-size-{}: {};", s.name, s.optical_size);
    }
    out.push_str("}\n");

    for s in steps {
        out.push('\n');
        let _ = writeln!(out, ".text-{} {{", s.name);
        if font.custom_font_name.is_some() {
            out.push_str("  font-family: var(--font-family-custom);\n");
        }
        let _ = writeln!(out, "  font-size: var(--font-size-{});", s.name);
        let opsz = format!("var(--optical-size-{})", s.name);
        let _ = writeln!(
            out,
            "  font-variation-settings: {};",
            variation_settings(font, &opsz)
        );
        out.push_str("}\n");
    }

    out
}

pub(super) fn render_minimal(steps: &[ScaleStep]) -> String {
    let mut out = String::from(":root {\n");
    for s in steps {
        let _ = writeln!(out, "  --font-size-{}: {};", s.name, s.clamp_formula);
    }
    out.push_str("}\n");
    out
}
