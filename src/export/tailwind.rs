use super::css_string;
use crate::config::FontSettings;
use crate::scale::ScaleStep;
use std::fmt::Write;

pub(super) fn render(steps: &[ScaleStep], font: &FontSettings) -> String {
    let mut out = String::new();
    out.push_str("// tailwind.config.js\n");
    out.push_str("module.exports = {\n");
    out.push_str("  theme: {\n");
    out.push_str("    extend: {\n");

    if let Some(name) = &font.custom_font_name {
        out.push_str("      fontFamily: {\n");
        let _ = writeln!(
            out,
            "        custom: ['\"{}\"', 'system-ui', 'sans-serif'],",
            escape_single(&css_string(name))
        );
        out.push_str("      },\n");
    }

    out.push_str("      fontSize: {\n");
    for s in steps {
        let _ = writeln!(out, "        '{}': '{}',", s.name, s.clamp_formula);
    }
    out.push_str("      },\n");

    out.push_str("    },\n");
    out.push_str("  },\n");
    out.push_str("};\n");
    out
}

fn escape_single(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}
