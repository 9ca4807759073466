use fluidscale::config::{FontSettings, ScaleParams};
use fluidscale::export::{generate_css_variables, generate_export, ExportFormat};
use fluidscale::scale::{generate_scale_steps, ScaleStep};
use rstest::{fixture, rstest};
use std::str::FromStr;
use strum::IntoEnumIterator;

#[fixture]
fn base_only() -> Vec<ScaleStep> {
    let params = ScaleParams {
        simulated_viewport: 320.0,
        steps: vec![0],
        ..Default::default()
    };
    generate_scale_steps(&params, None)
}

#[fixture]
fn full_scale() -> Vec<ScaleStep> {
    generate_scale_steps(&ScaleParams::default(), None)
}

fn with_font(url: Option<&str>, name: Option<&str>) -> FontSettings {
    FontSettings {
        custom_font: url.map(String::from),
        custom_font_name: name.map(String::from),
        ..Default::default()
    }
}

#[rstest]
fn test_minimal_exact(base_only: Vec<ScaleStep>) {
    let out = generate_export(ExportFormat::Minimal, &base_only, &FontSettings::default());
    assert_eq!(
        out,
        ":root {\n  --font-size-base: clamp(1.0000rem, 1.0000rem + 0.0000vw, 1.0000rem);\n}\n"
    );
}

#[rstest]
fn test_css_contains_every_step(full_scale: Vec<ScaleStep>) {
    let out = generate_export(ExportFormat::Css, &full_scale, &FontSettings::default());
    for s in &full_scale {
        assert!(
            out.contains(&format!("--font-size-{}: {};", s.name, s.clamp_formula)),
            "missing size var for {}",
            s.name
        );
        assert!(out.contains(&format!("--optical-size-{}: {};", s.name, s.optical_size)));
        assert!(out.contains(&format!(".text-{} {{", s.name)));
    }
    assert!(!out.contains("@font-face"));
    assert!(!out.contains("--font-family-custom"));
}

#[rstest]
fn test_css_base_block(base_only: Vec<ScaleStep>) {
    let out = generate_export(ExportFormat::Css, &base_only, &FontSettings::default());
    assert!(out.contains("  --optical-size-base: 12;\n"));
    assert!(out.contains(
        ".text-base {\n  font-size: var(--font-size-base);\n  font-variation-settings: \"opsz\" var(--optical-size-base);\n}\n"
    ));
}

#[rstest]
#[case(Some("data:font/woff2;base64,AAAA"), Some("Inter"), true)]
#[case(None, Some("Inter"), false)]
#[case(Some("data:font/woff2;base64,AAAA"), None, false)]
#[case(None, None, false)]
fn test_font_face_needs_url_and_name(
    base_only: Vec<ScaleStep>,
    #[case] url: Option<&str>,
    #[case] name: Option<&str>,
    #[case] expect_face: bool,
) {
    let out = generate_export(ExportFormat::Css, &base_only, &with_font(url, name));
    assert_eq!(out.contains("@font-face"), expect_face);
    assert_eq!(out.contains("--font-family-custom"), name.is_some());
}

#[rstest]
fn test_font_face_block(base_only: Vec<ScaleStep>) {
    let font = with_font(Some("fonts/inter.woff2"), Some("Inter"));
    let out = generate_export(ExportFormat::Css, &base_only, &font);
    assert!(out.contains(
        "@font-face {\n  font-family: \"Inter\";\n  src: url(\"fonts/inter.woff2\");\n  font-display: swap;\n}\n"
    ));
    assert!(out.contains("--font-family-custom: \"Inter\", system-ui, sans-serif;"));
    assert!(out.contains("  font-family: var(--font-family-custom);\n"));
}

#[rstest]
fn test_axes_precede_optical_size(base_only: Vec<ScaleStep>) {
    let mut font = FontSettings::default();
    font.axes.insert("wght".to_string(), 650.0);
    let out = generate_export(ExportFormat::Css, &base_only, &font);
    assert!(out.contains("font-variation-settings: \"wght\" 650, \"opsz\" var(--optical-size-base);"));
}

#[rstest]
fn test_axes_sorted_by_tag(base_only: Vec<ScaleStep>) {
    let mut font = FontSettings::default();
    font.axes.insert("wght".to_string(), 400.0);
    font.axes.insert("slnt".to_string(), -10.0);
    assert_eq!(font.variation_settings(), "\"slnt\" -10, \"wght\" 400");

    let out = generate_export(ExportFormat::Scss, &base_only, &font);
    assert!(out.contains(
        "font-variation-settings: \"slnt\" -10, \"wght\" 400, \"opsz\" #{map-get($optical-sizes, $step)};"
    ));
}

#[rstest]
fn test_tailwind(full_scale: Vec<ScaleStep>) {
    let out = generate_export(ExportFormat::Tailwind, &full_scale, &FontSettings::default());
    assert!(out.starts_with("// tailwind.config.js\nmodule.exports = {\n"));
    assert!(out.contains("      fontSize: {\n"));
    for s in &full_scale {
        assert!(out.contains(&format!("        '{}': '{}',\n", s.name, s.clamp_formula)));
    }
    assert!(!out.contains("fontFamily"));
    assert!(out.ends_with("};\n"));
}

#[rstest]
fn test_tailwind_font_family(base_only: Vec<ScaleStep>) {
    let out = generate_export(
        ExportFormat::Tailwind,
        &base_only,
        &with_font(None, Some("Roboto Flex")),
    );
    assert!(out.contains("custom: ['\"Roboto Flex\"', 'system-ui', 'sans-serif'],"));
}

#[rstest]
fn test_scss(base_only: Vec<ScaleStep>) {
    let out = generate_export(ExportFormat::Scss, &base_only, &FontSettings::default());
    assert!(out.contains("$font-size-base: clamp(1.0000rem, 1.0000rem + 0.0000vw, 1.0000rem);\n"));
    assert!(out.contains("$optical-size-base: 12;\n"));
    assert!(out.contains("$font-sizes: (\n  'base': $font-size-base,\n);\n"));
    assert!(out.contains("$optical-sizes: (\n  'base': $optical-size-base,\n);\n"));
    assert!(out.contains("@mixin fluid-type($step) {\n  font-size: map-get($font-sizes, $step);\n"));
}

#[rstest]
fn test_css_variables_is_full_css(full_scale: Vec<ScaleStep>) {
    let font = with_font(Some("a.woff2"), Some("A"));
    assert_eq!(
        generate_css_variables(&full_scale, &font),
        generate_export(ExportFormat::Css, &full_scale, &font)
    );
}

#[rstest]
fn test_exports_are_deterministic(full_scale: Vec<ScaleStep>) {
    let font = with_font(None, Some("Inter"));
    for format in ExportFormat::iter() {
        let a = generate_export(format, &full_scale, &font);
        let b = generate_export(format, &full_scale, &font);
        assert_eq!(a, b, "{} output changed between calls", format);
    }
}

#[test]
fn test_empty_scale_still_renders() {
    let out = generate_export(ExportFormat::Minimal, &[], &FontSettings::default());
    assert_eq!(out, ":root {\n}\n");
}

#[rstest]
#[case("css", ExportFormat::Css)]
#[case("MINIMAL", ExportFormat::Minimal)]
#[case("Tailwind", ExportFormat::Tailwind)]
#[case("scss", ExportFormat::Scss)]
fn test_format_parsing(#[case] input: &str, #[case] expected: ExportFormat) {
    assert_eq!(ExportFormat::from_str(input).unwrap(), expected);
}

#[test]
fn test_format_default_and_display() {
    assert_eq!(ExportFormat::default(), ExportFormat::Css);
    assert_eq!(ExportFormat::Tailwind.to_string(), "tailwind");
    assert!(ExportFormat::from_str("less").is_err());
}

#[rstest]
fn test_font_strings_are_escaped(base_only: Vec<ScaleStep>) {
    let font = with_font(Some("fonts/a\"b.woff2"), Some("My \"Quoted\" \\Font"));

    let css = generate_export(ExportFormat::Css, &base_only, &font);
    assert!(css.contains("  font-family: \"My \\\"Quoted\\\" \\\\Font\";\n"), "{}", css);
    assert!(css.contains("  src: url(\"fonts/a\\\"b.woff2\");\n"));
    assert!(css.contains("--font-family-custom: \"My \\\"Quoted\\\" \\\\Font\", system-ui, sans-serif;"));

    let scss = generate_export(ExportFormat::Scss, &base_only, &font);
    assert!(scss.contains("$font-family-custom: \"My \\\"Quoted\\\" \\\\Font\", system-ui, sans-serif;"));

    let tailwind = generate_export(ExportFormat::Tailwind, &base_only, &with_font(None, Some("It's \"x\"")));
    assert!(tailwind.contains(r#"custom: ['"It\'s \\"x\\""', 'system-ui', 'sans-serif'],"#), "{}", tailwind);
}
