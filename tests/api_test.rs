use fluidscale::api::ScaleStudio;
use fluidscale::config::{ScaleConfig, ScaleParams};
use fluidscale::export::ExportFormat;
use fluidscale::scale::{Override, DEFAULT_STEPS};

fn pinned() -> Override {
    Override {
        min: 20.0,
        max: 30.0,
    }
}

#[test]
fn test_default_studio() {
    let studio = ScaleStudio::default();
    assert_eq!(studio.steps().len(), DEFAULT_STEPS.len());
    assert_eq!(studio.step(0).unwrap().name, "base");
    assert!(studio.css_variables().contains("--font-size-base"));
    assert!(!studio.config().manual_mode);
}

#[test]
fn test_new_rejects_invalid_config() {
    let config = ScaleConfig {
        scale: ScaleParams {
            min_breakpoint: 1280.0,
            max_breakpoint: 320.0,
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(ScaleStudio::new(config).is_err());
}

#[test]
fn test_overrides_need_manual_mode() {
    let mut studio = ScaleStudio::default();
    let original = studio.step(1).unwrap().clone();

    studio.set_override(1, pinned()).unwrap();
    assert_eq!(studio.step(1).unwrap(), &original, "override applied while manual mode is off");
    assert!(studio.config().overrides.contains_key(&1));

    studio.set_manual_mode(true).unwrap();
    let lg = studio.step(1).unwrap();
    assert_eq!(lg.min_size, 20.0);
    assert_eq!(lg.max_size, 30.0);
    assert_eq!(lg.current_size, 25.0);

    // Turning manual mode back off keeps the stored override
    studio.set_manual_mode(false).unwrap();
    assert_eq!(studio.step(1).unwrap(), &original);
    assert!(studio.config().overrides.contains_key(&1));
}

#[test]
fn test_clear_override_restores_computed_step() {
    let mut studio = ScaleStudio::default();
    let original = studio.step(1).unwrap().clone();

    studio.set_manual_mode(true).unwrap();
    studio.set_override(1, pinned()).unwrap();
    assert_ne!(studio.step(1).unwrap(), &original);

    studio.clear_override(1).unwrap();
    assert_eq!(studio.step(1).unwrap(), &original);
}

#[test]
fn test_override_survives_ratio_change() {
    let mut studio = ScaleStudio::default();
    studio.set_manual_mode(true).unwrap();
    studio.set_override(1, pinned()).unwrap();

    let before_xl = studio.step(2).unwrap().max_size;
    studio.set_desktop_ratio(1.618).unwrap();

    assert_eq!(studio.step(1).unwrap().max_size, 30.0);
    assert_ne!(studio.step(2).unwrap().max_size, before_xl);
}

#[test]
fn test_partial_override_fills_other_side() {
    let mut studio = ScaleStudio::default();
    studio.set_manual_mode(true).unwrap();

    // Step 2 displays 20.25 / 31.99 with the default ratios
    studio.set_override_min(2, 22.0).unwrap();
    assert_eq!(
        studio.config().overrides.get(&2),
        Some(&Override { min: 22.0, max: 31.99 })
    );

    studio.set_override_max(2, 40.0).unwrap();
    assert_eq!(
        studio.config().overrides.get(&2),
        Some(&Override { min: 22.0, max: 40.0 })
    );
}

#[test]
fn test_partial_override_unknown_step() {
    let mut studio = ScaleStudio::default();
    assert!(studio.set_override_min(42, 10.0).is_err());
}

#[test]
fn test_invalid_mutation_leaves_state_untouched() {
    let mut studio = ScaleStudio::default();
    let config = studio.config().clone();
    let steps = studio.steps().to_vec();
    let css = studio.css_variables().to_string();

    assert!(studio.set_min_breakpoint(2000.0).is_err());
    assert!(studio.set_base_size(-4.0).is_err());
    assert!(studio.set_mobile_ratio(f64::NAN).is_err());
    assert!(studio.set_override(1, Override { min: f64::INFINITY, max: 30.0 }).is_err());

    assert_eq!(studio.config(), &config);
    assert_eq!(studio.steps(), steps.as_slice());
    assert_eq!(studio.css_variables(), css);
}

#[test]
fn test_viewport_only_moves_current_size() {
    let mut studio = ScaleStudio::default();
    let before = studio.step(3).unwrap().clone();

    studio.set_simulated_viewport(1280.0).unwrap();
    let after = studio.step(3).unwrap();

    assert_eq!(after.min_size, before.min_size);
    assert_eq!(after.max_size, before.max_size);
    assert_eq!(after.clamp_formula, before.clamp_formula);
    assert_eq!(after.current_size, after.max_size);
}

#[test]
fn test_set_scale_replaces_steps() {
    let mut studio = ScaleStudio::default();
    studio
        .set_scale(ScaleParams {
            steps: vec![0, 1, 6],
            ..Default::default()
        })
        .unwrap();
    let names: Vec<&str> = studio.steps().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["base", "lg", "step-6"]);
}

#[test]
fn test_font_settings_reach_css() {
    let mut studio = ScaleStudio::default();
    assert!(!studio.css_variables().contains("@font-face"));

    studio
        .set_custom_font(Some("data:font/woff2;base64,AAAA".into()), Some("Inter".into()))
        .unwrap();
    studio.set_font_axis("wght", 650.0).unwrap();

    let css = studio.css_variables();
    assert!(css.contains("@font-face"));
    assert!(css.contains("\"wght\" 650, \"opsz\" var(--optical-size-base)"));
    assert_eq!(studio.export(ExportFormat::Css), css);

    studio.set_custom_font(None, None).unwrap();
    assert!(!studio.css_variables().contains("@font-face"));
}

#[test]
fn test_fluid_value_for_known_step() {
    let studio = ScaleStudio::default();
    let v = studio.fluid_value(0);
    assert_eq!(v.current_size, 16.0);
    assert_eq!(v.css_var, "--font-size-base");
    assert_eq!(v.clamp_formula, studio.step(0).unwrap().clamp_formula);
}

#[test]
fn test_fluid_value_fallback() {
    let studio = ScaleStudio::default();
    let v = studio.fluid_value(99);
    assert_eq!(v.current_size, 16.0);
    assert_eq!(v.min_size, 16.0);
    assert_eq!(v.max_size, 16.0);
    assert_eq!(v.clamp_formula, "1rem");
    assert_eq!(v.css_var, "--font-size-base");
}

#[test]
fn test_custom_fluid_value() {
    let studio = ScaleStudio::default();
    let v = studio.custom_fluid_value(20.0, 30.0);
    assert_eq!(v.current_size, 25.0);
    assert_eq!(v.clamp_formula, "clamp(1.2500rem, 1.0417rem + 1.0417vw, 1.8750rem)");
    assert!(v.css_var.is_empty());
}

#[test]
fn test_recalculate_is_idempotent() {
    let mut studio = ScaleStudio::default();
    let steps = studio.steps().to_vec();
    studio.recalculate();
    assert_eq!(studio.steps(), steps.as_slice());
}

#[test]
fn test_fluid_value_serializes_camel_case() {
    let studio = ScaleStudio::default();
    let json = serde_json::to_string(&studio.fluid_value(0)).unwrap();
    assert!(json.contains("\"clampFormula\""));
    assert!(json.contains("\"cssVar\""));
}
