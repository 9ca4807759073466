use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use fluidscale::config::ScaleConfig;
use fluidscale::contrast::{ContrastAudit, WcagLevel};
use fluidscale::ratios::{get_ratio_name, KnownRatio};
use fluidscale::scale::{interpolate_ratio, ScaleStep};

pub fn print_scale_summary(config: &ScaleConfig) {
    let p = &config.scale;
    let effective = interpolate_ratio(
        p.simulated_viewport,
        p.mobile_ratio,
        p.desktop_ratio,
        p.min_breakpoint,
        p.max_breakpoint,
    );

    println!("\n📐 === FLUID SCALE === 📐");
    println!("Base:      {}px", p.base_size);
    println!("Mobile:    {} ({}) @ {}px", p.mobile_ratio, get_ratio_name(p.mobile_ratio), p.min_breakpoint);
    println!("Desktop:   {} ({}) @ {}px", p.desktop_ratio, get_ratio_name(p.desktop_ratio), p.max_breakpoint);
    println!(
        "Viewport:  {}px (effective ratio {:.4}, {})",
        p.simulated_viewport,
        effective,
        get_ratio_name(effective)
    );
    if config.manual_mode && !config.overrides.is_empty() {
        println!("Overrides: {} step(s) pinned", config.overrides.len());
    }
}

pub fn print_scale_table(steps: &[ScaleStep], config: &ScaleConfig) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Step").add_attribute(Attribute::Bold),
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new("Min"),
        Cell::new("Max"),
        Cell::new("Now").fg(Color::Cyan),
        Cell::new("Opsz"),
        Cell::new("Clamp"),
    ]);

    for i in 0..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let overrides = config.active_overrides();
    for s in steps {
        let pinned = overrides.is_some_and(|o| o.contains_key(&s.step));
        let name = if pinned {
            Cell::new(format!("{} *", s.name)).fg(Color::Yellow)
        } else {
            Cell::new(&s.name)
        };

        table.add_row(vec![
            Cell::new(s.step),
            name,
            Cell::new(format!("{:.2}", s.min_size)),
            Cell::new(format!("{:.2}", s.max_size)),
            Cell::new(format!("{:.2}", s.current_size)).fg(Color::Cyan),
            Cell::new(s.optical_size),
            Cell::new(&s.clamp_formula),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_ratio_table(ratios: &[(KnownRatio, f64)]) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![
        Cell::new("Ratio").add_attribute(Attribute::Bold),
        Cell::new("Value"),
    ]);
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (ratio, value) in ratios {
        table.add_row(vec![Cell::new(ratio), Cell::new(value)]);
    }
    println!("\n{}", table);
}

fn level_color(level: WcagLevel) -> Color {
    match level {
        WcagLevel::Aaa => Color::Green,
        WcagLevel::Aa => Color::DarkGreen,
        WcagLevel::AaLarge => Color::Yellow,
        WcagLevel::Fail => Color::Red,
    }
}

pub fn print_contrast_report(
    foreground: &str,
    background: &str,
    audit: &ContrastAudit,
    suggestion: Option<&str>,
) {
    println!("\n🔎 === CONTRAST AUDIT === 🔎");
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("Foreground").add_attribute(Attribute::Bold),
        Cell::new("Background").add_attribute(Attribute::Bold),
        Cell::new("Ratio"),
        Cell::new("Level"),
        Cell::new("Rating"),
    ]);
    table.add_row(vec![
        Cell::new(foreground),
        Cell::new(background),
        Cell::new(format!("{}:1", audit.ratio)).set_alignment(CellAlignment::Right),
        Cell::new(audit.level).fg(level_color(audit.level)),
        Cell::new(audit.label),
    ]);
    println!("{}", table);

    if !audit.passes && audit.passes_large {
        println!("(passes for large text)");
    }
    if let Some(color) = suggestion {
        println!("💡 Suggested foreground: {}", color);
    }
}
