//! WCAG 2.1 contrast checks for text previews.

use crate::util::round_to;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn luminance(&self) -> f64 {
        get_luminance(self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
pub enum WcagLevel {
    #[strum(serialize = "AAA")]
    #[serde(rename = "AAA")]
    Aaa,
    #[strum(serialize = "AA")]
    #[serde(rename = "AA")]
    Aa,
    /// Passes only when treated as large text
    #[strum(serialize = "AA Large")]
    #[serde(rename = "AA Large")]
    AaLarge,
    #[strum(serialize = "Fail")]
    Fail,
}

/// Parses `#rrggbb` or `rrggbb`, case-insensitive.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

pub fn get_luminance(r: u8, g: u8, b: u8) -> f64 {
    let linear = |c: u8| {
        let srgb = c as f64 / 255.0;
        if srgb <= 0.03928 {
            srgb / 12.92
        } else {
            ((srgb + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
}

/// Ratio in [1, 21]. Returns 0.0 when either color does not parse; callers
/// treat exactly 0 as invalid input.
pub fn get_contrast_ratio(foreground: &str, background: &str) -> f64 {
    match (hex_to_rgb(foreground), hex_to_rgb(background)) {
        (Some(fg), Some(bg)) => contrast_between(fg, bg),
        _ => 0.0,
    }
}

fn contrast_between(fg: Rgb, bg: Rgb) -> f64 {
    let l1 = fg.luminance();
    let l2 = bg.luminance();
    let lighter = l1.max(l2);
    let darker = l1.min(l2);
    (lighter + 0.05) / (darker + 0.05)
}

/// Large text is at least 24px, or 18.67px when bold.
pub fn is_large_text(font_size: f64, is_bold: bool) -> bool {
    font_size >= 24.0 || (font_size >= 18.67 && is_bold)
}

pub fn get_wcag_level(contrast_ratio: f64, font_size: f64, is_bold: bool) -> WcagLevel {
    if is_large_text(font_size, is_bold) {
        if contrast_ratio >= 4.5 {
            WcagLevel::Aaa
        } else if contrast_ratio >= 3.0 {
            WcagLevel::Aa
        } else {
            WcagLevel::Fail
        }
    } else if contrast_ratio >= 7.0 {
        WcagLevel::Aaa
    } else if contrast_ratio >= 4.5 {
        WcagLevel::Aa
    } else if contrast_ratio >= 3.0 {
        WcagLevel::AaLarge
    } else {
        WcagLevel::Fail
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastRating {
    pub label: &'static str,
    pub color: &'static str,
    pub level: WcagLevel,
}

/// Size-independent rating used for badges.
pub fn get_contrast_rating(ratio: f64) -> ContrastRating {
    let (label, color, level) = if ratio >= 7.0 {
        ("Excellent", "#22C55E", WcagLevel::Aaa)
    } else if ratio >= 4.5 {
        ("Good", "#84CC16", WcagLevel::Aa)
    } else if ratio >= 3.0 {
        ("Large Text OK", "#EAB308", WcagLevel::AaLarge)
    } else {
        ("Poor", "#EF4444", WcagLevel::Fail)
    };
    ContrastRating {
        label,
        color,
        level,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastAudit {
    pub ratio: f64,
    pub level: WcagLevel,
    pub label: &'static str,
    pub color: &'static str,
    pub passes: bool,
    pub passes_large: bool,
}

pub fn audit_contrast(
    foreground: &str,
    background: &str,
    font_size: f64,
    is_bold: bool,
) -> ContrastAudit {
    let ratio = get_contrast_ratio(foreground, background);
    let level = get_wcag_level(ratio, font_size, is_bold);
    let rating = get_contrast_rating(ratio);

    ContrastAudit {
        ratio: round_to(ratio, 2),
        level,
        label: rating.label,
        color: rating.color,
        passes: matches!(level, WcagLevel::Aaa | WcagLevel::Aa),
        passes_large: level != WcagLevel::Fail,
    }
}

pub const DEFAULT_TARGET_RATIO: f64 = 4.5;
const ADJUST_STEP: u8 = 5;
const MAX_ADJUST_ITERATIONS: usize = 50;

/// Nudges the foreground toward white (dark backgrounds) or black (light
/// backgrounds) until `target_ratio` is met or the iteration budget runs
/// out. The result may still miss the target.
pub fn suggest_better_contrast(foreground: &str, background: &str, target_ratio: f64) -> String {
    let (Some(mut fg), Some(bg)) = (hex_to_rgb(foreground), hex_to_rgb(background)) else {
        return foreground.to_string();
    };

    let should_lighten = bg.luminance() < 0.5;
    let mut current_ratio = contrast_between(fg, bg);
    let mut iterations = 0;

    while current_ratio < target_ratio && iterations < MAX_ADJUST_ITERATIONS {
        let nudge = |c: u8| {
            if should_lighten {
                c.saturating_add(ADJUST_STEP)
            } else {
                c.saturating_sub(ADJUST_STEP)
            }
        };
        fg = Rgb {
            r: nudge(fg.r),
            g: nudge(fg.g),
            b: nudge(fg.b),
        };
        current_ratio = contrast_between(fg, bg);
        iterations += 1;
    }

    fg.to_hex()
}
