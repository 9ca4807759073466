use crate::util::to_fixed;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Named typographic ratios, in catalogue order. Order matters: name lookup
/// keeps the first-declared ratio when two are equally close.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(ascii_case_insensitive)]
pub enum KnownRatio {
    #[strum(to_string = "Minor Second", serialize = "minor-second")]
    MinorSecond,
    #[strum(to_string = "Major Second", serialize = "major-second")]
    MajorSecond,
    #[strum(to_string = "Minor Third", serialize = "minor-third")]
    MinorThird,
    #[strum(to_string = "Major Third", serialize = "major-third")]
    MajorThird,
    #[strum(to_string = "Perfect Fourth", serialize = "perfect-fourth")]
    PerfectFourth,
    #[strum(to_string = "Augmented Fourth", serialize = "augmented-fourth")]
    AugmentedFourth,
    #[strum(to_string = "Perfect Fifth", serialize = "perfect-fifth")]
    PerfectFifth,
    #[strum(to_string = "Golden Ratio", serialize = "golden-ratio")]
    GoldenRatio,
}

impl KnownRatio {
    pub fn value(&self) -> f64 {
        match self {
            Self::MinorSecond => 1.067,
            Self::MajorSecond => 1.125,
            Self::MinorThird => 1.2,
            Self::MajorThird => 1.25,
            Self::PerfectFourth => 1.333,
            Self::AugmentedFourth => 1.414,
            Self::PerfectFifth => 1.5,
            Self::GoldenRatio => 1.618,
        }
    }
}

pub fn get_all_ratios() -> Vec<(KnownRatio, f64)> {
    KnownRatio::iter().map(|r| (r, r.value())).collect()
}

/// Nearest catalogue name for `ratio`, or `Custom (x.xxx)` when nothing is
/// within 0.01.
pub fn get_ratio_name(ratio: f64) -> String {
    let closest = KnownRatio::iter()
        .reduce(|prev, curr| {
            if (curr.value() - ratio).abs() < (prev.value() - ratio).abs() {
                curr
            } else {
                prev
            }
        })
        .unwrap_or(KnownRatio::MinorSecond);

    if (closest.value() - ratio).abs() < 0.01 {
        return closest.to_string();
    }

    format!("Custom ({})", to_fixed(ratio, 3))
}

/// Accepts either a plain number (`1.25`) or a catalogue name
/// (`golden-ratio`, `Perfect Fourth`).
pub fn parse_ratio(s: &str) -> Result<f64, String> {
    let s = s.trim();
    if let Ok(v) = s.parse::<f64>() {
        return Ok(v);
    }
    KnownRatio::from_str(s)
        .map(|r| r.value())
        .map_err(|_| format!("'{}' is neither a number nor a known ratio name", s))
}
