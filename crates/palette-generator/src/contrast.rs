use serde::Serialize;

use crate::color_palette::{ColorPalette, PaletteSlot, WHITE};
use crate::color_utils::relative_luminance;

/// WCAG contrast levels, from least to most strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContrastLevel {
    /// Large text (18pt, or 14pt bold) at level AA.
    AaLarge,
    Aa,
    Aaa,
}

impl ContrastLevel {
    pub fn threshold(&self) -> f64 {
        match self {
            ContrastLevel::AaLarge => 3.0,
            ContrastLevel::Aa => 4.5,
            ContrastLevel::Aaa => 7.0,
        }
    }

    /// The strictest level a ratio satisfies, if any.
    pub fn for_ratio(ratio: f64) -> Option<ContrastLevel> {
        [ContrastLevel::Aaa, ContrastLevel::Aa, ContrastLevel::AaLarge]
            .into_iter()
            .find(|level| ratio >= level.threshold())
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContrastLevel::AaLarge => "AA Large",
            ContrastLevel::Aa => "AA",
            ContrastLevel::Aaa => "AAA",
        }
    }
}

/// Foreground/background pairs that have to reach AA for a palette to be valid.
pub const REQUIRED_PAIRS: [(PaletteSlot, PaletteSlot); 5] = [
    (PaletteSlot::Text, PaletteSlot::Background),
    (PaletteSlot::Text, PaletteSlot::SecondaryBg),
    (PaletteSlot::Primary, PaletteSlot::Background),
    (PaletteSlot::Primary, PaletteSlot::SecondaryBg),
    (PaletteSlot::Accent, PaletteSlot::Background),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastCheck {
    pub foreground: PaletteSlot,
    pub background: PaletteSlot,
    pub ratio: f64,
    pub passes: bool,
}

/// `(L1 + 0.05) / (L2 + 0.05)` with `L1` the lighter of the two luminances.
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);

    let lighter = la.max(lb);
    let darker = la.min(lb);

    (lighter + 0.05) / (darker + 0.05)
}

pub fn meets_aa(a: &str, b: &str) -> bool {
    contrast_ratio(a, b) >= ContrastLevel::Aa.threshold()
}

pub fn check_palette(palette: &ColorPalette) -> Vec<ContrastCheck> {
    REQUIRED_PAIRS
        .iter()
        .map(|&(foreground, background)| {
            let ratio = contrast_ratio(palette.get(foreground), palette.get(background));

            ContrastCheck {
                foreground,
                background,
                ratio,
                passes: ratio >= ContrastLevel::Aa.threshold(),
            }
        })
        .collect()
}

pub fn validate_palette(palette: &ColorPalette) -> bool {
    if !palette.background.eq_ignore_ascii_case(WHITE) {
        return false;
    }

    check_palette(palette).iter().all(|check| check.passes)
}

/// Formats a ratio for display, e.g. `4.52:1`.
pub fn format_ratio(ratio: f64) -> String {
    format!("{:.2}:1", ratio)
}
