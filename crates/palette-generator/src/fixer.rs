use serde::Deserialize;

use crate::color_palette::{ColorPalette, TRANSPARENT, WHITE};
use crate::color_utils::{relative_luminance, shift_channels};
use crate::contrast::{contrast_ratio, ContrastLevel};

/// Parameters of the stepped contrast repair.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct FixerOptions {
    /// Minimum contrast ratio a repaired slot should reach.
    pub threshold: f64,
    /// Amount added to or subtracted from every channel per iteration.
    pub step: u8,
    pub max_iterations: usize,
}

impl Default for FixerOptions {
    fn default() -> Self {
        FixerOptions {
            threshold: ContrastLevel::Aa.threshold(),
            step: 8,
            max_iterations: 30,
        }
    }
}

/// Walks `color` away from `background` until the pair reaches the threshold
/// or the iteration budget runs out. Colors are darkened against light
/// backgrounds and lightened against dark ones.
///
/// The result is best-effort: when the budget is exhausted the last candidate
/// is returned even if it still fails.
pub fn adjust_color_for_contrast(color: &str, background: &str, options: &FixerOptions) -> String {
    if contrast_ratio(color, background) >= options.threshold {
        return color.to_string();
    }

    let step = if relative_luminance(background) > 0.5 {
        -(options.step as i32)
    } else {
        options.step as i32
    };

    let mut candidate = color.to_string();

    for _ in 0..options.max_iterations {
        candidate = shift_channels(&candidate, step, step, step);

        if contrast_ratio(&candidate, background) >= options.threshold {
            break;
        }
    }

    candidate
}

pub fn fix_palette_accessibility(palette: &ColorPalette) -> ColorPalette {
    fix_palette_accessibility_with(palette, &FixerOptions::default())
}

/// Repairs every slot that fails its contrast requirement.
///
/// `text` and `primary` are solved against `background` and then against
/// `secondaryBg`. The second pass can undo the first, so callers should run
/// `validate_palette` on the result.
pub fn fix_palette_accessibility_with(palette: &ColorPalette, options: &FixerOptions) -> ColorPalette {
    let secondary_bg = palette.secondary_bg.clone();

    let against_both = |color: &str| {
        let on_background = adjust_color_for_contrast(color, WHITE, options);
        adjust_color_for_contrast(&on_background, &secondary_bg, options)
    };

    ColorPalette {
        background: WHITE.to_string(),
        text: against_both(&palette.text),
        primary: against_both(&palette.primary),
        accent: adjust_color_for_contrast(&palette.accent, WHITE, options),
        // White text is drawn on top of `secondary`.
        secondary: adjust_color_for_contrast(&palette.secondary, WHITE, options),
        transparent: TRANSPARENT.to_string(),
        secondary_bg,
    }
}
