use crate::color_palette::{ColorPalette, TRANSPARENT, WHITE};
use crate::color_utils::{mix, rgb_or_default, rgb_to_hex, to_hex};
use crate::harmony::{create_harmony_color, detect_harmony_pattern};
use crate::prompt::{interpret_prompt, requested_accent};

/// How far `secondaryBg` is pulled toward white.
const SECONDARY_BG_TINT: f64 = 0.92;
/// Share of each base channel kept in the near-black `secondary`.
const SECONDARY_SHADE: f64 = 0.15;
/// Damping applied to the base and to its channel mean when deriving `text`.
const TEXT_DAMPING: f64 = 0.3;
const TEXT_FLOOR: f64 = 20.0;

/// Builds the seven slot palette for `base_color`, reading the prompt for an
/// explicitly requested accent, a second named color or a harmony pattern.
pub fn synthesize_palette(base_color: &str, prompt: &str) -> ColorPalette {
    let primary = to_hex(rgb_or_default(base_color));

    ColorPalette {
        background: WHITE.to_string(),
        secondary_bg: mix(&primary, WHITE, SECONDARY_BG_TINT),
        secondary: mix(&primary, "#000000", 1.0 - SECONDARY_SHADE),
        text: text_color(&primary),
        accent: accent_color(&primary, prompt),
        transparent: TRANSPARENT.to_string(),
        primary,
    }
}

/// A low saturation near-black that still carries the base hue.
fn text_color(base: &str) -> String {
    let rgb = rgb_or_default(base);
    let channels = [rgb.red as f64, rgb.green as f64, rgb.blue as f64];
    let mean = channels.iter().sum::<f64>() / 3.0;

    let [r, g, b] =
        channels.map(|c| ((c * TEXT_DAMPING + mean * TEXT_DAMPING) / 2.0).max(TEXT_FLOOR));

    rgb_to_hex(r, g, b)
}

fn accent_color(base: &str, prompt: &str) -> String {
    if let Some(accent) = requested_accent(prompt) {
        return accent;
    }

    let explicit = interpret_prompt(prompt)
        .and_then(|result| result.explicit_secondary().map(str::to_string));

    match explicit {
        Some(color) if !color.eq_ignore_ascii_case(base) => color,
        _ => create_harmony_color(base, detect_harmony_pattern(prompt)),
    }
}
