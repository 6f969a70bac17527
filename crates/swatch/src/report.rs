use owo_colors::{OwoColorize as _, Stream};
use palette_generator::color_utils::hex_to_rgb;
use palette_generator::{check_palette, format_ratio, ColorPalette, ContrastCheck, ContrastLevel};

use crate::Result;

/// A truecolor block for `hex`. Values that aren't opaque colors, like the
/// transparent slot, get a hatched block instead.
pub(crate) fn swatch(hex: &str) -> String {
    match hex_to_rgb(hex) {
        Some(rgb) => "██"
            .if_supports_color(Stream::Stdout, |s| s.truecolor(rgb.red, rgb.green, rgb.blue))
            .to_string(),
        None => "░░".to_string(),
    }
}

/// `4.52:1 AA`, green when the ratio reaches AA and red otherwise.
pub(crate) fn badge(ratio: f64) -> String {
    let level = ContrastLevel::for_ratio(ratio)
        .map(|level| level.label())
        .unwrap_or("FAIL");
    let text = format!("{} {}", format_ratio(ratio), level);

    if ratio >= ContrastLevel::Aa.threshold() {
        text.if_supports_color(Stream::Stdout, |s| s.green())
            .to_string()
    } else {
        text.if_supports_color(Stream::Stdout, |s| s.red()).to_string()
    }
}

fn contrast_line<W: std::io::Write>(stdout: &mut W, check: &ContrastCheck) -> Result<()> {
    let pair = format!("{} on {}", check.foreground, check.background);

    writeln!(stdout, "    {:<26} {}", pair, badge(check.ratio))?;

    Ok(())
}

/// Prints every slot with its swatch followed by the required contrast pairs.
pub(crate) fn print_palette<W: std::io::Write>(
    stdout: &mut W,
    palette: &ColorPalette,
) -> Result<()> {
    writeln!(stdout, "  Colors:")?;
    for (slot, color) in palette.slots() {
        writeln!(
            stdout,
            "    {:<12} {} {}",
            slot.to_string(),
            swatch(color),
            color
        )?;
    }

    writeln!(stdout, "  Contrast:")?;
    for check in check_palette(palette) {
        contrast_line(stdout, &check)?;
    }

    Ok(())
}

pub(crate) fn print_validity<W: std::io::Write>(stdout: &mut W, valid: bool) -> Result<()> {
    if valid {
        writeln!(
            stdout,
            "  {}",
            "✓ Meets WCAG AA".if_supports_color(Stream::Stdout, |s| s.green())
        )?;
    } else {
        writeln!(
            stdout,
            "  {}",
            "✗ Does not meet WCAG AA".if_supports_color(Stream::Stdout, |s| s.red())
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette_generator::synthesize_palette;

    #[test]
    fn badges_name_the_best_level() {
        owo_colors::set_override(false);

        assert_eq!(badge(21.0), "21.00:1 AAA");
        assert_eq!(badge(4.54), "4.54:1 AA");
        assert_eq!(badge(3.2), "3.20:1 AA Large");
        assert_eq!(badge(1.5), "1.50:1 FAIL");
    }

    #[test]
    fn transparent_gets_a_placeholder_swatch() {
        assert_eq!(swatch("#00000000"), "░░");
    }

    #[test]
    fn prints_every_slot_and_pair() {
        let mut fake_stdout = std::io::Cursor::new(Vec::new());

        print_palette(&mut fake_stdout, &synthesize_palette("#2B6CB0", "")).unwrap();

        let fake_stdout = String::from_utf8(fake_stdout.into_inner()).unwrap();

        assert!(fake_stdout.contains("secondaryBg"));
        assert!(fake_stdout.contains("#EEF3F9"));
        assert!(fake_stdout.contains("text on secondaryBg"));
        assert!(fake_stdout.contains("accent on background"));
    }
}
