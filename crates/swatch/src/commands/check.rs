use std::path::Path;

use owo_colors::{OwoColorize as _, Stream};
use palette_generator::{
    check_palette, fix_palette_accessibility_with, validate_palette, ColorPalette, Settings,
};
use serde_json::json;

use crate::report::{print_palette, print_validity};
use crate::Result;

pub struct CheckArgs<'a, W: std::io::Write> {
    /// A palette JSON file with all seven slots.
    pub file: &'a Path,
    pub fix: bool,
    /// Print a machine readable report instead of swatches.
    pub json: bool,
    pub settings: &'a Settings,
    pub stdout: &'a mut W,
}

fn json_report(palette: &ColorPalette, valid: bool) -> serde_json::Value {
    json!({
        "palette": palette,
        "checks": check_palette(palette),
        "valid": valid,
    })
}

/// Prints the contrast report of a palette file. Fails when the palette, or
/// the repaired palette with `fix`, does not meet WCAG AA.
pub fn run<W: std::io::Write>(args: CheckArgs<W>) -> Result<()> {
    let contents = std::fs::read_to_string(args.file)?;
    let palette: ColorPalette = serde_json::from_str(&contents)?;

    let valid = validate_palette(&palette);
    let repaired = (args.fix && !valid).then(|| {
        let fixed = fix_palette_accessibility_with(&palette, &args.settings.fixer);
        let valid = validate_palette(&fixed);
        (fixed, valid)
    });

    if args.json {
        let mut report = json_report(&palette, valid);
        if let Some((fixed, fixed_valid)) = &repaired {
            report["repaired"] = json_report(fixed, *fixed_valid);
        }

        writeln!(args.stdout, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        writeln!(
            args.stdout,
            "{}",
            format!("Checking {}", args.file.display())
                .if_supports_color(Stream::Stdout, |s| s.bold())
        )?;

        print_palette(args.stdout, &palette)?;
        print_validity(args.stdout, valid)?;

        if let Some((fixed, fixed_valid)) = &repaired {
            writeln!(args.stdout)?;
            writeln!(
                args.stdout,
                "{}",
                "Repaired palette".if_supports_color(Stream::Stdout, |s| s.bold())
            )?;
            print_palette(args.stdout, fixed)?;
            print_validity(args.stdout, *fixed_valid)?;

            writeln!(args.stdout)?;
            writeln!(args.stdout, "{}", serde_json::to_string_pretty(fixed)?)?;
        }
    }

    let final_valid = repaired.map_or(valid, |(_, fixed_valid)| fixed_valid);

    if !final_valid {
        return Err(crate::Error::General(String::from(
            "Palette does not meet WCAG AA",
        )));
    }

    Ok(())
}
