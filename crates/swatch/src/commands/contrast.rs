use palette_generator::color_utils::normalize_hex;
use palette_generator::contrast_ratio;

use crate::report::{badge, swatch};
use crate::Result;

pub struct ContrastArgs<'a, W: std::io::Write> {
    pub foreground: &'a str,
    pub background: &'a str,
    pub stdout: &'a mut W,
}

fn parse_color(value: &str) -> Result<String> {
    normalize_hex(value)
        .ok_or_else(|| crate::Error::General(format!("`{}` is not a hex color", value)))
}

pub fn run<W: std::io::Write>(args: ContrastArgs<W>) -> Result<()> {
    let foreground = parse_color(args.foreground)?;
    let background = parse_color(args.background)?;

    let ratio = contrast_ratio(&foreground, &background);

    writeln!(
        args.stdout,
        "{} {} on {} {}: {}",
        swatch(&foreground),
        foreground,
        swatch(&background),
        background,
        badge(ratio)
    )?;

    Ok(())
}
