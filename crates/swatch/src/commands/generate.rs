use std::path::Path;

use owo_colors::{OwoColorize as _, Stream};
use palette_generator::{
    generate_palette, GeneratedPalette, InterpretationResult, MatchSource, PaletteOrigin, Settings,
};
use rayon::prelude::*;

use crate::report::{print_palette, print_validity};
use crate::Result;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Swatches and contrast badges.
    #[default]
    Report,
    Css,
    Json,
}

pub struct GenerateArgs<'a, W: std::io::Write> {
    pub prompts: &'a [String],
    /// A saved response of the remote generator, used for every prompt.
    pub remote_response: Option<&'a Path>,
    pub format: OutputFormat,
    pub settings: &'a Settings,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: GenerateArgs<W>) -> Result<()> {
    if args.prompts.is_empty() {
        return Err(crate::Error::General(String::from("No prompts given")));
    }

    let remote_response = match args.remote_response {
        Some(path) => Some(std::fs::read_to_string(path)?),
        None => None,
    };

    let generated: Vec<GeneratedPalette> = args
        .prompts
        .par_iter()
        .map(|prompt| generate_palette(prompt, remote_response.as_deref(), args.settings))
        .collect();

    for (prompt, generated) in args.prompts.iter().zip(&generated) {
        match args.format {
            OutputFormat::Report => report(args.stdout, prompt, generated, args.settings)?,
            OutputFormat::Css => write!(
                args.stdout,
                "{}",
                generated.palette.generate_css(&args.settings.css_selector)
            )?,
            OutputFormat::Json => writeln!(
                args.stdout,
                "{}",
                serde_json::to_string_pretty(&generated.palette)?
            )?,
        }
    }

    Ok(())
}

fn describe(interpretation: Option<&InterpretationResult>, settings: &Settings) -> String {
    let Some(interpretation) = interpretation else {
        return format!(
            "Nothing recognized, using {}",
            settings.default_base_color
        );
    };

    let mut description = match (interpretation.source, interpretation.theme) {
        (MatchSource::HexLiteral, _) => format!("Hex color {}", interpretation.base_color),
        (MatchSource::Theme, Some(theme)) => {
            format!("Theme {} ({})", theme, interpretation.base_color)
        }
        (MatchSource::ContextualTheme, Some(theme)) => {
            format!("Theme {} by association ({})", theme, interpretation.base_color)
        }
        _ => format!("Named color {}", interpretation.base_color),
    };

    if let Some(accent) = &interpretation.accent {
        description.push_str(&format!(", accent {}", accent));
    }

    description
}

fn report<W: std::io::Write>(
    stdout: &mut W,
    prompt: &str,
    generated: &GeneratedPalette,
    settings: &Settings,
) -> Result<()> {
    writeln!(
        stdout,
        "{}",
        format!("Palette for \"{}\"", prompt).if_supports_color(Stream::Stdout, |s| s.bold())
    )?;

    match generated.origin {
        PaletteOrigin::Remote => writeln!(stdout, "  Using the remote generator's palette")?,
        PaletteOrigin::Synthesized => writeln!(
            stdout,
            "  {}",
            describe(generated.interpretation.as_ref(), settings)
        )?,
    }

    print_palette(stdout, &generated.palette)?;

    if generated.fixed {
        writeln!(
            stdout,
            "  {}",
            "Adjusted colors to improve contrast".if_supports_color(Stream::Stdout, |s| s.yellow())
        )?;
    }

    print_validity(stdout, generated.valid)?;
    writeln!(stdout)?;

    Ok(())
}
