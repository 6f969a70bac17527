//! Turns a free-text description ("forest themed", "#FF70E5", "hippie 60's")
//! into a seven slot color palette that meets WCAG AA contrast where possible.
//!
//! Every function here is pure: no shared state, no I/O. Interpreting,
//! synthesizing, validating and fixing can run concurrently from any thread.

use thiserror::Error;

pub mod color_palette;
pub mod color_utils;
pub mod contrast;
pub mod fixer;
pub mod harmony;
pub mod prompt;
pub mod remote;
pub mod settings;
pub mod synthesizer;
pub mod themes;

pub use color_palette::{ColorPalette, PaletteSlot, TRANSPARENT, WHITE};
pub use contrast::{
    check_palette, contrast_ratio, format_ratio, meets_aa, validate_palette, ContrastCheck,
    ContrastLevel,
};
pub use fixer::{fix_palette_accessibility, fix_palette_accessibility_with, FixerOptions};
pub use harmony::{create_harmony_color, detect_harmony_pattern, HarmonyPattern};
pub use prompt::{interpret_prompt, InterpretationResult, MatchSource, DEFAULT_BASE_COLOR};
pub use remote::palette_from_remote;
pub use settings::{Settings, SETTINGS_FILE_NAME};
pub use synthesizer::synthesize_palette;
pub use themes::ThemeName;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Malformed palette response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
    #[error("Palette response is missing the `{0}` color")]
    MissingSlot(PaletteSlot),
    #[error("Invalid color `{value}` for `{slot}`")]
    InvalidColor { slot: PaletteSlot, value: String },
    #[error("Invalid settings: {0}")]
    InvalidSettings(#[from] serde_yaml::Error),
}

/// Where a generated palette came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteOrigin {
    Remote,
    Synthesized,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPalette {
    pub palette: ColorPalette,
    /// `None` when the palette came from the remote generator or the prompt
    /// could not be interpreted.
    pub interpretation: Option<InterpretationResult>,
    pub origin: PaletteOrigin,
    /// Whether the accessibility fixer had to run.
    pub fixed: bool,
    /// Final validity. Fixing is best-effort, so this can still be `false`.
    pub valid: bool,
}

/// Runs the whole flow for one prompt.
///
/// A remote response is used when it parses into a complete palette; otherwise
/// the prompt is interpreted and a palette synthesized locally. Either way the
/// palette is validated and repaired only if it fails.
pub fn generate_palette(
    prompt: &str,
    remote_response: Option<&str>,
    settings: &Settings,
) -> GeneratedPalette {
    let remote = remote_response.and_then(|response| palette_from_remote(response).ok());

    let (palette, interpretation, origin) = match remote {
        Some(palette) => (palette, None, PaletteOrigin::Remote),
        None => {
            let interpretation = interpret_prompt(prompt);
            let base_color = interpretation
                .as_ref()
                .map(|result| result.base_color.as_str())
                .unwrap_or(&settings.default_base_color);

            (
                synthesize_palette(base_color, prompt),
                interpretation,
                PaletteOrigin::Synthesized,
            )
        }
    };

    if validate_palette(&palette) {
        return GeneratedPalette {
            palette,
            interpretation,
            origin,
            fixed: false,
            valid: true,
        };
    }

    let palette = fix_palette_accessibility_with(&palette, &settings.fixer);
    let valid = validate_palette(&palette);

    GeneratedPalette {
        palette,
        interpretation,
        origin,
        fixed: true,
        valid,
    }
}
