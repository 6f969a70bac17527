//! Accepting palettes produced by an external AI generator.
//!
//! The generator is expected to answer with a JSON object holding all seven
//! palette slots. Anything partial or malformed is rejected so the caller can
//! fall back to local synthesis.

use serde::Deserialize;

use crate::color_palette::{ColorPalette, PaletteSlot, TRANSPARENT, WHITE};
use crate::color_utils::normalize_hex;
use crate::{Error, Result};

/// Response body as sent by the generator. Every slot is optional here so a
/// missing one can be reported by name.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemotePalette {
    background: Option<String>,
    secondary_bg: Option<String>,
    secondary: Option<String>,
    primary: Option<String>,
    text: Option<String>,
    accent: Option<String>,
    transparent: Option<String>,
}

impl RemotePalette {
    fn slot(&self, slot: PaletteSlot) -> Option<&String> {
        match slot {
            PaletteSlot::Background => self.background.as_ref(),
            PaletteSlot::SecondaryBg => self.secondary_bg.as_ref(),
            PaletteSlot::Secondary => self.secondary.as_ref(),
            PaletteSlot::Primary => self.primary.as_ref(),
            PaletteSlot::Text => self.text.as_ref(),
            PaletteSlot::Accent => self.accent.as_ref(),
            PaletteSlot::Transparent => self.transparent.as_ref(),
        }
    }
}

fn opaque_slot(remote: &RemotePalette, slot: PaletteSlot) -> Result<String> {
    let value = remote.slot(slot).ok_or(Error::MissingSlot(slot))?;

    normalize_hex(value).ok_or_else(|| Error::InvalidColor {
        slot,
        value: value.clone(),
    })
}

/// Parses a generator response into a palette.
///
/// All seven keys must be present. `background` and `transparent` are forced
/// back to `#FFFFFF` and `#00000000` whatever the generator sent.
pub fn palette_from_remote(response: &str) -> Result<ColorPalette> {
    let remote: RemotePalette = serde_json::from_str(response)?;

    for slot in PaletteSlot::ALL {
        if remote.slot(slot).is_none() {
            return Err(Error::MissingSlot(slot));
        }
    }

    Ok(ColorPalette {
        background: WHITE.to_string(),
        secondary_bg: opaque_slot(&remote, PaletteSlot::SecondaryBg)?,
        secondary: opaque_slot(&remote, PaletteSlot::Secondary)?,
        primary: opaque_slot(&remote, PaletteSlot::Primary)?,
        text: opaque_slot(&remote, PaletteSlot::Text)?,
        accent: opaque_slot(&remote, PaletteSlot::Accent)?,
        transparent: TRANSPARENT.to_string(),
    })
}
