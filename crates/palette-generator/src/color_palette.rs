use serde::{Deserialize, Serialize};
use std::fmt;

/// The page background of every palette. Never derived from the prompt.
pub const WHITE: &str = "#FFFFFF";

pub const TRANSPARENT: &str = "#00000000";

/// A seven slot palette. Every opaque slot holds an uppercase `#RRGGBB` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    pub background: String,
    pub secondary_bg: String,
    pub secondary: String,
    pub primary: String,
    pub text: String,
    pub accent: String,
    pub transparent: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaletteSlot {
    Background,
    SecondaryBg,
    Secondary,
    Primary,
    Text,
    Accent,
    Transparent,
}

impl PaletteSlot {
    pub const ALL: [PaletteSlot; 7] = [
        PaletteSlot::Background,
        PaletteSlot::SecondaryBg,
        PaletteSlot::Secondary,
        PaletteSlot::Primary,
        PaletteSlot::Text,
        PaletteSlot::Accent,
        PaletteSlot::Transparent,
    ];

    /// Name used on the wire, e.g. `secondaryBg`.
    pub fn name(&self) -> &'static str {
        match self {
            PaletteSlot::Background => "background",
            PaletteSlot::SecondaryBg => "secondaryBg",
            PaletteSlot::Secondary => "secondary",
            PaletteSlot::Primary => "primary",
            PaletteSlot::Text => "text",
            PaletteSlot::Accent => "accent",
            PaletteSlot::Transparent => "transparent",
        }
    }

    /// Name used for CSS custom properties, e.g. `secondary-bg`.
    pub fn css_name(&self) -> &'static str {
        match self {
            PaletteSlot::SecondaryBg => "secondary-bg",
            other => other.name(),
        }
    }
}

impl fmt::Display for PaletteSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl ColorPalette {
    pub fn get(&self, slot: PaletteSlot) -> &str {
        match slot {
            PaletteSlot::Background => &self.background,
            PaletteSlot::SecondaryBg => &self.secondary_bg,
            PaletteSlot::Secondary => &self.secondary,
            PaletteSlot::Primary => &self.primary,
            PaletteSlot::Text => &self.text,
            PaletteSlot::Accent => &self.accent,
            PaletteSlot::Transparent => &self.transparent,
        }
    }

    pub fn slots(&self) -> impl Iterator<Item = (PaletteSlot, &str)> + '_ {
        PaletteSlot::ALL.into_iter().map(|slot| (slot, self.get(slot)))
    }

    pub fn generate_css(&self, selector: &str) -> String {
        let mut css = String::new();

        css.push_str(&format!("{} {{\n", selector));

        for (slot, color) in self.slots() {
            css.push_str(&format!("  --color-{}: {};\n", slot.css_name(), color));
        }

        css.push_str("}\n");

        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn sample() -> ColorPalette {
        ColorPalette {
            background: WHITE.to_string(),
            secondary_bg: "#EEF3F9".to_string(),
            secondary: "#06101A".to_string(),
            primary: "#2B6CB0".to_string(),
            text: "#17212B".to_string(),
            accent: "#2220BB".to_string(),
            transparent: TRANSPARENT.to_string(),
        }
    }

    #[test]
    fn serializes_slots_in_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["secondaryBg"], "#EEF3F9");
        assert_eq!(json["transparent"], "#00000000");
        assert!(json.get("secondary_bg").is_none());
    }

    #[test]
    fn iterates_slots_in_declaration_order() {
        let names: Vec<_> = sample().slots().map(|(slot, _)| slot.to_string()).collect();

        assert_eq!(
            names,
            vec![
                "background",
                "secondaryBg",
                "secondary",
                "primary",
                "text",
                "accent",
                "transparent"
            ]
        );
    }

    #[test]
    fn generates_css_custom_properties() {
        let css = sample().generate_css(":root");

        assert_eq!(
            css,
            indoc! {"
            :root {
              --color-background: #FFFFFF;
              --color-secondary-bg: #EEF3F9;
              --color-secondary: #06101A;
              --color-primary: #2B6CB0;
              --color-text: #17212B;
              --color-accent: #2220BB;
              --color-transparent: #00000000;
            }
            "}
        );
    }
}
