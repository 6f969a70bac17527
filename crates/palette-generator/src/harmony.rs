use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::color_utils::{hex_to_hsl, hsl_to_hex};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyPattern {
    Monochromatic,
    #[default]
    Analogous,
    Triadic,
    Tetradic,
    Complementary,
    SplitComplementary,
}

/// How a harmony color is derived from its base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonyRule {
    /// Hue rotation in degrees.
    pub hue_shift: f32,
    /// Added to the HSL saturation, in percentage points.
    pub saturation_delta: f32,
    /// The derived lightness is clamped into this inclusive band.
    pub lightness_range: (f32, f32),
}

const HARMONY_RULES: [(HarmonyPattern, HarmonyRule); 6] = [
    (
        HarmonyPattern::Monochromatic,
        HarmonyRule {
            hue_shift: 0.0,
            saturation_delta: 5.0,
            lightness_range: (45.0, 70.0),
        },
    ),
    (
        HarmonyPattern::Analogous,
        HarmonyRule {
            hue_shift: 30.0,
            saturation_delta: 10.0,
            lightness_range: (35.0, 65.0),
        },
    ),
    (
        HarmonyPattern::Triadic,
        HarmonyRule {
            hue_shift: 120.0,
            saturation_delta: 15.0,
            lightness_range: (40.0, 65.0),
        },
    ),
    (
        HarmonyPattern::Tetradic,
        HarmonyRule {
            hue_shift: 60.0,
            saturation_delta: 15.0,
            lightness_range: (40.0, 65.0),
        },
    ),
    (
        HarmonyPattern::Complementary,
        HarmonyRule {
            hue_shift: 180.0,
            saturation_delta: 20.0,
            lightness_range: (40.0, 60.0),
        },
    ),
    (
        HarmonyPattern::SplitComplementary,
        HarmonyRule {
            hue_shift: 150.0,
            saturation_delta: 15.0,
            lightness_range: (40.0, 65.0),
        },
    ),
];

impl HarmonyPattern {
    pub const ALL: [HarmonyPattern; 6] = [
        HarmonyPattern::Monochromatic,
        HarmonyPattern::Analogous,
        HarmonyPattern::Triadic,
        HarmonyPattern::Tetradic,
        HarmonyPattern::Complementary,
        HarmonyPattern::SplitComplementary,
    ];

    pub fn rule(&self) -> HarmonyRule {
        HARMONY_RULES
            .iter()
            .find(|(pattern, _)| pattern == self)
            .map(|(_, rule)| *rule)
            .unwrap_or(HARMONY_RULES[1].1)
    }

    pub fn name(&self) -> &'static str {
        match self {
            HarmonyPattern::Monochromatic => "monochromatic",
            HarmonyPattern::Analogous => "analogous",
            HarmonyPattern::Triadic => "triadic",
            HarmonyPattern::Tetradic => "tetradic",
            HarmonyPattern::Complementary => "complementary",
            HarmonyPattern::SplitComplementary => "split-complementary",
        }
    }
}

impl fmt::Display for HarmonyPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for HarmonyPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HarmonyPattern::ALL
            .into_iter()
            .find(|pattern| pattern.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown harmony pattern `{}`", s))
    }
}

/// Keyword table in priority order. Pattern names come before style
/// adjectives, and "split complementary" before plain "complementary".
static PATTERN_KEYWORDS: Lazy<Vec<(Regex, HarmonyPattern)>> = Lazy::new(|| {
    [
        (r"\bsplit[\s-]?complementary\b", HarmonyPattern::SplitComplementary),
        (r"\bcomplementary\b", HarmonyPattern::Complementary),
        (r"\bmonochrom(?:e|atic)\b", HarmonyPattern::Monochromatic),
        (r"\banalogous\b", HarmonyPattern::Analogous),
        (r"\btriadic\b", HarmonyPattern::Triadic),
        (r"\btetradic\b", HarmonyPattern::Tetradic),
        (r"\b(?:vibrant|playful|bold|fun)\b", HarmonyPattern::Triadic),
        (r"\b(?:elegant|calm|harmonious|serene|peaceful)\b", HarmonyPattern::Analogous),
        (r"\b(?:energetic|dynamic|striking|contrasting)\b", HarmonyPattern::Complementary),
        (r"\b(?:minimal|minimalist|subtle|clean)\b", HarmonyPattern::Monochromatic),
        (r"\b(?:complex|eclectic|diverse)\b", HarmonyPattern::Tetradic),
        (r"\b(?:balanced|sophisticated)\b", HarmonyPattern::SplitComplementary),
    ]
    .into_iter()
    .map(|(re, pattern)| (Regex::new(re).unwrap(), pattern))
    .collect()
});

pub fn detect_harmony_pattern(prompt: &str) -> HarmonyPattern {
    let prompt = prompt.to_lowercase();

    PATTERN_KEYWORDS
        .iter()
        .find(|(re, _)| re.is_match(&prompt))
        .map(|(_, pattern)| *pattern)
        .unwrap_or_default()
}

/// Derives a color related to, but distinguishable from, `base_color`.
pub fn create_harmony_color(base_color: &str, pattern: HarmonyPattern) -> String {
    let rule = pattern.rule();
    let (min_lightness, max_lightness) = rule.lightness_range;

    let mut hsl = hex_to_hsl(base_color);
    hsl.hue = (hsl.hue + rule.hue_shift).rem_euclid(360.0);
    hsl.saturation = (hsl.saturation + rule.saturation_delta).clamp(0.0, 100.0);
    hsl.lightness = hsl.lightness.clamp(min_lightness, max_lightness);

    hsl_to_hex(hsl)
}
