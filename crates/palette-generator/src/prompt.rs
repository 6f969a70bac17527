use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

use crate::color_utils::{adjust_brightness, adjust_saturation, normalize_hex, shift_channels};
use crate::themes::{
    accent_color, named_color, ThemeName, CONTEXTUAL_KEYWORDS, NAMED_COLOR_REGEX, THEME_KEYWORDS,
};

/// Base color used when a prompt names no color or theme at all.
pub const DEFAULT_BASE_COLOR: &str = "#2B6CB0";

static HEX_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#([0-9a-fA-F]{6}|[0-9a-fA-F]{3})\b").unwrap());

static ACCENT_REQUEST_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\b(?:accent|highlight)s?(?:\s+colou?rs?)?(?:\s+(?:in|on|for)\s+(?:the\s+)?[a-z]+)?\s+(?:of|is|are|in|as|should\s+be|:)\s*(?:an?\s+)?(#[0-9a-f]{6}\b|#[0-9a-f]{3}\b|[a-z]+)",
        r"(?:\bwith\s+)?(?:\ban?\s+)?(#[0-9a-f]{6}\b|#[0-9a-f]{3}\b|\b[a-z]+)\s+(?:accents?|highlights?)\b",
    ]
    .into_iter()
    .map(|re| Regex::new(re).unwrap())
    .collect()
});

static DARK_MODIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:dark|deep|rich)\b").unwrap());
static LIGHT_MODIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:light|pale|soft)\b").unwrap());
static VIBRANT_MODIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:vibrant|bold|vivid)\b").unwrap());
static PASTEL_MODIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:pastel|gentle|muted)\b").unwrap());
static COOL_MODIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bcool\b").unwrap());
static WARM_MODIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bwarm\b").unwrap());

/// Which strategy produced an interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSource {
    HexLiteral,
    Theme,
    ContextualTheme,
    NamedColor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpretationResult {
    pub base_color: String,
    pub theme: Option<ThemeName>,
    /// Every other color the prompt mentioned, in order of appearance.
    pub additional_colors: Vec<String>,
    /// An accent the prompt asked for explicitly.
    pub accent: Option<String>,
    pub source: MatchSource,
}

impl InterpretationResult {
    /// The second color the prompt spelled out itself, as a hex literal or a
    /// color name. Theme companions don't count.
    pub fn explicit_secondary(&self) -> Option<&str> {
        match self.source {
            MatchSource::HexLiteral | MatchSource::NamedColor => self
                .additional_colors
                .iter()
                .map(String::as_str)
                .find(|color| !color.eq_ignore_ascii_case(&self.base_color)),
            MatchSource::Theme | MatchSource::ContextualTheme => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Matcher {
    HexLiteral,
    Theme,
    ContextualTheme,
    NamedColor,
}

/// Evaluated in order; the first matcher to produce a result wins.
const MATCHERS: [Matcher; 4] = [
    Matcher::HexLiteral,
    Matcher::Theme,
    Matcher::ContextualTheme,
    Matcher::NamedColor,
];

impl Matcher {
    fn interpret(&self, prompt: &str) -> Option<InterpretationResult> {
        match self {
            Matcher::HexLiteral => match_hex_literals(prompt),
            Matcher::Theme => match_theme(prompt, &THEME_KEYWORDS, MatchSource::Theme),
            Matcher::ContextualTheme => {
                match_theme(prompt, &CONTEXTUAL_KEYWORDS, MatchSource::ContextualTheme)
            }
            Matcher::NamedColor => match_named_colors(prompt),
        }
    }
}

fn match_hex_literals(prompt: &str) -> Option<InterpretationResult> {
    let colors: Vec<String> = HEX_REGEX
        .find_iter(prompt)
        .filter_map(|m| normalize_hex(m.as_str()))
        .collect();

    let base_color = colors.first()?.clone();

    Some(InterpretationResult {
        base_color,
        theme: None,
        additional_colors: colors,
        accent: None,
        source: MatchSource::HexLiteral,
    })
}

fn match_theme(
    prompt: &str,
    table: &[(Regex, ThemeName)],
    source: MatchSource,
) -> Option<InterpretationResult> {
    let (_, name) = table.iter().find(|(re, _)| re.is_match(prompt))?;
    let theme = name.theme();

    Some(InterpretationResult {
        base_color: theme.primary.to_string(),
        theme: Some(*name),
        additional_colors: theme.companions.iter().map(|c| c.to_string()).collect(),
        accent: None,
        source,
    })
}

fn match_named_colors(prompt: &str) -> Option<InterpretationResult> {
    let mut colors = NAMED_COLOR_REGEX
        .find_iter(prompt)
        .filter_map(|m| named_color(m.as_str()));

    let first = colors.next()?;

    let mut additional_colors: Vec<String> = vec![];
    for color in colors {
        if color != first && !additional_colors.iter().any(|c| c == color) {
            additional_colors.push(color.to_string());
        }
    }

    Some(InterpretationResult {
        base_color: Modifiers::detect(prompt).apply(first),
        theme: None,
        additional_colors,
        accent: None,
        source: MatchSource::NamedColor,
    })
}

/// Adjectives that tweak a named color. Each is detected independently.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Modifiers {
    dark: bool,
    light: bool,
    vibrant: bool,
    pastel: bool,
    cool: bool,
    warm: bool,
}

impl Modifiers {
    fn detect(prompt: &str) -> Self {
        Modifiers {
            dark: DARK_MODIFIER.is_match(prompt),
            light: LIGHT_MODIFIER.is_match(prompt),
            vibrant: VIBRANT_MODIFIER.is_match(prompt),
            pastel: PASTEL_MODIFIER.is_match(prompt),
            cool: COOL_MODIFIER.is_match(prompt),
            warm: WARM_MODIFIER.is_match(prompt),
        }
    }

    /// Brightness first, then saturation, then the temperature nudge.
    fn apply(&self, hex: &str) -> String {
        let mut color = hex.to_string();

        if self.dark {
            color = adjust_brightness(&color, -30.0);
        }
        if self.light {
            color = adjust_brightness(&color, 30.0);
        }

        if self.vibrant {
            color = adjust_saturation(&color, 20.0);
        }
        if self.pastel {
            color = adjust_brightness(&adjust_saturation(&color, -20.0), 40.0);
        }

        if self.cool {
            color = shift_channels(&color, -20, 0, 20);
        }
        if self.warm {
            color = shift_channels(&color, 20, 0, -20);
        }

        color
    }
}

fn resolve_accent(token: &str) -> Option<String> {
    if token.starts_with('#') {
        normalize_hex(token)
    } else {
        accent_color(token).map(str::to_string)
    }
}

/// Finds an explicit accent request and returns the resolved accent together
/// with the prompt with that request cut out.
fn split_accent_request(prompt: &str) -> (Option<String>, Cow<'_, str>) {
    for re in ACCENT_REQUEST_REGEXES.iter() {
        for captures in re.captures_iter(prompt) {
            let (Some(clause), Some(token)) = (captures.get(0), captures.get(1)) else {
                continue;
            };

            if let Some(accent) = resolve_accent(token.as_str()) {
                let remainder = format!("{} {}", &prompt[..clause.start()], &prompt[clause.end()..]);
                return (Some(accent), Cow::Owned(remainder));
            }
        }
    }

    (None, Cow::Borrowed(prompt))
}

/// The accent explicitly requested by a prompt ("accent color of gold",
/// "highlights should be #FFAA00"), if any.
pub fn requested_accent(prompt: &str) -> Option<String> {
    split_accent_request(&prompt.to_lowercase()).0
}

/// Interprets free text as a base color, an optional theme and any other colors
/// it mentions. Returns `None` when the prompt names no color or theme.
pub fn interpret_prompt(prompt: &str) -> Option<InterpretationResult> {
    let prompt = prompt.trim().to_lowercase();

    if prompt.is_empty() {
        return None;
    }

    let (accent, remainder) = split_accent_request(&prompt);

    MATCHERS
        .iter()
        .find_map(|matcher| matcher.interpret(&remainder))
        .map(|result| InterpretationResult { accent, ..result })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_prompt_is_not_interpreted() {
        assert_eq!(interpret_prompt(""), None);
        assert_eq!(interpret_prompt("   "), None);
    }

    #[test]
    fn unknown_words_are_not_interpreted() {
        assert_eq!(interpret_prompt("make it look nice"), None);
    }

    #[test]
    fn hex_literal_becomes_the_base() {
        let result = interpret_prompt("#FF70E5").unwrap();

        assert_eq!(result.base_color, "#FF70E5");
        assert_eq!(result.source, MatchSource::HexLiteral);
        assert_eq!(result.additional_colors, vec!["#FF70E5"]);
    }

    #[test]
    fn hex_literal_wins_over_theme_keywords() {
        let result = interpret_prompt("#FF70E5 girly theme").unwrap();

        assert_eq!(result.base_color, "#FF70E5");
        assert_eq!(result.theme, None);
    }

    #[test]
    fn collects_every_hex_literal() {
        let result = interpret_prompt("#2b6cb0 with #f80 and #2B6CB0").unwrap();

        assert_eq!(result.base_color, "#2B6CB0");
        assert_eq!(
            result.additional_colors,
            vec!["#2B6CB0", "#FF8800", "#2B6CB0"]
        );
        assert_eq!(result.explicit_secondary(), Some("#FF8800"));
    }

    #[test]
    fn malformed_hex_is_ignored() {
        assert_eq!(interpret_prompt("#12345 #GGGGGG #1234567"), None);
    }

    #[test]
    fn matches_themes() {
        let result = interpret_prompt("forest themed").unwrap();

        assert_eq!(result.base_color, "#2D6A4F");
        assert_eq!(result.theme, Some(ThemeName::Forest));
        assert_eq!(result.source, MatchSource::Theme);
        assert_eq!(
            result.additional_colors,
            vec!["#40916C", "#52B788", "#74C69D", "#1B4332"]
        );
        assert_eq!(result.explicit_secondary(), None);
    }

    #[test]
    fn theme_names_are_case_insensitive() {
        let result = interpret_prompt("Hippie 60's").unwrap();

        assert_eq!(result.theme, Some(ThemeName::Hippie));
        assert_eq!(result.source, MatchSource::Theme);
    }

    #[test]
    fn falls_back_to_contextual_keywords() {
        let result = interpret_prompt("tie-dye festival poster").unwrap();

        assert_eq!(result.theme, Some(ThemeName::Hippie));
        assert_eq!(result.source, MatchSource::ContextualTheme);
        assert_eq!(result.base_color, "#9C4F96");
    }

    #[test]
    fn themes_win_over_color_names() {
        let result = interpret_prompt("blue ocean").unwrap();

        assert_eq!(result.theme, Some(ThemeName::Ocean));
    }

    #[test]
    fn matches_named_colors() {
        let result = interpret_prompt("navy and crimson").unwrap();

        assert_eq!(result.base_color, "#1A365D");
        assert_eq!(result.source, MatchSource::NamedColor);
        assert_eq!(result.additional_colors, vec!["#DC143C"]);
        assert_eq!(result.explicit_secondary(), Some("#DC143C"));
    }

    #[test]
    fn repeated_color_names_are_not_additional_colors() {
        let result = interpret_prompt("blue, more blue").unwrap();

        assert!(result.additional_colors.is_empty());
    }

    #[test]
    fn dark_modifier_darkens() {
        let result = interpret_prompt("dark blue").unwrap();

        assert_eq!(result.base_color, adjust_brightness("#3182CE", -30.0));
    }

    #[test]
    fn light_modifier_lightens() {
        let result = interpret_prompt("pale green").unwrap();

        assert_eq!(result.base_color, adjust_brightness("#38A169", 30.0));
    }

    #[test]
    fn modifiers_apply_in_a_fixed_order() {
        let result = interpret_prompt("warm vivid deep red").unwrap();

        let expected = shift_channels(
            &adjust_saturation(&adjust_brightness("#E53E3E", -30.0), 20.0),
            20,
            0,
            -20,
        );
        assert_eq!(result.base_color, expected);
    }

    #[test]
    fn cool_modifier_nudges_toward_blue() {
        let result = interpret_prompt("cool gray").unwrap();

        assert_eq!(result.base_color, shift_channels("#718096", -20, 0, 20));
    }

    #[test]
    fn pastel_modifier_desaturates_then_lightens() {
        let pastel = adjust_brightness(&adjust_saturation("#3182CE", -20.0), 40.0);

        assert_eq!(interpret_prompt("pastel blue").unwrap().base_color, pastel);
        assert_eq!(interpret_prompt("pastel blue").unwrap().base_color, "#93B3D3");
        assert_eq!(interpret_prompt("muted blue").unwrap().base_color, pastel);
        assert_eq!(interpret_prompt("gentle blue").unwrap().base_color, pastel);
    }

    #[test]
    fn pastel_applies_after_brightness_modifiers() {
        let result = interpret_prompt("dark pastel blue").unwrap();

        let expected = adjust_brightness(
            &adjust_saturation(&adjust_brightness("#3182CE", -30.0), -20.0),
            40.0,
        );
        assert_eq!(result.base_color, expected);
    }

    #[test]
    fn fall_as_a_verb_is_not_a_theme() {
        for prompt in [
            "navy text that should not fall apart",
            "navy links, but the layout must not fall apart",
        ] {
            let result = interpret_prompt(prompt).unwrap();

            assert_eq!(result.source, MatchSource::NamedColor, "{prompt}");
            assert_eq!(result.base_color, "#1A365D", "{prompt}");
            assert_eq!(result.theme, None, "{prompt}");
        }
    }

    #[test]
    fn fall_season_phrases_pick_autumn() {
        let result = interpret_prompt("warm fall colors").unwrap();

        assert_eq!(result.theme, Some(ThemeName::Autumn));
        assert_eq!(result.source, MatchSource::Theme);
    }

    #[test]
    fn extracts_requested_accent() {
        let result = interpret_prompt("navy with an accent color of gold").unwrap();

        assert_eq!(result.base_color, "#1A365D");
        assert_eq!(result.accent.as_deref(), Some("#D4AF37"));
        // gold belongs to the accent request, not to the base colors
        assert!(result.additional_colors.is_empty());
    }

    #[test]
    fn accent_requests_accept_hex() {
        assert_eq!(
            requested_accent("the highlight should be #fa0").as_deref(),
            Some("#FFAA00")
        );
    }

    #[test]
    fn accent_requests_can_name_where_they_apply() {
        assert_eq!(
            requested_accent("accents in the header should be gold").as_deref(),
            Some("#D4AF37")
        );
        assert_eq!(
            requested_accent("highlights on buttons are #fa0").as_deref(),
            Some("#FFAA00")
        );
        assert_eq!(requested_accent("highlights in coral").as_deref(), Some("#FF6F61"));

        let result = interpret_prompt("navy, accents in the header should be gold").unwrap();

        assert_eq!(result.base_color, "#1A365D");
        assert_eq!(result.accent.as_deref(), Some("#D4AF37"));
    }

    #[test]
    fn accent_requests_with_trailing_noun() {
        assert_eq!(
            requested_accent("ocean theme with coral accents").as_deref(),
            Some("#FF6F61")
        );
    }

    #[test]
    fn unknown_accent_words_are_ignored() {
        assert_eq!(requested_accent("a vibrant accent"), None);
        assert_eq!(requested_accent("forest themed"), None);
    }

    #[test]
    fn accent_request_alone_has_no_base() {
        assert_eq!(interpret_prompt("accent color of gold"), None);
    }

    #[test]
    fn interpretation_is_stateless() {
        let first = interpret_prompt("navy and crimson").unwrap();
        let _ = interpret_prompt("#FF70E5 #00FF00");
        let again = interpret_prompt("navy and crimson").unwrap();

        assert_eq!(first, again);
    }
}
