//! Lookup tables for prompt interpretation: themes, the contextual keywords
//! that hint at them, named colors and the accent-only color map.
//!
//! Adding a theme means adding a `ThemeName` variant, one `THEMES` entry and one
//! `THEME_KEYWORDS` entry. Order in the keyword tables is match priority.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeName {
    Forest,
    Ocean,
    Sunset,
    Cyberpunk,
    Hippie,
    Girly,
    Autumn,
    Winter,
    Spring,
    Tropical,
    Desert,
    Coffee,
    Royal,
    Midnight,
    Retro,
    Corporate,
    Earthy,
    Candy,
}

impl ThemeName {
    pub fn name(&self) -> &'static str {
        match self {
            ThemeName::Forest => "forest",
            ThemeName::Ocean => "ocean",
            ThemeName::Sunset => "sunset",
            ThemeName::Cyberpunk => "cyberpunk",
            ThemeName::Hippie => "hippie",
            ThemeName::Girly => "girly",
            ThemeName::Autumn => "autumn",
            ThemeName::Winter => "winter",
            ThemeName::Spring => "spring",
            ThemeName::Tropical => "tropical",
            ThemeName::Desert => "desert",
            ThemeName::Coffee => "coffee",
            ThemeName::Royal => "royal",
            ThemeName::Midnight => "midnight",
            ThemeName::Retro => "retro",
            ThemeName::Corporate => "corporate",
            ThemeName::Earthy => "earthy",
            ThemeName::Candy => "candy",
        }
    }

    pub fn theme(&self) -> &'static Theme {
        THEMES
            .iter()
            .find(|theme| theme.name == *self)
            .unwrap_or(&THEMES[0])
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, PartialEq)]
pub struct Theme {
    pub name: ThemeName,
    /// Canonical primary color of the theme.
    pub primary: &'static str,
    /// Suggested companion colors, most characteristic first.
    pub companions: &'static [&'static str],
}

pub static THEMES: [Theme; 18] = [
    Theme {
        name: ThemeName::Forest,
        primary: "#2D6A4F",
        companions: &["#40916C", "#52B788", "#74C69D", "#1B4332"],
    },
    Theme {
        name: ThemeName::Ocean,
        primary: "#0077B6",
        companions: &["#0096C7", "#00B4D8", "#48CAE4", "#023E8A"],
    },
    Theme {
        name: ThemeName::Sunset,
        primary: "#E85D04",
        companions: &["#F48C06", "#FAA307", "#DC2F02", "#9D0208"],
    },
    Theme {
        name: ThemeName::Cyberpunk,
        primary: "#7B2CBF",
        companions: &["#F72585", "#4CC9F0", "#3A0CA3", "#B5179E"],
    },
    Theme {
        name: ThemeName::Hippie,
        primary: "#9C4F96",
        companions: &["#FF6355", "#FBA949", "#FAE442", "#8BD448", "#2AA8F2"],
    },
    Theme {
        name: ThemeName::Girly,
        primary: "#D63384",
        companions: &["#FF70E5", "#FFB3DE", "#F8C8DC", "#C9184A"],
    },
    Theme {
        name: ThemeName::Autumn,
        primary: "#BC4B16",
        companions: &["#D9822B", "#E9B44C", "#7F5539", "#9B2226"],
    },
    Theme {
        name: ThemeName::Winter,
        primary: "#4A6FA5",
        companions: &["#A9D6E5", "#89C2D9", "#E0FBFC", "#2C3E50"],
    },
    Theme {
        name: ThemeName::Spring,
        primary: "#5A9E4B",
        companions: &["#F7CAD0", "#B5E48C", "#FFD6A5", "#99D98C"],
    },
    Theme {
        name: ThemeName::Tropical,
        primary: "#06A77D",
        companions: &["#F4D35E", "#EE964B", "#F95738", "#0D3B66"],
    },
    Theme {
        name: ThemeName::Desert,
        primary: "#C1703D",
        companions: &["#E4B363", "#D9A066", "#8C5A3C", "#F2D0A4"],
    },
    Theme {
        name: ThemeName::Coffee,
        primary: "#6F4E37",
        companions: &["#A67B5B", "#C8A27C", "#3E2723", "#ECE0D1"],
    },
    Theme {
        name: ThemeName::Royal,
        primary: "#5A189A",
        companions: &["#7B2CBF", "#9D4EDD", "#E0AAFF", "#FFD60A"],
    },
    Theme {
        name: ThemeName::Midnight,
        primary: "#1B263B",
        companions: &["#415A77", "#778DA9", "#0D1B2A", "#E0E1DD"],
    },
    Theme {
        name: ThemeName::Retro,
        primary: "#D1495B",
        companions: &["#EDAE49", "#00798C", "#30638E", "#003D5B"],
    },
    Theme {
        name: ThemeName::Corporate,
        primary: "#1F4E79",
        companions: &["#2E75B6", "#5B9BD5", "#A5A5A5", "#404040"],
    },
    Theme {
        name: ThemeName::Earthy,
        primary: "#7F5539",
        companions: &["#9C6644", "#B08968", "#DDB892", "#582F0E"],
    },
    Theme {
        name: ThemeName::Candy,
        primary: "#FF5D8F",
        companions: &["#FF97B7", "#FFCAD4", "#9BF6FF", "#CAFFBF"],
    },
];

fn keyword_table(entries: &[(&str, ThemeName)]) -> Vec<(Regex, ThemeName)> {
    entries
        .iter()
        .map(|(keywords, theme)| {
            let re = Regex::new(&format!(r"\b(?:{})\b", keywords)).unwrap();
            (re, *theme)
        })
        .collect()
}

/// Theme names and their direct synonyms.
pub static THEME_KEYWORDS: Lazy<Vec<(Regex, ThemeName)>> = Lazy::new(|| {
    keyword_table(&[
        ("forest|forests|woodland|evergreen|pine", ThemeName::Forest),
        ("ocean|oceanic|sea|aquatic|coastal|underwater", ThemeName::Ocean),
        ("sunset|sunsets|sunrise", ThemeName::Sunset),
        ("cyberpunk|cyber|neon", ThemeName::Cyberpunk),
        ("hippie|hippies|hippy|boho|bohemian|psychedelic", ThemeName::Hippie),
        ("girly|girlie|feminine|princess", ThemeName::Girly),
        (r"autumn|autumnal|fall (?:colou?rs?|season|themed|vibes|foliage|leaves)", ThemeName::Autumn),
        ("winter|wintry|snowy|icy|frozen", ThemeName::Winter),
        ("spring|springtime|blossom|blossoms", ThemeName::Spring),
        ("tropical|tropics|island|paradise", ThemeName::Tropical),
        ("desert|dune|dunes|sahara", ThemeName::Desert),
        ("coffee|espresso|mocha|latte|cafe", ThemeName::Coffee),
        ("royal|regal|luxury|luxurious", ThemeName::Royal),
        ("midnight|night|nocturnal", ThemeName::Midnight),
        ("retro|vintage", ThemeName::Retro),
        ("corporate|professional|business|enterprise", ThemeName::Corporate),
        ("earthy|earth tones?|rustic|organic", ThemeName::Earthy),
        ("candy|bubblegum|sweets", ThemeName::Candy),
    ])
});

/// Loose associations that hint at a theme without naming it.
pub static CONTEXTUAL_KEYWORDS: Lazy<Vec<(Regex, ThemeName)>> = Lazy::new(|| {
    keyword_table(&[
        (
            r"tie[\s-]?dye|woodstock|groovy|flower power|(?:19)?60'?s|sixties|peace and love",
            ThemeName::Hippie,
        ),
        (r"trees?|woods|jungle|leaf|leaves|moss|hiking|camping", ThemeName::Forest),
        (r"beach|waves?|nautical|marine|surf|surfing|sailing", ThemeName::Ocean),
        (r"futuristic|hacker|matrix|synthwave|sci-fi|techno", ThemeName::Cyberpunk),
        (r"dusk|twilight|golden hour|evening", ThemeName::Sunset),
        (r"snow|ice|frost|christmas|holidays?", ThemeName::Winter),
        (r"halloween|pumpkins?|harvest|thanksgiving", ThemeName::Autumn),
        (r"easter|floral|flowers?|garden", ThemeName::Spring),
        (r"bakery|cozy|chocolate", ThemeName::Coffee),
        (r"bank|banking|finance|fintech|saas|law firm", ThemeName::Corporate),
        (r"80'?s|70'?s|disco|arcade|old school|nostalgic", ThemeName::Retro),
        (r"barbie|cute|kawaii", ThemeName::Girly),
        (r"kids|children|toys?|playground", ThemeName::Candy),
        (r"terracotta|clay|pottery|wooden", ThemeName::Earthy),
        (r"palm|coconut|hawaii|hawaiian", ThemeName::Tropical),
        (r"cactus|canyon|arid", ThemeName::Desert),
        (r"velvet|crown|palace|majestic", ThemeName::Royal),
        (r"stars|starry|moon|moonlight", ThemeName::Midnight),
    ])
});

/// Canonical colors for the color names recognized in prompts.
pub const NAMED_COLORS: [(&str, &str); 38] = [
    ("navy", "#1A365D"),
    ("blue", "#3182CE"),
    ("sky", "#0EA5E9"),
    ("teal", "#319795"),
    ("turquoise", "#40E0D0"),
    ("cyan", "#00B5D8"),
    ("aqua", "#0BC5EA"),
    ("green", "#38A169"),
    ("emerald", "#059669"),
    ("mint", "#3EB489"),
    ("olive", "#808000"),
    ("lime", "#84CC16"),
    ("yellow", "#ECC94B"),
    ("gold", "#D69E2E"),
    ("orange", "#DD6B20"),
    ("coral", "#FF7F50"),
    ("peach", "#FFB07C"),
    ("salmon", "#FA8072"),
    ("red", "#E53E3E"),
    ("crimson", "#DC143C"),
    ("burgundy", "#800020"),
    ("maroon", "#800000"),
    ("pink", "#ED64A6"),
    ("magenta", "#D53F8C"),
    ("rose", "#E11D48"),
    ("purple", "#805AD5"),
    ("violet", "#8B5CF6"),
    ("lavender", "#B794F4"),
    ("plum", "#8E4585"),
    ("indigo", "#5A67D8"),
    ("brown", "#8B4513"),
    ("tan", "#D2B48C"),
    ("beige", "#F5F5DC"),
    ("gray", "#718096"),
    ("grey", "#718096"),
    ("charcoal", "#36454F"),
    ("silver", "#A0AEC0"),
    ("black", "#1A202C"),
];

/// Colors used when a prompt explicitly asks for an accent ("accent color of
/// gold"). Tuned to read well as highlights rather than as a base color.
pub const ACCENT_COLORS: [(&str, &str); 20] = [
    ("gold", "#D4AF37"),
    ("coral", "#FF6F61"),
    ("orange", "#F97316"),
    ("amber", "#F59E0B"),
    ("yellow", "#FACC15"),
    ("teal", "#0D9488"),
    ("turquoise", "#14B8A6"),
    ("mint", "#10B981"),
    ("green", "#16A34A"),
    ("lime", "#65A30D"),
    ("blue", "#2563EB"),
    ("cyan", "#0891B2"),
    ("purple", "#9333EA"),
    ("violet", "#7C3AED"),
    ("pink", "#EC4899"),
    ("magenta", "#C026D3"),
    ("red", "#DC2626"),
    ("crimson", "#DC143C"),
    ("copper", "#B87333"),
    ("silver", "#94A3B8"),
];

pub fn named_color(name: &str) -> Option<&'static str> {
    lookup(&NAMED_COLORS, name)
}

pub fn accent_color(name: &str) -> Option<&'static str> {
    lookup(&ACCENT_COLORS, name)
}

fn lookup(table: &[(&'static str, &'static str)], name: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, hex)| *hex)
}

/// Matches any name from `NAMED_COLORS` as a whole word.
pub static NAMED_COLOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    let names: Vec<&str> = NAMED_COLORS.iter().map(|(name, _)| *name).collect();
    Regex::new(&format!(r"\b({})\b", names.join("|"))).unwrap()
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_utils::hex_to_rgb;

    #[test]
    fn every_theme_name_has_one_entry() {
        for theme in &THEMES {
            assert_eq!(theme.name.theme(), theme);
        }
    }

    #[test]
    fn every_theme_has_a_keyword_entry() {
        for theme in &THEMES {
            assert!(
                THEME_KEYWORDS.iter().any(|(_, name)| *name == theme.name),
                "{} has no keywords",
                theme.name
            );
        }
    }

    #[test]
    fn all_table_colors_are_valid_hex() {
        let theme_colors = THEMES
            .iter()
            .flat_map(|theme| std::iter::once(theme.primary).chain(theme.companions.iter().copied()));
        let named = NAMED_COLORS.iter().map(|(_, hex)| *hex);
        let accents = ACCENT_COLORS.iter().map(|(_, hex)| *hex);

        for hex in theme_colors.chain(named).chain(accents) {
            assert!(hex_to_rgb(hex).is_some(), "{} is not a valid color", hex);
            assert_eq!(hex, hex.to_uppercase());
        }
    }

    #[test]
    fn forest_theme() {
        let forest = ThemeName::Forest.theme();

        assert_eq!(forest.primary, "#2D6A4F");
        assert_eq!(&forest.companions[..2], &["#40916C", "#52B788"]);
    }

    #[test]
    fn named_color_lookup_is_case_insensitive() {
        assert_eq!(named_color("Navy"), Some("#1A365D"));
        assert_eq!(named_color("grey"), named_color("gray"));
        assert_eq!(named_color("chartreuse"), None);
    }

    #[test]
    fn named_color_regex_matches_whole_words() {
        assert!(NAMED_COLOR_REGEX.is_match("a deep navy"));
        assert!(!NAMED_COLOR_REGEX.is_match("bluegrass"));
        assert!(!NAMED_COLOR_REGEX.is_match("redundant"));
    }

    #[test]
    fn contextual_keywords_cover_sixties_spellings() {
        let hippie = |prompt: &str| {
            CONTEXTUAL_KEYWORDS
                .iter()
                .find(|(re, _)| re.is_match(prompt))
                .map(|(_, theme)| *theme)
        };

        assert_eq!(hippie("tie-dye shirt"), Some(ThemeName::Hippie));
        assert_eq!(hippie("the 60's"), Some(ThemeName::Hippie));
        assert_eq!(hippie("1960s poster"), Some(ThemeName::Hippie));
    }
}
