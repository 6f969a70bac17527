use serde::{Deserialize, Deserializer};

use crate::color_utils::normalize_hex;
use crate::fixer::FixerOptions;
use crate::prompt::DEFAULT_BASE_COLOR;
use crate::Result;

pub const SETTINGS_FILE_NAME: &str = "swatch.yaml";

/// Content of a `swatch.yaml` file. Every key is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base color used when a prompt can't be interpreted.
    #[serde(deserialize_with = "deserialize_base_color")]
    pub default_base_color: String,
    pub fixer: FixerOptions,
    /// Selector wrapping the CSS custom properties.
    pub css_selector: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            default_base_color: DEFAULT_BASE_COLOR.to_string(),
            fixer: FixerOptions::default(),
            css_selector: ":root".to_string(),
        }
    }
}

/// Invalid colors fall back to the default rather than failing the whole file.
fn deserialize_base_color<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;

    Ok(normalize_hex(&value).unwrap_or_else(|| DEFAULT_BASE_COLOR.to_string()))
}

impl Settings {
    pub fn parse(input: &str) -> Result<Self> {
        if input.trim().trim_start_matches("---").trim().is_empty() {
            return Ok(Settings::default());
        }

        Ok(serde_yaml::from_str(input)?)
    }
}
