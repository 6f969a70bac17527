use std::path::Path;

use palette_generator::{Settings, SETTINGS_FILE_NAME};

use crate::Result;

/// Loads settings from an explicit path, or from `swatch.yaml` in the working
/// directory when one exists. Without either the defaults are used.
pub fn load_settings(explicit: Option<&Path>, working_dir: &Path) -> Result<Settings> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = working_dir.join(SETTINGS_FILE_NAME);

            if !path.exists() {
                return Ok(Settings::default());
            }

            path
        }
    };

    let contents = std::fs::read_to_string(&path).map_err(|e| {
        crate::Error::General(format!("Could not read {}: {}", path.display(), e))
    })?;

    Ok(Settings::parse(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use temp_dir::TempDir;

    #[test]
    fn defaults_without_a_settings_file() {
        let working_dir = TempDir::new().unwrap();

        let settings = load_settings(None, working_dir.path()).unwrap();

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn reads_swatch_yaml_from_the_working_dir() {
        let working_dir = TempDir::new().unwrap();
        fs::write(
            working_dir.path().join("swatch.yaml"),
            "---\ncss_selector: \".brand\"",
        )
        .unwrap();

        let settings = load_settings(None, working_dir.path()).unwrap();

        assert_eq!(settings.css_selector, ".brand");
    }

    #[test]
    fn explicit_path_wins() {
        let working_dir = TempDir::new().unwrap();
        let other = working_dir.path().join("other.yaml");
        fs::write(working_dir.path().join("swatch.yaml"), "css_selector: a").unwrap();
        fs::write(&other, "css_selector: b").unwrap();

        let settings = load_settings(Some(&other), working_dir.path()).unwrap();

        assert_eq!(settings.css_selector, "b");
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let working_dir = TempDir::new().unwrap();

        let result = load_settings(Some(&working_dir.path().join("nope.yaml")), working_dir.path());

        assert!(matches!(result, Err(crate::Error::General(_))));
    }

    #[test]
    fn invalid_yaml_is_a_palette_error() {
        let working_dir = TempDir::new().unwrap();
        fs::write(working_dir.path().join("swatch.yaml"), "fixer: [oops").unwrap();

        let result = load_settings(None, working_dir.path());

        assert!(matches!(result, Err(crate::Error::Palette(_))));
    }
}
