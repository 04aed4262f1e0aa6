//! Study setup loading: TOML file first, then command-line overrides.

use std::path::Path;

use anyhow::Context;
use screener::StudySetup;

use crate::cli::SetupArgs;

/// Load the setup file, or the default setup when no file is given.
pub fn load_setup(path: Option<&Path>) -> anyhow::Result<StudySetup> {
    let Some(path) = path else {
        return Ok(StudySetup::default());
    };

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read setup file {}", path.display()))?;
    let setup = parse_setup(&raw)
        .with_context(|| format!("Failed to parse setup file {}", path.display()))?;

    tracing::debug!(path = %path.display(), "setup file loaded");
    Ok(setup)
}

fn parse_setup(raw: &str) -> anyhow::Result<StudySetup> {
    Ok(toml::from_str(raw)?)
}

impl SetupArgs {
    /// Overwrite setup values with any given on the command line.
    pub fn apply(&self, setup: &mut StudySetup) {
        if let Some(mode) = &self.mode {
            setup.set_mode_named(mode);
        }
        if let Some(category) = &self.category {
            setup.category_name = category.clone();
        }
        if let Some(moderator) = &self.moderator {
            setup.moderator = moderator.clone();
        }
        if let Some(dates) = &self.dates {
            setup.dates = dates.clone();
        }
        if let Some(location) = &self.location {
            setup.location_or_platform = location.clone();
        }
        if let Some(notes) = &self.notes {
            setup.notes = Some(notes.clone());
        }
    }

    /// Load the setup file and apply these overrides.
    pub fn resolve(&self, path: Option<&Path>) -> anyhow::Result<StudySetup> {
        let mut setup = load_setup(path)?;
        self.apply(&mut setup);
        Ok(setup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use screener::Mode;

    #[test]
    fn parses_full_file() {
        let setup = parse_setup(
            r#"
mode = "inperson_shopperlab"
moderator = "J. Rivera"
dates = "Nov 3-5"
location_or_platform = "ShopperLab, Chicago"
category_name = "frozen novelties"
notes = "Heavy users only"
"#,
        )
        .unwrap();

        assert_eq!(
            setup,
            StudySetup {
                mode: Some(Mode::InPersonShopperLab),
                moderator: "J. Rivera".to_string(),
                dates: "Nov 3-5".to_string(),
                location_or_platform: "ShopperLab, Chicago".to_string(),
                category_name: "frozen novelties".to_string(),
                notes: Some("Heavy users only".to_string()),
            }
        );
    }

    #[test]
    fn missing_keys_use_defaults() {
        let setup = parse_setup("category_name = \"coffee\"\n").unwrap();
        assert_eq!(setup.mode, Some(Mode::Online));
        assert_eq!(setup.category_name, "coffee");
        assert_eq!(setup.notes, None);
    }

    #[test]
    fn unknown_mode_is_kept_as_none() {
        let setup = parse_setup("mode = \"hybrid\"\n").unwrap();
        assert_eq!(setup.mode, None);
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(parse_setup("mode = [").is_err());
    }

    #[test]
    fn flags_override_file_values() {
        let mut setup = StudySetup::new(Mode::Online).with_category("coffee");
        setup.moderator = "A".to_string();

        let args = SetupArgs {
            mode: Some("inperson_external".to_string()),
            category: Some("tea".to_string()),
            ..SetupArgs::default()
        };
        args.apply(&mut setup);

        assert_eq!(setup.mode, Some(Mode::InPersonExternal));
        assert_eq!(setup.category_name, "tea");
        assert_eq!(setup.moderator, "A");
    }

    #[test]
    fn no_file_means_default_setup() {
        assert_eq!(load_setup(None).unwrap(), StudySetup::default());

        let err = load_setup(Some(Path::new("/no/such/setup.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read setup file"));
    }

    #[test]
    fn resolve_reads_file_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("study.toml");
        std::fs::write(&path, "mode = \"online\"\ncategory_name = \"coffee\"\n").unwrap();

        let args = SetupArgs {
            dates: Some("May 1".to_string()),
            ..SetupArgs::default()
        };
        let setup = args.resolve(Some(&path)).unwrap();
        assert_eq!(setup.category_name, "coffee");
        assert_eq!(setup.dates, "May 1");
    }
}
