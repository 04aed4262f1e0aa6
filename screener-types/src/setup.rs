use serde::{Deserialize, Deserializer, Serialize};

use crate::{CATEGORY_NAME, Mode, TokenMap};

/// The variables of one authoring session.
///
/// `category_name` is the value substituted for `{{categoryName}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudySetup {
    /// `None` when the configured mode is not recognized.
    #[serde(deserialize_with = "lenient_mode")]
    pub mode: Option<Mode>,
    pub moderator: String,
    pub dates: String,
    pub location_or_platform: String,
    pub category_name: String,
    pub notes: Option<String>,
}

impl Default for StudySetup {
    fn default() -> Self {
        Self {
            mode: Some(Mode::Online),
            moderator: String::new(),
            dates: String::new(),
            location_or_platform: String::new(),
            category_name: String::new(),
            notes: None,
        }
    }
}

impl StudySetup {
    /// Create a setup for the given mode with all text fields blank.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode: Some(mode),
            ..Self::default()
        }
    }

    /// Set the category name.
    pub fn with_category(mut self, category_name: impl Into<String>) -> Self {
        self.category_name = category_name.into();
        self
    }

    /// Set the mode from a name; unknown names clear it.
    pub fn set_mode_named(&mut self, name: &str) {
        self.mode = parse_mode_or_warn(name);
    }

    /// Build a fresh token map from the current values.
    pub fn tokens(&self) -> TokenMap {
        let mut tokens = TokenMap::new();
        tokens.insert(CATEGORY_NAME, self.category_name.clone());
        tokens
    }

    /// Notes, treating blank text as absent.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.trim().is_empty())
    }
}

fn parse_mode_or_warn(name: &str) -> Option<Mode> {
    match name.parse::<Mode>() {
        Ok(mode) => Some(mode),
        Err(err) => {
            tracing::warn!("{err}, using the universal baseline only");
            None
        }
    }
}

fn lenient_mode<'de, D>(deserializer: D) -> Result<Option<Mode>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_mode_or_warn))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_online() {
        assert_eq!(StudySetup::default().mode, Some(Mode::Online));
    }

    #[test]
    fn tokens_follow_category_edits() {
        let mut setup = StudySetup::new(Mode::Online).with_category("coffee");
        assert_eq!(setup.tokens().get(CATEGORY_NAME), Some("coffee"));

        setup.category_name = "tea".to_string();
        assert_eq!(setup.tokens().get(CATEGORY_NAME), Some("tea"));
    }

    #[test]
    fn unknown_mode_name_clears_mode() {
        let mut setup = StudySetup::default();
        setup.set_mode_named("hybrid");
        assert_eq!(setup.mode, None);
        setup.set_mode_named("in-person-shopperlab");
        assert_eq!(setup.mode, Some(Mode::InPersonShopperLab));
    }

    #[test]
    fn blank_notes_are_absent() {
        let mut setup = StudySetup::default();
        setup.notes = Some("  ".to_string());
        assert_eq!(setup.notes(), None);
    }
}
