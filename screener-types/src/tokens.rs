//! `{{placeholder}}` substitution for question, option and instruction text.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Name of the product/category variable.
pub const CATEGORY_NAME: &str = "categoryName";

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("placeholder pattern is valid"));

/// Variable name to replacement text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenMap {
    values: HashMap<String, String>,
}

impl TokenMap {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Add or replace a variable.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder-style `insert`.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TokenMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Replace every `{{name}}` in `input` with its value from `tokens`.
///
/// Names missing from the map resolve to the empty string. No nesting,
/// escaping or conditionals.
pub fn substitute(input: &str, tokens: &TokenMap) -> String {
    PLACEHOLDER
        .replace_all(input, |caps: &Captures<'_>| {
            tokens.get(&caps[1]).unwrap_or_default().to_string()
        })
        .into_owned()
}

/// Substitute with a map holding only the category name.
pub fn with_category(input: &str, category_name: &str) -> String {
    substitute(input, &TokenMap::new().with(CATEGORY_NAME, category_name))
}

/// Names referenced by `input`, in order of first appearance.
pub fn placeholders(input: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in PLACEHOLDER.captures_iter(input) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn coffee() -> TokenMap {
        TokenMap::new().with(CATEGORY_NAME, "coffee")
    }

    #[test]
    fn replaces_category() {
        assert_eq!(substitute("Hello {{categoryName}}", &coffee()), "Hello coffee");
    }

    #[test]
    fn unknown_variable_is_blank() {
        assert_eq!(substitute("{{unknownVar}}", &TokenMap::new()), "");
        assert_eq!(
            substitute("Brands of {{unknownVar}}?", &coffee()),
            "Brands of ?"
        );
    }

    #[test]
    fn every_occurrence_resolves() {
        assert_eq!(
            substitute("{{categoryName}}, {{categoryName}}!", &coffee()),
            "coffee, coffee!"
        );
    }

    #[test]
    fn malformed_braces_are_left_alone() {
        let input = "{categoryName} {{ categoryName }} {{category-name}}";
        assert_eq!(substitute(input, &coffee()), input);
    }

    #[test]
    fn nested_placeholders_are_not_interpreted() {
        let tokens = TokenMap::new().with("a", "{{b}}").with("b", "nope");
        assert_eq!(substitute("{{a}}", &tokens), "{{b}}");
    }

    #[test]
    fn with_category_helper() {
        assert_eq!(
            with_category("types of {{categoryName}}", "dry shampoo"),
            "types of dry shampoo"
        );
    }

    #[test]
    fn lists_placeholders_once() {
        assert_eq!(
            placeholders("{{categoryName}} {{brand}} {{categoryName}}"),
            vec!["categoryName".to_string(), "brand".to_string()]
        );
        assert!(placeholders("no tokens here").is_empty());
    }

    proptest! {
        #[test]
        fn text_without_placeholders_is_unchanged(s in "[^{}]*", value in ".*") {
            let tokens = TokenMap::new().with(CATEGORY_NAME, value);
            prop_assert_eq!(substitute(&s, &tokens), s);
        }

        #[test]
        fn substitution_is_idempotent(prefix in "[a-z ]*", value in "[a-z ]*") {
            let tokens = TokenMap::new().with(CATEGORY_NAME, value);
            let once = substitute(&format!("{prefix}{{{{categoryName}}}}"), &tokens);
            prop_assert_eq!(substitute(&once, &tokens), once.clone());
        }
    }
}
