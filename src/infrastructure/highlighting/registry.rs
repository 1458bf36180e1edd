//! Language and style choice tables.
//!
//! Built once from syntect's bundled syntax and theme sets. Keys are slugs of
//! the syntax/theme names (`"Python"` -> `"python"`, `"Solarized (dark)"` ->
//! `"solarized-dark"`); the first definition wins when two names slug alike.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};

/// Style key kept for stored snippets and clients that expect it.
pub const FRIENDLY_STYLE: &str = "friendly";
const FRIENDLY_THEME: &str = "InspiredGitHub";

/// Process-wide registry, loaded on first use.
pub static REGISTRY: Lazy<ChoiceRegistry> = Lazy::new(ChoiceRegistry::load_defaults);

/// Lookup tables from choice keys to syntect syntaxes and themes.
pub struct ChoiceRegistry {
    syntaxes: SyntaxSet,
    themes: ThemeSet,
    /// key -> syntax name
    languages: BTreeMap<String, String>,
    /// key -> theme name
    styles: BTreeMap<String, String>,
}

impl ChoiceRegistry {
    /// Build the registry from syntect's default syntaxes and themes.
    pub fn load_defaults() -> Self {
        let syntaxes = SyntaxSet::load_defaults_newlines();
        let themes = ThemeSet::load_defaults();

        let mut languages = BTreeMap::new();
        for syntax in syntaxes.syntaxes().iter().filter(|s| !s.hidden) {
            languages
                .entry(slugify(&syntax.name))
                .or_insert_with(|| syntax.name.clone());
        }

        let mut styles = BTreeMap::new();
        for name in themes.themes.keys() {
            styles.entry(slugify(name)).or_insert_with(|| name.clone());
        }
        if themes.themes.contains_key(FRIENDLY_THEME) {
            styles.insert(FRIENDLY_STYLE.to_string(), FRIENDLY_THEME.to_string());
        }

        tracing::debug!(
            languages = languages.len(),
            styles = styles.len(),
            "Highlighting registry loaded"
        );

        Self {
            syntaxes,
            themes,
            languages,
            styles,
        }
    }

    pub fn syntax_set(&self) -> &SyntaxSet {
        &self.syntaxes
    }

    /// Resolve a language key to its syntax definition.
    pub fn syntax(&self, language: &str) -> Option<&SyntaxReference> {
        self.languages
            .get(language)
            .and_then(|name| self.syntaxes.find_syntax_by_name(name))
    }

    /// Resolve a style key to its theme.
    pub fn theme(&self, style: &str) -> Option<&Theme> {
        self.styles
            .get(style)
            .and_then(|name| self.themes.themes.get(name))
    }

    /// `(key, display name)` pairs of all languages, sorted by key.
    pub fn language_choices(&self) -> impl Iterator<Item = (&str, &str)> {
        self.languages.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `(key, display name)` pairs of all styles, sorted by key.
    pub fn style_choices(&self) -> impl Iterator<Item = (&str, &str)> {
        self.styles.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Lowercase `name`, keeping alphanumerics and `+#._-`; other runs become `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() || matches!(c, '+' | '#' | '.' | '_') {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
