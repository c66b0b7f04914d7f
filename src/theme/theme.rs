//! Theme struct for building token collections.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::Value;

/// Identity of a theme generation, used as a memoization key.
///
/// Every structural change to a theme (a builder call) produces a fresh
/// id; clones share the id of the theme they were cloned from. Two
/// independently built themes are distinct even when their tokens are
/// equal — identity, not structure, drives re-resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThemeId(u64);

impl ThemeId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        ThemeId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A named collection of design tokens used during style resolution.
///
/// Tokens are opaque values (colors, sizes, anything JSON-shaped) looked
/// up by computed style groups. The spacing scale turns step counts into
/// concrete sizes.
///
/// # Example
///
/// ```rust
/// use uniform::Theme;
///
/// let theme = Theme::new()
///     .add("accent", "#9d5f4a")
///     .add("textMuted", "#6b6b6b")
///     .spacing_unit(8.0);
///
/// assert_eq!(theme.token("accent"), Some(&"#9d5f4a".into()));
/// assert_eq!(theme.spacing(2.0), 16.0);
/// ```
#[derive(Debug, Clone)]
pub struct Theme {
    tokens: HashMap<String, Value>,
    spacing_unit: f64,
    id: ThemeId,
}

impl Theme {
    /// Creates an empty theme with the default spacing unit of 8.
    pub fn new() -> Self {
        Self {
            tokens: HashMap::new(),
            spacing_unit: 8.0,
            id: ThemeId::next(),
        }
    }

    /// Adds a named token, returning an updated theme for chaining.
    ///
    /// Re-adding a name replaces its value. Each call produces a new
    /// theme generation, so resolvers memoizing on identity recompute.
    pub fn add<V: Into<Value>>(mut self, name: &str, value: V) -> Self {
        self.tokens.insert(name.to_string(), value.into());
        self.id = ThemeId::next();
        self
    }

    /// Sets the spacing unit, returning an updated theme for chaining.
    pub fn spacing_unit(mut self, unit: f64) -> Self {
        self.spacing_unit = unit;
        self.id = ThemeId::next();
        self
    }

    /// The value of a token, `None` if it isn't defined.
    pub fn token(&self, name: &str) -> Option<&Value> {
        self.tokens.get(name)
    }

    /// Whether the theme defines a token with this name.
    pub fn has(&self, name: &str) -> bool {
        self.tokens.contains_key(name)
    }

    /// A concrete size for the given number of spacing steps.
    pub fn spacing(&self, steps: f64) -> f64 {
        steps * self.spacing_unit
    }

    /// The identity of this theme generation.
    pub fn id(&self) -> ThemeId {
        self.id
    }

    /// Number of defined tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether no tokens are defined.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_add_token() {
        let theme = Theme::new().add("accent", "#9d5f4a");
        assert!(theme.has("accent"));
        assert_eq!(theme.token("accent"), Some(&"#9d5f4a".into()));
    }

    #[test]
    fn test_theme_readd_replaces() {
        let theme = Theme::new().add("accent", "red").add("accent", "blue");
        assert_eq!(theme.len(), 1);
        assert_eq!(theme.token("accent"), Some(&"blue".into()));
    }

    #[test]
    fn test_theme_spacing() {
        let theme = Theme::new();
        assert_eq!(theme.spacing(4.0), 32.0);

        let tight = Theme::new().spacing_unit(4.0);
        assert_eq!(tight.spacing(4.0), 16.0);
    }

    #[test]
    fn test_theme_identity_changes_per_builder_call() {
        let theme = Theme::new();
        let first = theme.id();
        let theme = theme.add("accent", "red");
        assert_ne!(first, theme.id());
    }

    #[test]
    fn test_theme_clone_shares_identity() {
        let theme = Theme::new().add("accent", "red");
        let clone = theme.clone();
        assert_eq!(theme.id(), clone.id());
    }

    #[test]
    fn test_equal_themes_have_distinct_identity() {
        let a = Theme::new();
        let b = Theme::new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_theme_default() {
        let theme = Theme::default();
        assert!(theme.is_empty());
        assert_eq!(theme.len(), 0);
    }
}
