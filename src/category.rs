//! Filter categories.
//!
//! A category names a filterable class of card entries on a page ("lands",
//! "silver-border", ...). Categories are opaque: names that match no rendered
//! element are carried around and simply have no visible effect.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for a filterable class of displayed element.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Create a new category from any string-like value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Return the category as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the name can be spliced into a CSS selector as-is.
    ///
    /// Only `[A-Za-z0-9_-]` is accepted, the same alphabet the site build
    /// uses when it emits `data-mtg-*` attributes.
    pub fn is_selector_safe(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Category").field(&self.0).finish()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Category {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&String> for Category {
    fn from(value: &String) -> Self {
        Self::new(value.clone())
    }
}

impl PartialEq<str> for Category {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Category {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Builds a category list from string literals.
pub fn categories<I, S>(names: I) -> Vec<Category>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Category::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display_is_raw_name() {
        assert_eq!(Category::from("silver-border").to_string(), "silver-border");
    }

    #[test]
    fn test_category_selector_safety() {
        assert!(Category::from("lands").is_selector_safe());
        assert!(Category::from("silver-border").is_selector_safe());
        assert!(Category::from("mana_rocks2").is_selector_safe());
        assert!(!Category::from("").is_selector_safe());
        assert!(!Category::from("lands] , body").is_selector_safe());
        assert!(!Category::from("two words").is_selector_safe());
    }

    #[test]
    fn test_category_serializes_transparently() {
        let json = serde_json::to_string(&categories(["lands", "rocks"])).unwrap();
        assert_eq!(json, r#"["lands","rocks"]"#);
        let parsed: Vec<Category> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, categories(["lands", "rocks"]));
    }
}
