//! Page configuration: default show/hide sets and the DOM naming contract.

use serde::{Deserialize, Serialize};

use crate::category::{Category, categories};

/// How filtered elements expose their categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectorStyle {
    /// `data-mtg-<category>` attribute on the element.
    #[default]
    DataAttribute,
    /// `mtg-filter-<category>` class on the element.
    Class,
}

/// Filter configuration for one page.
///
/// `FilterConfig::default()` is the production manabase page. Pages may pass
/// a partial object from JavaScript; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterConfig {
    /// Categories hidden unless explicitly shown.
    pub default_hidden: Vec<Category>,
    /// Categories shown unless explicitly hidden.
    pub default_shown: Vec<Category>,
    /// Name of the cookie carrying persisted filter state.
    pub cookie_name: String,
    pub selector_style: SelectorStyle,
    /// Selector prefix restricting which elements get hidden. Empty matches any element.
    pub element_scope: String,
    /// Checkbox ids are `<checkbox_prefix><category>`.
    pub checkbox_prefix: String,
    pub checkbox_class: String,
    pub flip_trigger_selector: String,
    /// Class toggled on a flip target when its trigger is clicked.
    pub flip_class: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            default_hidden: categories(["silver-border"]),
            default_shown: categories(["lands", "rocks", "dorks", "ramp"]),
            cookie_name: "filter".to_string(),
            selector_style: SelectorStyle::DataAttribute,
            element_scope: ".mtg-card".to_string(),
            checkbox_prefix: "filter-".to_string(),
            checkbox_class: "mtg-filter".to_string(),
            flip_trigger_selector: "[data-component='card-transform-button']".to_string(),
            flip_class: "flipped".to_string(),
        }
    }
}

impl FilterConfig {
    pub fn is_default_hidden(&self, category: &Category) -> bool {
        self.default_hidden.contains(category)
    }

    pub fn is_default_shown(&self, category: &Category) -> bool {
        self.default_shown.contains(category)
    }

    /// Selector matching every element tagged with `category`.
    pub fn selector_for(&self, category: &Category) -> String {
        match self.selector_style {
            SelectorStyle::DataAttribute => {
                format!("{}[data-mtg-{}]", self.element_scope, category)
            }
            SelectorStyle::Class => format!("{}.mtg-filter-{}", self.element_scope, category),
        }
    }
}
