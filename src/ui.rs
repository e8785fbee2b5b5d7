//! Checkbox synchronization, independent of any DOM.
//!
//! The browser glue in `dom` forwards element ids and checked flags here.

use crate::category::Category;
use crate::config::FilterConfig;
use crate::state::FilterState;
use crate::style::{StyleInjector, StyleSheetController};

/// Id of the checkbox controlling `category`.
pub fn checkbox_id(config: &FilterConfig, category: &Category) -> String {
    format!("{}{}", config.checkbox_prefix, category)
}

/// Category controlled by the checkbox with element id `id`.
pub fn category_from_checkbox_id(config: &FilterConfig, id: &str) -> Option<Category> {
    id.strip_prefix(config.checkbox_prefix.as_str())
        .filter(|name| !name.is_empty())
        .map(Category::from)
}

/// Selector a flip trigger points at via `data-target`, if it names one.
pub fn flip_target(data_target: Option<String>) -> Option<String> {
    data_target
        .map(|target| target.trim().to_string())
        .filter(|target| !target.is_empty())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FilterUi;

impl FilterUi {
    /// Checked flag for each category's checkbox on page load.
    pub fn checkbox_states(
        state: &FilterState,
        categories: &[Category],
    ) -> Vec<(Category, bool)> {
        categories
            .iter()
            .map(|category| (category.clone(), state.is_shown(category)))
            .collect()
    }

    /// Handles a `change` event from the checkbox with element id `id`.
    ///
    /// Re-renders the rules after every recognized change. Returns false for
    /// ids that do not name a category.
    pub fn on_change(
        state: &mut FilterState,
        id: &str,
        checked: bool,
        sheet: &mut dyn StyleSheetController,
    ) -> bool {
        let Some(category) = category_from_checkbox_id(state.config(), id) else {
            return false;
        };
        state.set_checked(&category, checked);
        StyleInjector::new(state.config()).apply(state, sheet);
        true
    }
}
