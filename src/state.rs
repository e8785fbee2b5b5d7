//! Filter state: explicit per-session overrides on top of the configured defaults.
//!
//! After reconciliation `show` only holds categories that are hidden by
//! default (or have no default) and `hide` only holds categories that are
//! shown by default (or have no default). A category is never in both.

use serde::Serialize;
use tracing::debug;

use crate::category::Category;
use crate::config::FilterConfig;
use crate::source::{CookieFilter, RawFilters};

/// The resolved show/hide overrides for one page session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    config: FilterConfig,
    show: Vec<Category>,
    hide: Vec<Category>,
}

/// Serializable view of a `FilterState` for the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSnapshot {
    pub show: Vec<Category>,
    pub hide: Vec<Category>,
    pub effective_hidden: Vec<Category>,
    pub effective_shown: Vec<Category>,
}

impl FilterState {
    /// Builds the session state from raw input and reconciles it once.
    pub fn new(config: FilterConfig, raw: RawFilters) -> Self {
        let mut state = Self {
            config,
            show: raw.show,
            hide: raw.hide,
        };
        state.reconcile();
        state
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Categories explicitly shown against their default.
    pub fn explicit_show(&self) -> &[Category] {
        &self.show
    }

    /// Categories explicitly hidden against their default.
    pub fn explicit_hide(&self) -> &[Category] {
        &self.hide
    }

    /// Resolves contradictions between explicit input and the defaults.
    ///
    /// Default-hidden: an explicit hide beats an explicit show, and the hide
    /// itself is dropped as redundant. Default-shown: an explicit show beats an
    /// explicit hide, and the show is dropped. A category with no default that
    /// is both shown and hidden ends up shown.
    pub fn reconcile(&mut self) {
        dedupe(&mut self.show);
        dedupe(&mut self.hide);

        for category in &self.config.default_hidden {
            if self.hide.contains(category) {
                self.show.retain(|c| c != category);
                self.hide.retain(|c| c != category);
            }
        }

        for category in &self.config.default_shown {
            if self.show.contains(category) {
                self.hide.retain(|c| c != category);
                self.show.retain(|c| c != category);
            }
        }

        let show = &self.show;
        self.hide.retain(|c| !show.contains(c));

        debug!(show = ?self.show, hide = ?self.hide, "reconciled filters");
    }

    /// Default-hidden plus explicitly hidden, minus explicitly shown.
    pub fn effective_hidden(&self) -> Vec<Category> {
        effective(&self.config.default_hidden, &self.hide, &self.show)
    }

    /// Default-shown plus explicitly shown, minus explicitly hidden.
    pub fn effective_shown(&self) -> Vec<Category> {
        effective(&self.config.default_shown, &self.show, &self.hide)
    }

    /// Whether a category's checkbox should be checked.
    pub fn is_shown(&self, category: &Category) -> bool {
        !self.hide.contains(category)
            && (self.config.is_default_shown(category) || self.show.contains(category))
    }

    /// Whether elements of a category are suppressed.
    pub fn is_hidden(&self, category: &Category) -> bool {
        !self.show.contains(category)
            && (self.config.is_default_hidden(category) || self.hide.contains(category))
    }

    /// Applies a checkbox change. Returns true if the overrides changed.
    ///
    /// A category with no default is moved between `show` and `hide` so the
    /// box and the rendered state never disagree.
    pub fn set_checked(&mut self, category: &Category, checked: bool) -> bool {
        let before = (self.show.len(), self.hide.len());
        let default_hidden = self.config.is_default_hidden(category);
        let no_default = !default_hidden && !self.config.is_default_shown(category);
        if checked {
            if default_hidden && !self.show.contains(category) {
                self.show.push(category.clone());
            } else {
                self.hide.retain(|c| c != category);
                if no_default && !self.show.contains(category) {
                    self.show.push(category.clone());
                }
            }
        } else {
            self.show.retain(|c| c != category);
            if !default_hidden && !self.hide.contains(category) {
                self.hide.push(category.clone());
            }
        }
        let changed = before != (self.show.len(), self.hide.len());
        debug!(%category, checked, changed, "filter toggled");
        changed
    }

    /// The explicit overrides in the cookie's shape.
    pub fn to_cookie(&self) -> CookieFilter {
        CookieFilter {
            show: self.show.clone(),
            hide: self.hide.clone(),
        }
    }

    pub fn snapshot(&self) -> FilterSnapshot {
        FilterSnapshot {
            show: self.show.clone(),
            hide: self.hide.clone(),
            effective_hidden: self.effective_hidden(),
            effective_shown: self.effective_shown(),
        }
    }
}

fn dedupe(list: &mut Vec<Category>) {
    let mut seen: Vec<Category> = Vec::with_capacity(list.len());
    list.retain(|c| {
        if seen.contains(c) {
            false
        } else {
            seen.push(c.clone());
            true
        }
    });
}

fn effective(defaults: &[Category], added: &[Category], removed: &[Category]) -> Vec<Category> {
    let mut out: Vec<Category> = Vec::new();
    for category in defaults.iter().chain(added) {
        if !removed.contains(category) && !out.contains(category) {
            out.push(category.clone());
        }
    }
    out
}
