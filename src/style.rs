//! Renders the effective hidden set into CSS rules.

use tracing::{debug, warn};

use crate::config::FilterConfig;
use crate::state::FilterState;

/// A place hidden-category rules are written to.
///
/// The browser implementation owns `<style>` elements in the document head;
/// `RuleBuffer` keeps rules in memory.
pub trait StyleSheetController {
    /// Removes every rule this controller previously added.
    fn clear(&mut self);
    /// Appends one complete CSS rule.
    fn add_rule(&mut self, rule: &str);
}

/// Marker attribute on every `<style>` element the injector creates.
pub const STYLE_MARKER: &str = "data-mtg-filter-style";

/// Selects the injected `<style>` elements and nothing else in `<head>`.
pub fn injected_style_selector() -> String {
    format!("head style[{STYLE_MARKER}]")
}

/// CSS rule suppressing everything matched by `selector`.
pub fn hidden_rule(selector: &str) -> String {
    format!("{selector} {{ display: none !important; }}")
}

/// Re-renders hidden-category rules from a `FilterState`.
#[derive(Debug, Clone, Copy)]
pub struct StyleInjector<'a> {
    config: &'a FilterConfig,
}

impl<'a> StyleInjector<'a> {
    pub fn new(config: &'a FilterConfig) -> Self {
        Self { config }
    }

    /// Rules for the current state, one per effective-hidden category.
    pub fn rules(&self, state: &FilterState) -> Vec<String> {
        state
            .effective_hidden()
            .into_iter()
            .filter(|category| {
                let safe = category.is_selector_safe();
                if !safe {
                    warn!(%category, "skipping category that is not selector-safe");
                }
                safe
            })
            .map(|category| hidden_rule(&self.config.selector_for(&category)))
            .collect()
    }

    /// Clears the sheet and writes the current rules. Returns the rule count.
    pub fn apply(&self, state: &FilterState, sheet: &mut dyn StyleSheetController) -> usize {
        sheet.clear();
        let rules = self.rules(state);
        for rule in &rules {
            sheet.add_rule(rule);
        }
        debug!(count = rules.len(), "injected filter rules");
        rules.len()
    }
}

/// In-memory `StyleSheetController`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleBuffer {
    rules: Vec<String>,
}

impl RuleBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rules(&self) -> &[String] {
        &self.rules
    }

    pub fn contains(&self, rule: &str) -> bool {
        self.rules.iter().any(|r| r == rule)
    }
}

impl StyleSheetController for RuleBuffer {
    fn clear(&mut self) {
        self.rules.clear();
    }

    fn add_rule(&mut self, rule: &str) {
        self.rules.push(rule.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::categories;
    use crate::source::RawFilters;

    fn state(show: &[&str], hide: &[&str]) -> FilterState {
        FilterState::new(
            FilterConfig::default(),
            RawFilters {
                show: categories(show.iter().copied()),
                hide: categories(hide.iter().copied()),
            },
        )
    }

    #[test]
    fn test_hidden_rule_format() {
        assert_eq!(
            hidden_rule("[data-mtg-lands]"),
            "[data-mtg-lands] { display: none !important; }"
        );
    }

    #[test]
    fn test_injected_style_selector_requires_marker() {
        let selector = injected_style_selector();
        assert_eq!(selector, "head style[data-mtg-filter-style]");
        assert!(selector.contains(STYLE_MARKER));
    }

    #[test]
    fn test_default_state_hides_default_hidden_only() {
        let s = state(&[], &[]);
        let mut sheet = RuleBuffer::new();
        let count = StyleInjector::new(s.config()).apply(&s, &mut sheet);
        assert_eq!(count, 1);
        assert_eq!(
            sheet.rules(),
            [".mtg-card[data-mtg-silver-border] { display: none !important; }".to_string()]
        );
    }

    #[test]
    fn test_apply_replaces_previous_rules() {
        let mut sheet = RuleBuffer::new();
        sheet.add_rule("stale { display: none !important; }");
        let s = state(&["silver-border"], &["rocks"]);
        StyleInjector::new(s.config()).apply(&s, &mut sheet);
        assert_eq!(
            sheet.rules(),
            [".mtg-card[data-mtg-rocks] { display: none !important; }".to_string()]
        );
    }

    #[test]
    fn test_apply_twice_is_stable() {
        let s = state(&[], &["rocks", "dorks", "rocks"]);
        let injector = StyleInjector::new(s.config());
        let mut sheet = RuleBuffer::new();
        injector.apply(&s, &mut sheet);
        let first = sheet.clone();
        injector.apply(&s, &mut sheet);
        assert_eq!(sheet, first);
        assert_eq!(sheet.rules().len(), 3);
    }

    #[test]
    fn test_unsafe_category_is_skipped() {
        let s = state(&[], &["x] , body"]);
        let rules = StyleInjector::new(s.config()).rules(&s);
        assert_eq!(rules.len(), 1);
        assert!(rules[0].contains("silver-border"));
    }
}
