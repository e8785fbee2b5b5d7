//! WASM-facing API for the manabase pages.
//!
//! A page drives it in two steps: from `<head>` to hide filtered cards before
//! first paint, then after the body rendered to wire the filter checkboxes
//! and flip buttons.
//!
//! ```js
//! const filter = new WasmFilter();   // reads location.search and the cookie
//! filter.applyStyles();
//! // ... later, once the controls exist
//! filter.bindControls();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use tracing::info;
use wasm_bindgen::prelude::*;

use crate::category::Category;
use crate::config::FilterConfig;
use crate::dom::{self, DomStyleSheet, Page};
use crate::error::FilterError;
use crate::source::{CookieFilter, RawFilters};
use crate::state::FilterState;
use crate::style::StyleInjector;

fn js_error(err: FilterError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn config_from_js(config: JsValue) -> Result<FilterConfig, FilterError> {
    if config.is_undefined() || config.is_null() {
        return Ok(FilterConfig::default());
    }
    serde_wasm_bindgen::from_value(config).map_err(|e| FilterError::Config(e.to_string()))
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

/// Browser-exposed filter handle.
#[wasm_bindgen]
pub struct WasmFilter {
    page: Page,
    state: Rc<RefCell<FilterState>>,
    sheet: Rc<RefCell<DomStyleSheet>>,
    controls_bound: bool,
}

#[wasm_bindgen]
impl WasmFilter {
    /// Reads filter input from the page. `config` may be omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WasmFilter, JsValue> {
        let config = config_from_js(config).map_err(js_error)?;
        let page = Page::current().map_err(js_error)?;
        let cookie =
            CookieFilter::from_cookie_header_lossy(&page.cookie_header(), &config.cookie_name);
        let raw = RawFilters::collect(cookie, &page.query_string());
        let state = FilterState::new(config, raw);
        let sheet = DomStyleSheet::new(&page).map_err(js_error)?;
        Ok(Self {
            page,
            state: Rc::new(RefCell::new(state)),
            sheet: Rc::new(RefCell::new(sheet)),
            controls_bound: false,
        })
    }

    /// Re-renders the hidden-category style rules. Returns the rule count.
    #[wasm_bindgen(js_name = applyStyles)]
    pub fn apply_styles(&self) -> usize {
        let state = self.state.borrow();
        StyleInjector::new(state.config()).apply(&state, &mut *self.sheet.borrow_mut())
    }

    /// Syncs the filter checkboxes and binds checkbox and flip listeners.
    ///
    /// Calling it again only re-syncs checkbox state.
    #[wasm_bindgen(js_name = bindControls)]
    pub fn bind_controls(&mut self) {
        dom::sync_checkboxes(&self.page, &self.state.borrow());
        if self.controls_bound {
            return;
        }
        let checkboxes =
            dom::bind_checkboxes(&self.page, Rc::clone(&self.state), Rc::clone(&self.sheet));
        let triggers = dom::bind_flip_triggers(&self.page, self.state.borrow().config());
        self.controls_bound = true;
        info!(checkboxes, triggers, "filter controls bound");
    }

    /// `applyStyles` followed by `bindControls`.
    #[wasm_bindgen]
    pub fn install(&mut self) -> usize {
        let rules = self.apply_styles();
        self.bind_controls();
        rules
    }

    /// Applies a checkbox change for `category` and re-renders the rules.
    #[wasm_bindgen(js_name = setChecked)]
    pub fn set_checked(&self, category: &str, checked: bool) -> bool {
        let changed = self
            .state
            .borrow_mut()
            .set_checked(&Category::from(category), checked);
        self.apply_styles();
        changed
    }

    #[wasm_bindgen(js_name = isShown)]
    pub fn is_shown(&self, category: &str) -> bool {
        self.state.borrow().is_shown(&Category::from(category))
    }

    /// Current overrides and effective sets.
    #[wasm_bindgen]
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.state.borrow().snapshot())
            .map_err(|e| JsValue::from_str(&format!("snapshot encode failed: {e}")))
    }

    /// The explicit overrides encoded as a filter cookie value.
    #[wasm_bindgen(js_name = cookieValue)]
    pub fn cookie_value(&self) -> Result<String, JsValue> {
        self.state
            .borrow()
            .to_cookie()
            .to_cookie_value()
            .map_err(js_error)
    }
}
