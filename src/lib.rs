//! Card-list visibility filters for the manabase pages.
//!
//! Pages hide whole categories of card entries (silver-bordered cards, mana
//! rocks, ...) based on `show`/`hide` query parameters and a `filter` cookie.
//! `FilterState` reconciles that input against the page defaults,
//! `StyleInjector` turns it into CSS rules, and `FilterUi` keeps the filter
//! checkboxes in step. With the `wasm` feature the `WasmFilter` handle wires
//! all of it into the browser.

pub mod category;
pub mod config;
#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub mod dom;
pub mod error;
pub mod source;
pub mod state;
pub mod style;
pub mod ui;
#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub mod wasm_api;

pub use category::Category;
pub use config::{FilterConfig, SelectorStyle};
pub use error::FilterError;
pub use source::{CookieFilter, RawFilters};
pub use state::{FilterSnapshot, FilterState};
pub use style::{RuleBuffer, StyleInjector, StyleSheetController, hidden_rule};
pub use ui::{FilterUi, category_from_checkbox_id, checkbox_id};
#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub use wasm_api::WasmFilter;
