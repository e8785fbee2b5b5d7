//! Browser bindings: page input, `<style>` injection, checkbox and flip wiring.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlDocument, HtmlHeadElement, HtmlInputElement, Window};

use crate::category::Category;
use crate::config::FilterConfig;
use crate::error::FilterError;
use crate::state::FilterState;
use crate::style::{STYLE_MARKER, StyleSheetController, injected_style_selector};
use crate::ui::{FilterUi, category_from_checkbox_id, flip_target};

/// Handle to the current window and document.
#[derive(Debug, Clone)]
pub struct Page {
    window: Window,
    document: Document,
}

impl Page {
    pub fn current() -> Result<Self, FilterError> {
        let window = web_sys::window().ok_or_else(|| FilterError::Dom("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| FilterError::Dom("no document".into()))?;
        Ok(Self { window, document })
    }

    /// `location.search`, or empty if it cannot be read.
    pub fn query_string(&self) -> String {
        self.window.location().search().unwrap_or_default()
    }

    /// `document.cookie`, or empty if it cannot be read.
    pub fn cookie_header(&self) -> String {
        self.document
            .dyn_ref::<HtmlDocument>()
            .and_then(|doc| doc.cookie().ok())
            .unwrap_or_default()
    }

    /// Elements matching `selector`. An invalid selector matches nothing.
    pub fn elements(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            warn!(selector, "invalid selector");
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }
}

/// `StyleSheetController` writing one `<style>` element per rule into `<head>`.
#[derive(Debug, Clone)]
pub struct DomStyleSheet {
    document: Document,
    head: HtmlHeadElement,
}

impl DomStyleSheet {
    pub fn new(page: &Page) -> Result<Self, FilterError> {
        let head = page
            .document
            .head()
            .ok_or_else(|| FilterError::Dom("no document head".into()))?;
        Ok(Self {
            document: page.document.clone(),
            head,
        })
    }
}

impl StyleSheetController for DomStyleSheet {
    fn clear(&mut self) {
        let Ok(list) = self.document.query_selector_all(&injected_style_selector()) else {
            return;
        };
        for node in (0..list.length()).filter_map(|i| list.get(i)) {
            if let Ok(element) = node.dyn_into::<Element>() {
                element.remove();
            }
        }
    }

    fn add_rule(&mut self, rule: &str) {
        let style = match self.document.create_element("style") {
            Ok(style) => style,
            Err(err) => {
                warn!(?err, "failed to create style element");
                return;
            }
        };
        // An unmarked rule could never be cleared again.
        if let Err(err) = style
            .set_attribute("type", "text/css")
            .and_then(|()| style.set_attribute(STYLE_MARKER, ""))
        {
            warn!(?err, "failed to mark style element");
            return;
        }
        style.set_text_content(Some(rule));
        if let Err(err) = self.head.append_child(&style) {
            warn!(?err, "failed to append style element");
        }
    }
}

fn filter_checkboxes(page: &Page, config: &FilterConfig) -> Vec<HtmlInputElement> {
    page.elements(&format!("input.{}", config.checkbox_class))
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlInputElement>().ok())
        .collect()
}

/// Sets every filter checkbox to the category's effective shown state.
pub fn sync_checkboxes(page: &Page, state: &FilterState) {
    let (inputs, categories): (Vec<HtmlInputElement>, Vec<Category>) =
        filter_checkboxes(page, state.config())
            .into_iter()
            .filter_map(|input| {
                category_from_checkbox_id(state.config(), &input.id()).map(|c| (input, c))
            })
            .unzip();
    for (input, (_, checked)) in inputs
        .iter()
        .zip(FilterUi::checkbox_states(state, &categories))
    {
        input.set_checked(checked);
    }
}

/// Attaches a `change` listener to every filter checkbox. Returns the count.
pub fn bind_checkboxes(
    page: &Page,
    state: Rc<RefCell<FilterState>>,
    sheet: Rc<RefCell<DomStyleSheet>>,
) -> usize {
    let inputs = filter_checkboxes(page, state.borrow().config());
    for input in &inputs {
        let state = Rc::clone(&state);
        let sheet = Rc::clone(&sheet);
        let on_change = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(input) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            FilterUi::on_change(
                &mut state.borrow_mut(),
                &input.id(),
                input.checked(),
                &mut *sheet.borrow_mut(),
            );
        });
        if let Err(err) =
            input.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
        {
            warn!(?err, "failed to bind filter checkbox");
        }
        // Listeners live as long as the page.
        on_change.forget();
    }
    debug!(count = inputs.len(), "bound filter checkboxes");
    inputs.len()
}

/// Makes every flip trigger toggle `flip_class` on its `data-target` elements.
///
/// Returns the number of triggers bound. Triggers without a target are skipped.
pub fn bind_flip_triggers(page: &Page, config: &FilterConfig) -> usize {
    let mut bound = 0;
    for trigger in page.elements(&config.flip_trigger_selector) {
        let Some(target) = flip_target(trigger.get_attribute("data-target")) else {
            continue;
        };
        let page = page.clone();
        let flip_class = config.flip_class.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            for element in page.elements(&target) {
                if let Err(err) = element.class_list().toggle(&flip_class) {
                    warn!(?err, "failed to flip card");
                }
            }
        });
        match trigger.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
            Ok(()) => bound += 1,
            Err(err) => warn!(?err, "failed to bind flip trigger"),
        }
        on_click.forget();
    }
    debug!(count = bound, "bound flip triggers");
    bound
}
