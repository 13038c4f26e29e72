//! Browser Host
//!
//! `DomHost` over a live `web_sys::Document`: CSS selector queries, id
//! lookups, an `IntersectionObserver` per reveal start-up and plain click
//! listeners. Callbacks are leaked with `forget`, since every feature lives
//! until the page unloads.

use adventure::{
    ClassTarget, ClickHandler, DomError, DomHost, TextSurface, Threshold, Toggle,
    VisibilityCallback, VisibilityEntry,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlButtonElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Element observed for scroll reveal
#[derive(Clone, Debug, PartialEq)]
pub struct WebElement(pub Element);

impl From<Element> for WebElement {
    fn from(element: Element) -> Self {
        Self(element)
    }
}

impl ClassTarget for WebElement {
    fn add_class(&self, class: &str) -> Result<(), DomError> {
        self.0
            .class_list()
            .add_1(class)
            .map_err(|e| DomError::Host(js_error(e)))
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }
}

/// Element showing the current tip
#[derive(Clone, Debug, PartialEq)]
pub struct WebText(pub Element);

impl TextSurface for WebText {
    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn text(&self) -> Option<String> {
        self.0.text_content()
    }
}

/// Previous or next tip button
#[derive(Clone, Debug, PartialEq)]
pub struct WebButton(pub HtmlButtonElement);

impl Toggle for WebButton {
    fn set_disabled(&self, disabled: bool) {
        self.0.set_disabled(disabled);
    }

    fn is_disabled(&self) -> bool {
        self.0.disabled()
    }
}

/// The hosting page
#[derive(Clone, Debug)]
pub struct WebHost {
    document: Document,
}

impl WebHost {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Host for the current window's document, if there is one
    pub fn current() -> Option<Self> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(Self::new)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl DomHost for WebHost {
    type Element = WebElement;
    type Text = WebText;
    type Button = WebButton;

    fn select_all(&self, selector: &str) -> Result<Vec<WebElement>, DomError> {
        let nodes = self
            .document
            .query_selector_all(selector)
            .map_err(|e| DomError::InvalidSelector {
                selector: selector.to_string(),
                reason: js_error(e),
            })?;

        Ok((0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(WebElement)
            .collect())
    }

    fn text_by_id(&self, id: &str) -> Option<WebText> {
        self.document.get_element_by_id(id).map(WebText)
    }

    fn button_by_id(&self, id: &str) -> Option<WebButton> {
        let element = self.document.get_element_by_id(id)?;
        match element.dyn_into::<HtmlButtonElement>() {
            Ok(button) => Some(WebButton(button)),
            Err(_) => {
                tracing::warn!(id, "Element is not a button, ignoring it");
                None
            }
        }
    }

    fn observe_visibility(
        &self,
        targets: Vec<WebElement>,
        threshold: Threshold,
        mut on_batch: VisibilityCallback<WebElement>,
    ) -> Result<(), DomError> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let batch = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| {
                        VisibilityEntry::from_platform(
                            WebElement(entry.target()),
                            entry.is_intersecting(),
                            entry.intersection_ratio(),
                            threshold,
                        )
                    })
                    .collect();
                on_batch(batch);
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold.value()));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| DomError::Host(js_error(e)))?;
        callback.forget();

        for target in &targets {
            observer.observe(&target.0);
        }
        Ok(())
    }

    fn on_click(&self, button: &WebButton, mut handler: ClickHandler) -> Result<(), DomError> {
        let callback = Closure::wrap(Box::new(move |_: Event| {
            handler();
        }) as Box<dyn FnMut(Event)>);

        button
            .0
            .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
            .map_err(|e| DomError::Host(js_error(e)))?;
        callback.forget();
        Ok(())
    }
}
