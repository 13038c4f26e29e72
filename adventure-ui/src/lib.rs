//! Adventure Page Enhancements (WASM)
//!
//! Browser front-end for the `adventure` crate. Implements its `DomHost`
//! over `web_sys`, draws the first tip from `Math.random`, and starts both
//! page features once the document has been parsed.

use adventure::{page, Config, StartReport, UnitRandom};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Event;

pub mod host;
pub mod logging;

pub use host::{WebButton, WebElement, WebHost, WebText};

/// Start both features on `host` with browser randomness
pub fn run(config: &Config, host: &WebHost) -> StartReport {
    let mut rng = UnitRandom::new(js_sys::Math::random);
    page::start(config, host, &mut rng).report
}

/// Load the embedded config, set up logging and run once the DOM is ready
pub fn boot() {
    let config = Config::embedded().unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("Invalid embedded config: {}", e).into());
        Config::default()
    });
    logging::init(&config.logging);

    let Some(host) = WebHost::current() else {
        tracing::warn!("No document available, page enhancements not started");
        return;
    };

    if host.document().ready_state() != "loading" {
        run(&config, &host);
        return;
    }

    let document = host.document().clone();
    let on_ready = Closure::wrap(Box::new(move |_: Event| {
        run(&config, &host);
    }) as Box<dyn FnMut(Event)>);

    match document.add_event_listener_with_callback(
        "DOMContentLoaded",
        on_ready.as_ref().unchecked_ref(),
    ) {
        Ok(()) => on_ready.forget(),
        Err(e) => tracing::warn!(error = ?e, "Could not wait for DOMContentLoaded"),
    }
}
