//! Interactive behavior for the Tangent Analytics marketing site.
//!
//! The page markup is served as static HTML; this crate attaches to it once
//! the DOM is ready and wires six independent behaviors: navigation, smooth
//! in-page scrolling, hero stat counters, the contact form, service quote
//! prefill and scroll-reveal of content cards.

use log::{debug, info, warn};

pub mod config;
pub mod contact;
pub mod counter;
pub mod dom;
pub mod error;
pub mod nav;
pub mod notification;
pub mod quote;
pub mod reveal;
pub mod smooth_scroll;

pub use error::{SiteError, SubmitError};

/// Runs `f` once the document has been parsed, right away if it already has.
pub fn on_dom_ready<F>(f: F) -> Result<(), SiteError>
where
    F: FnOnce() + 'static,
{
    let window = dom::window()?;
    let document = dom::document(&window)?;

    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }

    let mut pending = Some(f);
    dom::listen(&document, "DOMContentLoaded", move |_| {
        if let Some(f) = pending.take() {
            f();
        }
    })
}

/// Wires every page behavior. A behavior whose elements are missing is
/// skipped without affecting the others.
pub fn init() -> Result<(), SiteError> {
    let window = dom::window()?;
    let document = dom::document(&window)?;

    report("navigation", nav::wire(&window, &document));
    report("smooth scroll", smooth_scroll::wire(&window, &document));
    report("stat counters", counter::wire(&document));
    report("contact form", contact::wire(&document));
    report("service quotes", quote::wire(&document));
    report("scroll reveal", reveal::wire(&document));

    info!("Page behaviors ready");
    Ok(())
}

fn report(behavior: &str, result: Result<(), SiteError>) {
    match result {
        Ok(()) => debug!("Wired {}", behavior),
        Err(e) => warn!("Skipping {}: {}", behavior, e),
    }
}
