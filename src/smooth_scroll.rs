use web_sys::{Document, ScrollBehavior, ScrollToOptions, Window};

use crate::dom;
use crate::error::SiteError;

/// Height of the fixed header that in-page targets must clear.
pub const HEADER_OFFSET: f64 = 80.0;

/// Document-space scroll position that puts a target just below the header.
pub fn scroll_destination(target_viewport_top: f64, scroll_y: f64) -> f64 {
    target_viewport_top + scroll_y - HEADER_OFFSET
}

pub fn wire(window: &Window, document: &Document) -> Result<(), SiteError> {
    let anchors = dom::query_all(document, "a[href^=\"#\"]")?;

    for anchor in anchors {
        let win = window.clone();
        let doc = document.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            // A bare "#" is not a valid selector; treat it like a missing target.
            let Ok(Some(target)) = doc.query_selector(&href) else {
                return;
            };
            let top = scroll_destination(
                target.get_bounding_client_rect().top(),
                win.scroll_y().unwrap_or(0.0),
            );
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&options);
        })?;
    }

    Ok(())
}
