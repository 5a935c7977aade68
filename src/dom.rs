//! Small helpers over `web-sys` shared by the page behaviors.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, NodeList, Window};

use crate::error::SiteError;

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, SiteError> {
    window.document().ok_or(SiteError::NoDocument)
}

/// Looks up a required element by id and casts it to the expected type.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, SiteError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::MissingElement(format!("#{}", id)))?
        .dyn_into::<T>()
        .map_err(|_| SiteError::WrongElementType(format!("#{}", id)))
}

/// Like [`by_id`], but absence is not an error.
pub fn find_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, SiteError> {
    Ok(elements(&document.query_selector_all(selector)?))
}

pub fn query_all_within(root: &Element, selector: &str) -> Result<Vec<Element>, SiteError> {
    Ok(elements(&root.query_selector_all(selector)?))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Registers `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), SiteError>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}
