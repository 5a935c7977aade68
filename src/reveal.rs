//! Fades content cards in as they scroll into view. Cards that share a parent
//! are staggered by their position among that parent's animated cards.

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::dom;
use crate::error::SiteError;

pub const ELIGIBLE_SELECTOR: &str = ".vision-card, .service-card, .why-card, .process-step, \
     .industry-card, .contact-card, .about-content, .about-vision";

pub const MARKER_CLASS: &str = "animate-on-scroll";
pub const VISIBLE_CLASS: &str = "visible";

pub const VISIBILITY_THRESHOLD: f64 = 0.1;
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const STAGGER_MS: u32 = 100;

/// Delay before revealing the element at `position` among its siblings.
/// An element that is not found among them is revealed immediately.
pub fn stagger_delay(position: Option<usize>) -> u32 {
    position.map_or(0, |index| index as u32 * STAGGER_MS)
}

/// Elements already scheduled for reveal. Entries are only ever added.
#[derive(Debug)]
pub struct RevealSet<T> {
    revealed: Vec<T>,
}

impl<T> Default for RevealSet<T> {
    fn default() -> Self {
        Self { revealed: Vec::new() }
    }
}

impl<T: PartialEq + Clone> RevealSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `target` and returns its reveal delay, measured against the
    /// siblings as they are right now. Returns `None` if `target` was already
    /// scheduled.
    pub fn schedule(&mut self, target: &T, siblings: &[T]) -> Option<u32> {
        if self.contains(target) {
            return None;
        }
        self.revealed.push(target.clone());
        Some(stagger_delay(siblings.iter().position(|s| s == target)))
    }

    pub fn contains(&self, target: &T) -> bool {
        self.revealed.contains(target)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

fn animated_siblings(target: &Element) -> Vec<Element> {
    let selector = format!(".{}", MARKER_CLASS);
    target
        .parent_element()
        .and_then(|parent| dom::query_all_within(&parent, &selector).ok())
        .unwrap_or_default()
}

pub fn wire(document: &Document) -> Result<(), SiteError> {
    let elements = dom::query_all(document, ELIGIBLE_SELECTOR)?;
    for element in &elements {
        let _ = element.class_list().add_1(MARKER_CLASS);
    }

    let mut revealed: RevealSet<Element> = RevealSet::new();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }

                let target = entry.target();
                if let Some(delay) = revealed.schedule(&target, &animated_siblings(&target)) {
                    debug!("Revealing card in {}ms", delay);
                    let element = target.clone();
                    Timeout::new(delay, move || {
                        let _ = element.class_list().add_1(VISIBLE_CLASS);
                    })
                    .forget();
                }
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for element in &elements {
        observer.observe(element);
    }
    debug!("Observing {} cards for reveal", elements.len());

    Ok(())
}
