//! Hero statistics that count up from zero the first time they scroll into view.
//!
//! Each step adds a fixed fraction of the target rather than measuring elapsed
//! time, so a busy main thread stretches the animation past its nominal two
//! seconds.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::dom;
use crate::error::SiteError;

pub const DURATION_MS: f64 = 2000.0;
pub const FRAME_MS: f64 = 16.0;

/// Share of the stats container that must be visible to start counting.
pub const VISIBILITY_THRESHOLD: f64 = 0.3;

/// Parses a leading integer the way JavaScript's `parseInt(s)` does without a
/// radix: leading whitespace, an optional sign, an optional `0x` prefix, then
/// as many digits as are present. Anything else yields `NaN`.
pub fn parse_int(raw: &str) -> f64 {
    let mut rest = raw.trim_start();
    let mut sign = 1.0;
    if let Some(stripped) = rest.strip_prefix('-') {
        sign = -1.0;
        rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix('+') {
        rest = stripped;
    }

    let radix = match rest.get(..2) {
        Some("0x") | Some("0X") => {
            rest = &rest[2..];
            16
        }
        _ => 10,
    };

    let mut value: f64 = 0.0;
    let mut seen_digit = false;
    for c in rest.chars() {
        let Some(digit) = c.to_digit(radix) else {
            break;
        };
        value = value * radix as f64 + digit as f64;
        seen_digit = true;
    }

    if seen_digit {
        sign * value
    } else {
        f64::NAN
    }
}

/// Renders a number the way JavaScript stringifies it for integral values:
/// `NaN`, `Infinity`, no trailing `.0`, and negative zero as `0`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e21 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

/// One animation step's outcome.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Frame {
    /// Still counting; shows the rounded-up accumulator.
    Running(f64),
    /// Reached the target, which is shown exactly.
    Finished(f64),
}

impl Frame {
    pub fn value(&self) -> f64 {
        match self {
            Frame::Running(v) | Frame::Finished(v) => *v,
        }
    }

    pub fn text(&self) -> String {
        format_number(self.value())
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Frame::Finished(_))
    }
}

/// Linear accumulator behind one displayed statistic.
#[derive(Clone, Debug)]
pub struct Counter {
    target: f64,
    increment: f64,
    current: f64,
}

impl Counter {
    pub fn new(target: f64) -> Self {
        Self {
            target,
            increment: target / (DURATION_MS / FRAME_MS),
            current: 0.0,
        }
    }

    /// Counter for a `data-target` attribute value; a missing attribute parses
    /// like an empty string.
    pub fn from_attribute(raw: Option<&str>) -> Self {
        Self::new(parse_int(raw.unwrap_or("")))
    }

    pub fn step(&mut self) -> Frame {
        self.current += self.increment;
        if self.current < self.target {
            Frame::Running(self.current.ceil())
        } else {
            Frame::Finished(self.target)
        }
    }
}

/// A flag that can be raised once per page session.
#[derive(Debug, Default)]
pub struct OnceLatch {
    fired: Cell<bool>,
}

impl OnceLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` only for the first call.
    pub fn fire(&self) -> bool {
        !self.fired.replace(true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub fn wire(document: &Document) -> Result<(), SiteError> {
    let stats = dom::query_all(document, ".hero-stat-number")?;
    let animated = OnceLatch::new();

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    if animated.fire() {
                        debug!("Starting {} stat counters", stats.len());
                        for stat in &stats {
                            let counter = Counter::from_attribute(
                                stat.get_attribute("data-target").as_deref(),
                            );
                            animate(stat.clone(), counter);
                        }
                    }
                    observer.disconnect();
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    if let Some(container) = document.query_selector(".hero-stats")? {
        observer.observe(&container);
    }

    Ok(())
}

/// Writes a frame; returns whether another frame is needed.
fn render(stat: &Element, frame: Frame) -> bool {
    stat.set_text_content(Some(&frame.text()));
    !frame.is_finished()
}

fn animate(stat: Element, mut counter: Counter) {
    // First step runs right away, later ones on animation frames.
    if !render(&stat, counter.step()) {
        return;
    }

    let frame: FrameCallback = Rc::new(RefCell::new(None));
    let next = frame.clone();
    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if render(&stat, counter.step()) {
            request_frame(&next);
        } else {
            let _ = next.borrow_mut().take();
        }
    }) as Box<dyn FnMut()>));

    request_frame(&frame);
}

fn request_frame(frame: &FrameCallback) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(callback) = frame.borrow().as_ref() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}
