//! Navigation bar: mobile menu toggle, scrolled styling and the active-link
//! highlight that follows the section under the viewport.

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::dom;
use crate::error::SiteError;

/// Scroll offset past which the navbar gets its `scrolled` style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Added to the scroll offset before matching it against section bounds.
pub const ACTIVE_LINK_OFFSET: f64 = 100.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// Vertical extent of a page section, in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open: `[top, top + height)`.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Index of the section whose link should be highlighted at `scroll_y`.
///
/// Sections are checked in document order and the last match wins, so
/// overlapping sections resolve to the later one. `None` means no section
/// matched and the current highlight should be left alone.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<usize> {
    let probe = scroll_y + ACTIVE_LINK_OFFSET;
    sections.iter().rposition(|section| section.contains(probe))
}

pub fn link_selector(section_id: &str) -> String {
    format!(".nav-link[href=\"#{}\"]", section_id)
}

struct TrackedSection {
    section: HtmlElement,
    link: Element,
}

impl TrackedSection {
    fn bounds(&self) -> SectionBounds {
        SectionBounds::new(
            self.section.offset_top() as f64,
            self.section.offset_height() as f64,
        )
    }
}

pub fn wire(window: &Window, document: &Document) -> Result<(), SiteError> {
    let navbar: Element = dom::by_id(document, "navbar")?;
    let toggle: Element = dom::by_id(document, "navToggle")?;
    let menu: Element = dom::by_id(document, "navMenu")?;
    let links = dom::query_all(document, ".nav-link")?;

    {
        let menu = menu.clone();
        let button = toggle.clone();
        dom::listen(&toggle, "click", move |_| {
            let _ = menu.class_list().toggle("open");
            let _ = button.class_list().toggle("active");
        })?;
    }

    for link in &links {
        let menu = menu.clone();
        let toggle = toggle.clone();
        dom::listen(link, "click", move |_| {
            let _ = menu.class_list().remove_1("open");
            let _ = toggle.class_list().remove_1("active");
        })?;
    }

    {
        let win = window.clone();
        dom::listen(window, "scroll", move |_| {
            let scroll_y = win.scroll_y().unwrap_or(0.0);
            let _ = navbar
                .class_list()
                .toggle_with_force("scrolled", is_scrolled(scroll_y));
        })?;
    }

    let tracked = tracked_sections(document)?;
    debug!("Tracking {} sections for nav highlighting", tracked.len());

    let win = window.clone();
    dom::listen(window, "scroll", move |_| {
        let scroll_y = win.scroll_y().unwrap_or(0.0);
        let bounds: Vec<SectionBounds> = tracked.iter().map(TrackedSection::bounds).collect();
        if let Some(index) = active_section(scroll_y, &bounds) {
            for link in &links {
                let _ = link.class_list().remove_1("active");
            }
            let _ = tracked[index].link.class_list().add_1("active");
        }
    })?;

    Ok(())
}

/// Sections with an id and a matching nav link. The page markup is static,
/// so this is resolved once.
fn tracked_sections(document: &Document) -> Result<Vec<TrackedSection>, SiteError> {
    let mut tracked = Vec::new();
    for section in dom::query_all(document, "section[id]")? {
        let id = section.id();
        let Some(link) = document.query_selector(&link_selector(&id))? else {
            continue;
        };
        if let Ok(section) = section.dyn_into::<HtmlElement>() {
            tracked.push(TrackedSection { section, link });
        }
    }
    Ok(tracked)
}
