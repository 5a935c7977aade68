use gloo_timers::callback::Timeout;
use web_sys::Document;

use crate::config;

const NOTIFICATION_ID: &str = "notification";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NoticeKind::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NoticeKind::Error }
    }

    /// Full class attribute while the notice is on screen.
    pub fn class_name(&self) -> String {
        format!("notification {} show", self.kind.as_str())
    }
}

/// Writes `notice` into the page's notification element and hides it again
/// after [`config::NOTIFICATION_DURATION_MS`]. Does nothing if the page has no
/// notification element.
pub fn show(document: &Document, notice: &Notice) {
    let Some(element) = document.get_element_by_id(NOTIFICATION_ID) else {
        return;
    };

    element.set_text_content(Some(&notice.message));
    element.set_class_name(&notice.class_name());

    // Earlier timers are left running; each one only strips `show`.
    Timeout::new(config::NOTIFICATION_DURATION_MS, move || {
        let _ = element.class_list().remove_1("show");
    })
    .forget();
}
