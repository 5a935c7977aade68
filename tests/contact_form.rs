use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use tangent_site::contact::{submit, SubmitSurface, LOADING_CONTENT};
use tangent_site::notification::{Notice, NoticeKind};
use tangent_site::SubmitError;

const ORIGINAL_LABEL: &str = "<i class=\"fas fa-paper-plane\"></i> Send Message";

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Content(String),
    Disabled(bool),
    Reset,
    Notified(Notice),
}

struct FakeForm {
    content: RefCell<String>,
    disabled: Cell<bool>,
    fields: RefCell<Vec<String>>,
    events: RefCell<Vec<Event>>,
}

impl FakeForm {
    fn new() -> Self {
        Self {
            content: RefCell::new(ORIGINAL_LABEL.to_string()),
            disabled: Cell::new(false),
            fields: RefCell::new(vec!["Ada".into(), "ada@example.com".into()]),
            events: RefCell::new(Vec::new()),
        }
    }

    fn notices(&self) -> Vec<Notice> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Notified(n) => Some(n.clone()),
                _ => None,
            })
            .collect()
    }
}

impl SubmitSurface for FakeForm {
    fn button_content(&self) -> String {
        self.content.borrow().clone()
    }

    fn set_button_content(&self, content: &str) {
        *self.content.borrow_mut() = content.to_string();
        self.events.borrow_mut().push(Event::Content(content.to_string()));
    }

    fn set_button_disabled(&self, disabled: bool) {
        self.disabled.set(disabled);
        self.events.borrow_mut().push(Event::Disabled(disabled));
    }

    fn reset_fields(&self) {
        self.fields.borrow_mut().iter_mut().for_each(String::clear);
        self.events.borrow_mut().push(Event::Reset);
    }

    fn notify(&self, notice: &Notice) {
        self.events.borrow_mut().push(Event::Notified(notice.clone()));
    }
}

#[test]
fn successful_submission_clears_form_and_restores_button() {
    let form = FakeForm::new();

    let result = block_on(submit(&form, async {
        // The button is already in its loading state while the request runs.
        assert_eq!(form.button_content(), LOADING_CONTENT);
        assert!(form.disabled.get());
        Ok(())
    }));

    assert!(result.is_ok());
    let notices = form.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Success);
    assert!(form.fields.borrow().iter().all(String::is_empty));
    assert_eq!(form.button_content(), ORIGINAL_LABEL);
    assert!(!form.disabled.get());
}

#[test]
fn server_error_shows_fallback_email_and_restores_button() {
    let form = FakeForm::new();

    let result = block_on(submit(&form, async { Err(SubmitError::Status(500)) }));

    assert!(matches!(result, Err(SubmitError::Status(500))));
    let notices = form.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Error);
    assert!(notices[0].message.contains("tangent.analytics.ca@gmail.com"));
    assert_eq!(form.fields.borrow()[0], "Ada");
    assert!(!form.events.borrow().contains(&Event::Reset));
    assert_eq!(form.button_content(), ORIGINAL_LABEL);
    assert!(!form.disabled.get());
}

#[test]
fn button_is_restored_after_outcome_is_reported() {
    let form = FakeForm::new();

    let _ = block_on(submit(&form, async { Err(SubmitError::Payload("detached".into())) }));

    let events = form.events.borrow();
    let notified = events
        .iter()
        .position(|e| matches!(e, Event::Notified(_)))
        .expect("notice shown");
    let restored = events
        .iter()
        .rposition(|e| *e == Event::Content(ORIGINAL_LABEL.to_string()))
        .expect("label restored");
    assert!(notified < restored);
    assert_eq!(events.last(), Some(&Event::Disabled(false)));
}
