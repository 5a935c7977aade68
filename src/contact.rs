//! Contact form: posts the fields to the form's action without leaving the
//! page and reports the result through the notification bar.

use std::future::Future;

use gloo_net::http::Request;
use log::{debug, warn};
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, FormData, HtmlFormElement};

use crate::config;
use crate::dom;
use crate::error::{js_message, SiteError, SubmitError};
use crate::notification::{self, Notice};

pub const LOADING_CONTENT: &str = "<i class=\"fas fa-spinner fa-spin\"></i> Sending...";

pub fn success_notice() -> Notice {
    Notice::success("Message sent successfully! We'll get back to you within 24 hours.")
}

pub fn failure_notice() -> Notice {
    Notice::error(format!(
        "Something went wrong. Please email us directly at {}",
        config::FALLBACK_EMAIL
    ))
}

/// The parts of the page a submission touches.
pub trait SubmitSurface {
    fn button_content(&self) -> String;
    fn set_button_content(&self, content: &str);
    fn set_button_disabled(&self, disabled: bool);
    fn reset_fields(&self);
    fn notify(&self, notice: &Notice);
}

/// Holds the submit button in its loading state; restores the original
/// content and re-enables it when dropped.
struct BusyButton<'a, S: SubmitSurface> {
    surface: &'a S,
    original: String,
}

impl<'a, S: SubmitSurface> BusyButton<'a, S> {
    fn engage(surface: &'a S) -> Self {
        let original = surface.button_content();
        surface.set_button_content(LOADING_CONTENT);
        surface.set_button_disabled(true);
        Self { surface, original }
    }
}

impl<S: SubmitSurface> Drop for BusyButton<'_, S> {
    fn drop(&mut self) {
        self.surface.set_button_content(&self.original);
        self.surface.set_button_disabled(false);
    }
}

/// Runs one submission: puts the button into its loading state, awaits
/// `request`, reports the outcome and finally restores the button.
///
/// `request` should be lazy (an `async` block) so the payload is built after
/// the button has been swapped.
pub async fn submit<S, F>(surface: &S, request: F) -> Result<(), SubmitError>
where
    S: SubmitSurface,
    F: Future<Output = Result<(), SubmitError>>,
{
    let _busy = BusyButton::engage(surface);

    let outcome = request.await;
    match &outcome {
        Ok(()) => {
            surface.notify(&success_notice());
            surface.reset_fields();
        }
        Err(e) => {
            warn!("Contact form submission failed: {}", e);
            surface.notify(&failure_notice());
        }
    }
    outcome
}

#[derive(Debug, Deserialize)]
struct RejectionBody {
    #[serde(default)]
    errors: Vec<RejectionDetail>,
}

#[derive(Debug, Deserialize)]
struct RejectionDetail {
    message: String,
}

/// Messages from a JSON error body such as `{"errors":[{"message":"..."}]}`.
/// Bodies in any other shape yield nothing.
pub fn rejection_messages(body: &str) -> Vec<String> {
    serde_json::from_str::<RejectionBody>(body)
        .map(|parsed| parsed.errors.into_iter().map(|e| e.message).collect())
        .unwrap_or_default()
}

async fn post_form(form: HtmlFormElement) -> Result<(), SubmitError> {
    let payload =
        FormData::new_with_form(&form).map_err(|e| SubmitError::Payload(js_message(&e)))?;

    let response = Request::post(&form.action())
        .header("Accept", "application/json")
        .body(payload)
        .send()
        .await?;

    if response.ok() {
        return Ok(());
    }

    let status = response.status();
    if let Ok(body) = response.text().await {
        for message in rejection_messages(&body) {
            warn!("Form endpoint rejected submission: {}", message);
        }
    }
    Err(SubmitError::Status(status))
}

struct ContactFormDom {
    document: Document,
    form: HtmlFormElement,
    button: Option<Element>,
}

impl ContactFormDom {
    fn new(document: &Document, form: &HtmlFormElement) -> Self {
        let button = form.query_selector(".btn-submit").ok().flatten();
        if button.is_none() {
            warn!("Contact form has no .btn-submit; submitting without loading state");
        }
        Self {
            document: document.clone(),
            form: form.clone(),
            button,
        }
    }
}

impl SubmitSurface for ContactFormDom {
    fn button_content(&self) -> String {
        self.button
            .as_ref()
            .map(|b| b.inner_html())
            .unwrap_or_default()
    }

    fn set_button_content(&self, content: &str) {
        if let Some(button) = &self.button {
            button.set_inner_html(content);
        }
    }

    fn set_button_disabled(&self, disabled: bool) {
        if let Some(button) = &self.button {
            let _ = button.toggle_attribute_with_force("disabled", disabled);
        }
    }

    fn reset_fields(&self) {
        self.form.reset();
    }

    fn notify(&self, notice: &Notice) {
        notification::show(&self.document, notice);
    }
}

pub fn wire(document: &Document) -> Result<(), SiteError> {
    let Some(form) = dom::find_by_id::<HtmlFormElement>(document, "contactForm") else {
        debug!("No contact form on this page");
        return Ok(());
    };

    let doc = document.clone();
    let target = form.clone();
    dom::listen(&form, "submit", move |event| {
        event.prevent_default();
        let surface = ContactFormDom::new(&doc, &target);
        let form = target.clone();
        spawn_local(async move {
            let _ = submit(&surface, post_form(form)).await;
        });
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_notice_points_to_fallback_email() {
        let notice = failure_notice();
        assert!(notice.message.contains("tangent.analytics.ca@gmail.com"));
        assert_eq!(notice.kind, crate::notification::NoticeKind::Error);
    }

    #[test]
    fn rejection_messages_reads_error_list() {
        let body = r#"{"errors":[{"code":"TYPE_EMAIL","message":"should be an email"}]}"#;
        assert_eq!(rejection_messages(body), vec!["should be an email".to_string()]);
    }

    #[test]
    fn rejection_messages_ignores_other_bodies() {
        assert!(rejection_messages("<html>502 Bad Gateway</html>").is_empty());
        assert!(rejection_messages(r#"{"ok":false}"#).is_empty());
    }
}
