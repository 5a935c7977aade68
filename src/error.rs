use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring a behavior to the page.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("missing element: {0}")]
    MissingElement(String),
    #[error("element {0} has an unexpected type")]
    WrongElementType(String),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Js(js_message(&value))
    }
}

/// Failures of a contact form submission. All of them end in the same
/// error notification; the variants only matter for logging.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("could not build form payload: {0}")]
    Payload(String),
}

pub(crate) fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
