use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement, HtmlOptionElement, HtmlSelectElement};

use crate::config;
use crate::dom;
use crate::error::SiteError;

pub fn inquiry_subject(subject: &str) -> String {
    format!("Inquiry: {} - {}", subject, config::COMPANY_NAME)
}

/// What a service button writes into the contact form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prefill {
    /// New value for the service select, if it offers the subject.
    pub service: Option<String>,
    /// Text for the hidden subject field.
    pub subject_line: String,
}

/// Works out the prefill for a button's `data-subject`. Returns `None` when
/// the button carries no subject.
pub fn prefill<'a, I>(subject: Option<&str>, options: I) -> Option<Prefill>
where
    I: IntoIterator<Item = &'a str>,
{
    let subject = subject.filter(|s| !s.is_empty())?;
    let service = options
        .into_iter()
        .any(|value| value == subject)
        .then(|| subject.to_string());
    Some(Prefill {
        service,
        subject_line: inquiry_subject(subject),
    })
}

fn option_values(select: &HtmlSelectElement) -> Vec<String> {
    let options = select.options();
    (0..options.length())
        .filter_map(|i| options.item(i))
        .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
        .map(|option| option.value())
        .collect()
}

pub fn wire(document: &Document) -> Result<(), SiteError> {
    let buttons = dom::query_all(document, ".btn-service")?;
    debug!("Wiring {} service quote buttons", buttons.len());

    for button in buttons {
        let doc = document.clone();
        let source = button.clone();
        dom::listen(&button, "click", move |_| {
            let select = dom::find_by_id::<HtmlSelectElement>(&doc, "service");
            let values = select.as_ref().map(option_values).unwrap_or_default();
            let subject = source.get_attribute("data-subject");

            let Some(plan) = prefill(subject.as_deref(), values.iter().map(String::as_str)) else {
                return;
            };

            if let (Some(select), Some(service)) = (&select, &plan.service) {
                select.set_value(service);
            }
            if let Some(field) = dom::find_by_id::<HtmlInputElement>(&doc, "formSubject") {
                field.set_value(&plan.subject_line);
            }
        })?;
    }

    Ok(())
}
