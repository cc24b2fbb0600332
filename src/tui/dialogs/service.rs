//! Service dialog
//!
//! One form for both adding and editing a service. All fields are free text;
//! the details field accepts JSON or plain text.

use crate::models::{Details, ServiceForm};
use crate::tui::widgets::TextInput;

use super::form::FormState;

/// Labels in form order
const LABELS: [&str; 13] = [
    "Name",
    "Username",
    "Email",
    "Link",
    "Webpage",
    "URL",
    "Password",
    "PIN",
    "Phone",
    "Date created",
    "Sign in with",
    "Note",
    "Details",
];

/// State for the service dialog
#[derive(Debug, Clone, Default)]
pub struct ServiceFormState {
    pub form: FormState,
    /// Index of the service being edited; `None` when adding
    pub editing: Option<usize>,
    original_details: Option<Details>,
}

impl ServiceFormState {
    /// Empty form for a new service
    pub fn new() -> Self {
        Self::from_form(&ServiceForm::default(), None)
    }

    /// Pre-filled form for an existing service
    pub fn from_form(values: &ServiceForm, editing: Option<usize>) -> Self {
        let contents = [
            &values.name,
            &values.username,
            &values.email,
            &values.link,
            &values.webpage,
            &values.url,
            &values.password,
            &values.pin,
            &values.phone,
            &values.date_created,
            &values.sign_in_with,
            &values.note,
            &values.details,
        ];

        let fields = LABELS
            .iter()
            .zip(contents)
            .map(|(label, content)| {
                TextInput::new()
                    .label(*label)
                    .secret(matches!(*label, "Password" | "PIN"))
                    .content(content.as_str())
            })
            .collect();

        let mut form = FormState::new(fields);
        if let Some(input) = form.fields.last_mut() {
            input.placeholder = "JSON or text".to_string();
        }
        Self {
            form,
            editing,
            original_details: values.original_details.clone(),
        }
    }

    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit Service"
        } else {
            "Add Service"
        }
    }

    /// The raw form values
    pub fn to_form(&self) -> ServiceForm {
        let v = |i: usize| self.form.value(i).to_string();
        ServiceForm {
            name: v(0),
            username: v(1),
            email: v(2),
            link: v(3),
            webpage: v(4),
            url: v(5),
            password: v(6),
            pin: v(7),
            phone: v(8),
            date_created: v(9),
            sign_in_with: v(10),
            note: v(11),
            details: v(12),
            original_details: self.original_details.clone(),
        }
    }
}
