//! Service model
//!
//! A single credential entry nested under an account or the OTHERS bucket.
//! Services have no stable id; they are addressed by their position in the
//! parent's list.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::details::Details;
use super::lenient;

/// A credential entry for one service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Display name (required, non-empty)
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub username: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub email: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub link: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub webpage: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub url: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub password: String,

    #[serde(default, rename = "PIN", deserialize_with = "lenient::string")]
    pub pin: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub phone: String,

    #[serde(default, rename = "dateCreated", deserialize_with = "lenient::string")]
    pub date_created: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub sign_in_with: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub note: String,

    /// Free-form JSON or text
    #[serde(default)]
    pub details: Details,

    /// Fields present in the file that this model does not know about
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Service {
    /// Create a service with only a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Name to show in lists
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Unnamed Service"
        } else {
            &self.name
        }
    }

    /// Labelled string fields in form order (name and details excluded)
    pub fn text_fields(&self) -> [(&'static str, &str); 11] {
        [
            ("username", self.username.as_str()),
            ("email", self.email.as_str()),
            ("link", self.link.as_str()),
            ("webpage", self.webpage.as_str()),
            ("url", self.url.as_str()),
            ("password", self.password.as_str()),
            ("PIN", self.pin.as_str()),
            ("phone", self.phone.as_str()),
            ("dateCreated", self.date_created.as_str()),
            ("sign_in_with", self.sign_in_with.as_str()),
            ("note", self.note.as_str()),
        ]
    }
}

/// Raw form input for creating or replacing a service
///
/// Every field is free text as typed; `details` is parsed on submit unless it
/// still holds the text it was pre-filled with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceForm {
    pub name: String,
    pub username: String,
    pub email: String,
    pub link: String,
    pub webpage: String,
    pub url: String,
    pub password: String,
    pub pin: String,
    pub phone: String,
    pub date_created: String,
    pub sign_in_with: String,
    pub note: String,
    pub details: String,
    /// Details of the service the form was filled from
    pub original_details: Option<Details>,
}

impl ServiceForm {
    /// Create a form with only a name filled in
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Pre-fill a form from an existing service
    pub fn from_service(service: &Service) -> Self {
        Self {
            name: service.name.clone(),
            username: service.username.clone(),
            email: service.email.clone(),
            link: service.link.clone(),
            webpage: service.webpage.clone(),
            url: service.url.clone(),
            password: service.password.clone(),
            pin: service.pin.clone(),
            phone: service.phone.clone(),
            date_created: service.date_created.clone(),
            sign_in_with: service.sign_in_with.clone(),
            note: service.note.clone(),
            details: service.details.to_input(),
            original_details: Some(service.details.clone()),
        }
    }

    /// Trimmed service name
    pub fn trimmed_name(&self) -> &str {
        self.name.trim()
    }

    /// Untouched details keep their stored form; edited text is parsed
    fn submitted_details(&self) -> Details {
        match &self.original_details {
            Some(original) if original.to_input() == self.details => original.clone(),
            _ => Details::parse_input(&self.details),
        }
    }

    /// Build the service record this form describes
    ///
    /// String fields are trimmed. Name validation is the caller's job.
    pub fn to_service(&self) -> Service {
        Service {
            name: self.name.trim().to_string(),
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            link: self.link.trim().to_string(),
            webpage: self.webpage.trim().to_string(),
            url: self.url.trim().to_string(),
            password: self.password.trim().to_string(),
            pin: self.pin.trim().to_string(),
            phone: self.phone.trim().to_string(),
            date_created: self.date_created.trim().to_string(),
            sign_in_with: self.sign_in_with.trim().to_string(),
            note: self.note.trim().to_string(),
            details: self.submitted_details(),
            extra: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialized_field_names() {
        let mut service = Service::new("Mail");
        service.pin = "1234".into();
        service.date_created = "2024-01-01".into();

        let value = serde_json::to_value(&service).unwrap();
        assert_eq!(value["PIN"], "1234");
        assert_eq!(value["dateCreated"], "2024-01-01");
        assert_eq!(value["sign_in_with"], "");
        assert_eq!(value["details"], "");
        assert!(value.get("pin").is_none());
        assert!(value.get("extra").is_none());
    }

    #[test]
    fn test_missing_fields_default() {
        let service: Service = serde_json::from_str(r#"{"name": "Bank"}"#).unwrap();
        assert_eq!(service.name, "Bank");
        assert_eq!(service.username, "");
        assert_eq!(service.details, Details::default());
    }

    #[test]
    fn test_unknown_fields_preserved() {
        let raw = json!({"name": "Bank", "recovery": ["a", "b"]});
        let service: Service = serde_json::from_value(raw).unwrap();
        assert_eq!(service.extra.get("recovery"), Some(&json!(["a", "b"])));

        let back = serde_json::to_value(&service).unwrap();
        assert_eq!(back["recovery"], json!(["a", "b"]));
    }

    #[test]
    fn test_form_trims_and_parses_details() {
        let form = ServiceForm {
            name: "  Mail ".into(),
            username: " me ".into(),
            details: "{\"a\":1}".into(),
            ..ServiceForm::default()
        };

        let service = form.to_service();
        assert_eq!(service.name, "Mail");
        assert_eq!(service.username, "me");
        assert_eq!(service.details, Details::Json(json!({"a": 1})));
    }

    #[test]
    fn test_form_round_trip_from_service() {
        let mut service = Service::new("Mail");
        service.note = "primary".into();
        service.details = Details::Json(json!({"q": "a"}));

        let form = ServiceForm::from_service(&service);
        assert_eq!(form.to_service(), service);
    }

    #[test]
    fn test_untouched_text_details_keep_type() {
        let mut service = Service::new("Mail");
        service.details = Details::Text("123".into());

        let mut form = ServiceForm::from_service(&service);
        form.note = "x".into();
        assert_eq!(form.to_service().details, Details::Text("123".into()));

        form.details = "456".into();
        assert_eq!(form.to_service().details, Details::Json(json!(456)));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Service::default().display_name(), "Unnamed Service");
        assert_eq!(Service::new("Mail").display_name(), "Mail");
    }
}
