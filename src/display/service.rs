//! Service display formatting

use super::{mask, pretty_details};
use crate::models::Service;

/// Format `(index, service)` pairs as a numbered list
pub fn format_service_list(services: &[(usize, &Service)]) -> String {
    if services.is_empty() {
        return "No services found.".to_string();
    }

    let mut output = String::new();
    for (index, service) in services {
        let who = if !service.username.is_empty() {
            service.username.as_str()
        } else {
            service.email.as_str()
        };

        if who.is_empty() {
            output.push_str(&format!("  [{}] {}\n", index, service.display_name()));
        } else {
            output.push_str(&format!("  [{}] {} ({})\n", index, service.display_name(), who));
        }
    }
    output
}

/// Format a single service's fields and details
pub fn format_service_details(index: usize, service: &Service, reveal: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!("Service [{}]: {}\n", index, service.display_name()));
    for (label, value) in service.text_fields() {
        let value = match label {
            "password" | "PIN" => mask(value, reveal),
            _ => value,
        };
        output.push_str(&format!("  {:<13} {}\n", format!("{}:", label), value));
    }

    for (field, value) in &service.extra {
        output.push_str(&format!("  {:<13} {}\n", format!("{}:", field), value));
    }

    if !service.details.is_empty() {
        output.push_str("\nDetails:\n");
        for line in pretty_details(&service.details).lines() {
            output.push_str(&format!("  {}\n", line));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Details;
    use serde_json::json;

    fn sample_service() -> Service {
        let mut service = Service::new("Mail");
        service.username = "me".into();
        service.password = "hunter2".into();
        service.pin = "1234".into();
        service.details = Details::Json(json!({"q": "a"}));
        service
    }

    #[test]
    fn test_format_service_list() {
        let mail = sample_service();
        let bare = Service::new("Bank");
        let output = format_service_list(&[(0, &mail), (3, &bare)]);

        assert!(output.contains("[0] Mail (me)"));
        assert!(output.contains("[3] Bank\n"));
        assert_eq!(format_service_list(&[]), "No services found.");
    }

    #[test]
    fn test_details_masks_secrets() {
        let output = format_service_details(0, &sample_service(), false);

        assert!(output.contains("Service [0]: Mail"));
        assert!(output.contains("username:"));
        assert!(!output.contains("hunter2"));
        assert!(!output.contains("1234"));
        assert!(output.contains("Details:\n  q: a\n"));
    }

    #[test]
    fn test_details_reveal() {
        let output = format_service_details(0, &sample_service(), true);
        assert!(output.contains("hunter2"));
        assert!(output.contains("1234"));
    }

    #[test]
    fn test_empty_details_omitted() {
        let output = format_service_details(1, &Service::new("Bank"), false);
        assert!(!output.contains("Details:"));
    }
}
