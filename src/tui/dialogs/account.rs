//! Account dialogs
//!
//! The edit form for account-level fields. Opening it starts an edit session
//! on the editor; closing it ends the session one way or the other.

use crate::models::{AccountUpdate, OTHERS_KEY};
use crate::tui::widgets::TextInput;

use super::form::FormState;

const EMAIL: usize = 0;
const PASSWORD: usize = 1;
const DATE: usize = 2;
const PHONE: usize = 3;

/// State for the account edit dialog
#[derive(Debug, Clone, Default)]
pub struct AccountFormState {
    pub form: FormState,
}

impl AccountFormState {
    /// Pre-fill from the values captured when the edit session began
    pub fn from_update(update: &AccountUpdate) -> Self {
        let email_label = if update.email == OTHERS_KEY {
            "Email (fixed)"
        } else {
            "Email"
        };

        let form = FormState::new(vec![
            TextInput::new().label(email_label).content(&update.email),
            TextInput::new()
                .label("Password")
                .secret(true)
                .content(&update.password),
            TextInput::new()
                .label("Date created")
                .content(&update.date_created),
            TextInput::new()
                .label("Phone")
                .placeholder("comma-separated")
                .content(update.phone.join(", ")),
        ]);

        Self { form }
    }

    /// The values as submitted
    pub fn to_update(&self) -> AccountUpdate {
        AccountUpdate {
            email: self.form.value(EMAIL).to_string(),
            password: self.form.value(PASSWORD).to_string(),
            date_created: self.form.value(DATE).to_string(),
            phone: AccountUpdate::parse_phone_list(self.form.value(PHONE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unedited_form_matches_snapshot() {
        let update = AccountUpdate {
            email: "a@b.com".into(),
            password: "pw".into(),
            date_created: "2024-01-01 10:00:00".into(),
            phone: vec!["555-1".into(), "555-2".into()],
        };

        let state = AccountFormState::from_update(&update);
        assert_eq!(state.to_update(), update);
    }

    #[test]
    fn test_others_email_marked_fixed() {
        let update = AccountUpdate {
            email: OTHERS_KEY.into(),
            ..AccountUpdate::default()
        };
        let state = AccountFormState::from_update(&update);
        assert_eq!(state.form.fields[EMAIL].label, "Email (fixed)");
    }
}
