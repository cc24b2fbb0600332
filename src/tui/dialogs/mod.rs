//! Dialog modules for the TUI
//!
//! Modal dialogs for data entry and confirmation

pub mod account;
pub mod confirm;
pub mod form;
pub mod help;
pub mod service;

pub use account::AccountFormState;
pub use confirm::ConfirmAction;
pub use form::{FormAction, FormState};
pub use service::ServiceFormState;
