//! Terminal User Interface module
//!
//! A two-panel browser over the record editor: accounts on the left,
//! services and details on the right, with modal dialogs for data entry.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

pub mod dialogs;
pub mod layout;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
