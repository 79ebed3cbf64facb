pub mod form;
pub mod manager;
pub mod reminder;
pub mod validator;

pub use form::Form;
pub use manager::{EntryLog, ExportOutcome};
pub use reminder::Reminder;
