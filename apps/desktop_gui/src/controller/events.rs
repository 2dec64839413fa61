//! Events sent from the backend worker to the UI.

use shared::domain::Contact;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Info(String),
    /// Fresh list from the backend; replaces whatever is displayed.
    ContactsReplaced(Vec<Contact>),
    /// The create request completed; `created` is false on transport failure.
    SubmitFinished { created: bool },
    BackendUnavailable(String),
}
