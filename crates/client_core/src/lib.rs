//! Client side of the contact manager: form validation and submission,
//! the contact list store, and the HTTP backend they talk to.

pub mod config;
pub mod error;
pub mod form;
pub mod session;
pub mod store;
pub mod transport;
pub mod validation;

pub use config::{load_settings, ClientSettings, DEFAULT_API_BASE_URL};
pub use error::{ConfigError, TransportError};
pub use form::{ContactFormController, FieldErrors, FormEvent, FormState};
pub use session::{ContactSession, SubmitOutcome};
pub use store::{
    ContactList, ContactStore, CreateOutcome, ListEvent, RefreshOutcome, RemoveOutcome,
};
pub use transport::{ContactsBackend, HttpContactsBackend};
pub use validation::{validate, Field, FieldParseError};

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
