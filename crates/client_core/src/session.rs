use std::sync::Arc;

use shared::domain::{Contact, ContactId};
use tracing::debug;

use crate::{
    form::ContactFormController,
    store::{ContactStore, CreateOutcome, RefreshOutcome, RemoveOutcome},
    transport::ContactsBackend,
    validation::Field,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was invalid; nothing was sent.
    Skipped,
    Submitted(CreateOutcome),
}

/// One contact form and one contact list over a shared backend.
pub struct ContactSession<B: ContactsBackend + ?Sized> {
    form: ContactFormController,
    store: ContactStore<B>,
}

impl<B: ContactsBackend + ?Sized> ContactSession<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            form: ContactFormController::new(),
            store: ContactStore::new(backend),
        }
    }

    /// Initial load: one refresh.
    pub async fn start(&mut self) -> RefreshOutcome {
        self.store.refresh().await
    }

    pub fn form(&self) -> &ContactFormController {
        &self.form
    }

    pub fn store(&self) -> &ContactStore<B> {
        &self.store
    }

    pub fn contacts(&self) -> &[Contact] {
        self.store.contacts()
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.update_field(field, value);
    }

    pub fn is_valid(&self) -> bool {
        self.form.is_valid()
    }

    /// Clears the draft once the create call completes, failed or not.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let Some(draft) = self.form.begin_submit() else {
            debug!("contacts: submit ignored for invalid form");
            return SubmitOutcome::Skipped;
        };
        let outcome = self.store.create(&draft).await;
        self.form.finish_submit();
        SubmitOutcome::Submitted(outcome)
    }

    pub async fn refresh(&mut self) -> RefreshOutcome {
        self.store.refresh().await
    }

    pub async fn remove(&mut self, id: &ContactId) -> RemoveOutcome {
        self.store.remove(id).await
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
