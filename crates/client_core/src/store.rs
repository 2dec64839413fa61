//! In-memory contact list kept in sync with the backend by full refreshes.

use std::sync::Arc;

use shared::domain::{Contact, ContactDraft, ContactId};
use tracing::{error, info, warn};

use crate::transport::ContactsBackend;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    Refreshed(Vec<Contact>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactList {
    contacts: Vec<Contact>,
}

impl ContactList {
    pub fn apply(self, event: ListEvent) -> Self {
        match event {
            ListEvent::Refreshed(contacts) => {
                let contacts = contacts
                    .into_iter()
                    .filter(|contact| {
                        if contact.id.is_empty() {
                            warn!(name = %contact.name, "contacts: dropping entry without id");
                            return false;
                        }
                        true
                    })
                    .collect();
                Self { contacts }
            }
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn get(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|contact| &contact.id == id)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Replaced { count: usize },
    /// The previous list is kept.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Deleted(RefreshOutcome),
    /// Delete failed; the list was refreshed anyway.
    DeleteFailed(RefreshOutcome),
}

impl RemoveOutcome {
    pub fn refresh(&self) -> RefreshOutcome {
        match self {
            RemoveOutcome::Deleted(refresh) | RemoveOutcome::DeleteFailed(refresh) => *refresh,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(RefreshOutcome),
    Failed,
}

impl CreateOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, CreateOutcome::Created(_))
    }
}

pub struct ContactStore<B: ContactsBackend + ?Sized> {
    backend: Arc<B>,
    list: ContactList,
}

impl<B: ContactsBackend + ?Sized> ContactStore<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            list: ContactList::default(),
        }
    }

    pub fn list(&self) -> &ContactList {
        &self.list
    }

    pub fn contacts(&self) -> &[Contact] {
        self.list.contacts()
    }

    pub async fn refresh(&mut self) -> RefreshOutcome {
        match self.backend.list_contacts().await {
            Ok(contacts) => {
                let list = std::mem::take(&mut self.list);
                self.list = list.apply(ListEvent::Refreshed(contacts));
                info!(count = self.list.len(), "contacts: list refreshed");
                RefreshOutcome::Replaced {
                    count: self.list.len(),
                }
            }
            Err(err) => {
                error!("Error fetching contacts: {err}");
                RefreshOutcome::Failed
            }
        }
    }

    pub async fn create(&mut self, draft: &ContactDraft) -> CreateOutcome {
        match self.backend.create_contact(draft).await {
            Ok(()) => CreateOutcome::Created(self.refresh().await),
            Err(err) => {
                error!("Error adding contact: {err}");
                CreateOutcome::Failed
            }
        }
    }

    /// Deletes `id` and refreshes whatever the delete returned.
    pub async fn remove(&mut self, id: &ContactId) -> RemoveOutcome {
        match self.backend.delete_contact(id).await {
            Ok(()) => RemoveOutcome::Deleted(self.refresh().await),
            Err(err) => {
                error!(contact_id = %id, "Error deleting contact: {err}");
                RemoveOutcome::DeleteFailed(self.refresh().await)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
