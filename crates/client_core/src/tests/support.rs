//! Recording `ContactsBackend` double shared by store and session tests.

use async_trait::async_trait;
use shared::domain::{Contact, ContactDraft, ContactId};
use tokio::sync::Mutex;

use crate::{error::TransportError, transport::ContactsBackend};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(ContactDraft),
    Delete(ContactId),
}

#[derive(Default)]
pub struct RecordingBackend {
    calls: Mutex<Vec<Call>>,
    contacts: Mutex<Vec<Contact>>,
    next_id: Mutex<u32>,
    fail_list: bool,
    fail_create: bool,
    fail_delete: bool,
}

pub fn contact(id: &str, name: &str) -> Contact {
    Contact {
        id: ContactId::from(id),
        name: name.to_string(),
        email: format!("{}@x.com", name.to_ascii_lowercase()),
        phone: "1".to_string(),
        message: String::new(),
    }
}

fn failure(method: &'static str) -> TransportError {
    TransportError::Status {
        method,
        url: "http://backend.test/contacts".to_string(),
        status: 503,
    }
}

impl RecordingBackend {
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: Mutex::new(contacts),
            ..Self::default()
        }
    }

    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    pub fn failing_delete(mut self) -> Self {
        self.fail_delete = true;
        self
    }

    pub async fn calls(&self) -> Vec<Call> {
        self.calls.lock().await.clone()
    }

    pub async fn set_contacts(&self, contacts: Vec<Contact>) {
        *self.contacts.lock().await = contacts;
    }
}

#[async_trait]
impl ContactsBackend for RecordingBackend {
    async fn list_contacts(&self) -> Result<Vec<Contact>, TransportError> {
        self.calls.lock().await.push(Call::List);
        if self.fail_list {
            return Err(failure("GET"));
        }
        Ok(self.contacts.lock().await.clone())
    }

    async fn create_contact(&self, draft: &ContactDraft) -> Result<(), TransportError> {
        self.calls.lock().await.push(Call::Create(draft.clone()));
        if self.fail_create {
            return Err(failure("POST"));
        }
        let mut next_id = self.next_id.lock().await;
        *next_id += 1;
        self.contacts.lock().await.push(Contact {
            id: ContactId::new(format!("created-{next_id}")),
            name: draft.name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            message: draft.message.clone(),
        });
        Ok(())
    }

    async fn delete_contact(&self, id: &ContactId) -> Result<(), TransportError> {
        self.calls.lock().await.push(Call::Delete(id.clone()));
        if self.fail_delete {
            return Err(failure("DELETE"));
        }
        self.contacts.lock().await.retain(|contact| &contact.id != id);
        Ok(())
    }
}
