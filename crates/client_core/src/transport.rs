use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::{Contact, ContactDraft, ContactId},
    protocol::{contact_route, contacts_route},
};
use tracing::debug;

use crate::error::TransportError;

#[async_trait]
pub trait ContactsBackend: Send + Sync {
    async fn list_contacts(&self) -> Result<Vec<Contact>, TransportError>;
    /// The created record in the response is not needed by callers.
    async fn create_contact(&self, draft: &ContactDraft) -> Result<(), TransportError>;
    async fn delete_contact(&self, id: &ContactId) -> Result<(), TransportError>;
}

/// `ContactsBackend` over the REST `contacts` resource.
#[derive(Debug, Clone)]
pub struct HttpContactsBackend {
    http: Client,
    base_url: String,
}

impl HttpContactsBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ContactsBackend for HttpContactsBackend {
    async fn list_contacts(&self) -> Result<Vec<Contact>, TransportError> {
        let url = format!("{}{}", self.base_url, contacts_route());
        let contacts: Vec<Contact> = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| TransportError::from_reqwest("GET", &url, e))?
            .json()
            .await
            .map_err(|e| TransportError::from_reqwest("GET", &url, e))?;
        debug!(count = contacts.len(), "contacts: listed");
        Ok(contacts)
    }

    async fn create_contact(&self, draft: &ContactDraft) -> Result<(), TransportError> {
        let url = format!("{}{}", self.base_url, contacts_route());
        self.http
            .post(&url)
            .json(draft)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| TransportError::from_reqwest("POST", &url, e))?;
        debug!(name = %draft.name, "contacts: created");
        Ok(())
    }

    async fn delete_contact(&self, id: &ContactId) -> Result<(), TransportError> {
        let url = format!("{}{}", self.base_url, contact_route(id));
        self.http
            .delete(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| TransportError::from_reqwest("DELETE", &url, e))?;
        debug!(contact_id = %id, "contacts: deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
