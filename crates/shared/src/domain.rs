use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend-assigned contact identifier. Treated as opaque by clients.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub String);

impl ContactId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContactId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ContactRecord")]
pub struct Contact {
    #[serde(rename = "_id")]
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Contact as the backend may send it: `_id`, `id`, both or neither.
/// A missing id decodes to an empty `ContactId`.
#[derive(Deserialize)]
struct ContactRecord {
    #[serde(rename = "_id", default)]
    document_id: Option<ContactId>,
    #[serde(default)]
    id: Option<ContactId>,
    name: String,
    email: String,
    phone: String,
    #[serde(default)]
    message: Option<String>,
}

impl From<ContactRecord> for Contact {
    fn from(record: ContactRecord) -> Self {
        let id = record
            .document_id
            .filter(|id| !id.is_empty())
            .or(record.id)
            .unwrap_or_default();
        Self {
            id,
            name: record.name,
            email: record.email,
            phone: record.phone,
            message: record.message.unwrap_or_default(),
        }
    }
}

/// Unsaved contact fields. Also the create request body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_document_id_key() {
        let contact: Contact = serde_json::from_str(
            r#"{"_id":"65f0","name":"Bo","email":"bo@x.com","phone":"1","message":"hi","__v":0}"#,
        )
        .expect("decode");
        assert_eq!(contact.id, ContactId::from("65f0"));
        assert_eq!(contact.message, "hi");
    }

    #[test]
    fn accepts_plain_id_key_and_missing_message() {
        let contact: Contact =
            serde_json::from_str(r#"{"id":"1","name":"Bo","email":"bo@x.com","phone":"1"}"#)
                .expect("decode");
        assert_eq!(contact.id.as_str(), "1");
        assert!(contact.message.is_empty());
    }

    #[test]
    fn prefers_document_id_when_both_keys_are_present() {
        let contacts: Vec<Contact> = serde_json::from_str(
            r#"[{"_id":"65f0","id":"65f0-virtual","name":"Bo","email":"bo@x.com","phone":"1","message":""}]"#,
        )
        .expect("decode");
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].id.as_str(), "65f0");
    }

    #[test]
    fn missing_or_null_id_decodes_as_empty() {
        let contacts: Vec<Contact> = serde_json::from_str(
            r#"[
                {"name":"Ghost","email":"g@x.com","phone":"2"},
                {"_id":null,"name":"Null","email":"n@x.com","phone":"3","message":null},
                {"_id":"1","name":"Bo","email":"bo@x.com","phone":"1"}
            ]"#,
        )
        .expect("decode");
        assert_eq!(contacts.len(), 3);
        assert!(contacts[0].id.is_empty());
        assert!(contacts[1].id.is_empty());
        assert!(contacts[1].message.is_empty());
        assert_eq!(contacts[2].id.as_str(), "1");
    }

    #[test]
    fn serializes_with_document_id_key() {
        let contact = Contact {
            id: ContactId::from("1"),
            name: "Bo".into(),
            email: "bo@x.com".into(),
            phone: "1".into(),
            message: String::new(),
        };
        let value = serde_json::to_value(&contact).expect("encode");
        assert_eq!(value["_id"], "1");
        assert!(value.get("id").is_none());
    }

    #[test]
    fn draft_serializes_all_four_fields() {
        let draft = ContactDraft {
            name: "Ana".into(),
            email: "ana@x.com".into(),
            phone: "555".into(),
            message: String::new(),
        };
        let value = serde_json::to_value(&draft).expect("encode");
        assert_eq!(
            value,
            serde_json::json!({"name":"Ana","email":"ana@x.com","phone":"555","message":""})
        );
    }
}
