//! Backend commands queued from UI to backend worker.

use shared::domain::{ContactDraft, ContactId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    Refresh,
    Create { draft: ContactDraft },
    Delete { id: ContactId },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Refresh => "refresh",
            BackendCommand::Create { .. } => "create",
            BackendCommand::Delete { .. } => "delete",
        }
    }
}
