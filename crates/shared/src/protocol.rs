use crate::domain::ContactId;

pub fn contacts_route() -> &'static str {
    "/contacts"
}

pub fn contact_route(id: &ContactId) -> String {
    format!("{}/{}", contacts_route(), id)
}
