//! Contact form state: draft values, per-field errors and the submitting flag.
//!
//! `FormState` is a value; every `FormEvent` yields the next snapshot.
//! `ContactFormController` holds the current snapshot for a front end.

use shared::domain::ContactDraft;

use crate::validation::{validate, Field};

/// Last computed error per required field. Only the field that changed is
/// recomputed, so an untouched field has no entry even when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    name: Option<&'static str>,
    email: Option<&'static str>,
    phone: Option<&'static str>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Phone => self.phone,
            Field::Message => None,
        }
    }

    fn with(mut self, field: Field, error: Option<&'static str>) -> Self {
        match field {
            Field::Name => self.name = error,
            Field::Email => self.email = error,
            Field::Phone => self.phone = error,
            Field::Message => {}
        }
        self
    }

    pub fn any(&self) -> bool {
        self.name.is_some() || self.email.is_some() || self.phone.is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        Field::REQUIRED
            .into_iter()
            .filter_map(|field| self.get(field).map(|error| (field, error)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    FieldChanged { field: Field, value: String },
    SubmitStarted,
    /// Create finished; the draft is cleared whether or not it succeeded.
    SubmitFinished,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub draft: ContactDraft,
    pub errors: FieldErrors,
    pub submitting: bool,
}

pub fn draft_value(draft: &ContactDraft, field: Field) -> &str {
    match field {
        Field::Name => &draft.name,
        Field::Email => &draft.email,
        Field::Phone => &draft.phone,
        Field::Message => &draft.message,
    }
}

fn with_draft_value(mut draft: ContactDraft, field: Field, value: String) -> ContactDraft {
    match field {
        Field::Name => draft.name = value,
        Field::Email => draft.email = value,
        Field::Phone => draft.phone = value,
        Field::Message => draft.message = value,
    }
    draft
}

impl FormState {
    pub fn apply(self, event: FormEvent) -> Self {
        match event {
            FormEvent::FieldChanged { field, value } => {
                let error = validate(field, &value);
                Self {
                    draft: with_draft_value(self.draft, field, value),
                    errors: self.errors.with(field, error),
                    submitting: self.submitting,
                }
            }
            FormEvent::SubmitStarted => Self {
                submitting: true,
                ..self
            },
            FormEvent::SubmitFinished => Self {
                draft: ContactDraft::default(),
                errors: self.errors,
                submitting: false,
            },
        }
    }

    /// Derived from the stored errors, not a fresh validation pass; the
    /// non-empty checks cover fields that were never edited.
    pub fn is_valid(&self) -> bool {
        !self.draft.name.is_empty()
            && !self.draft.email.is_empty()
            && !self.draft.phone.is_empty()
            && !self.errors.any()
    }
}

#[derive(Debug, Default)]
pub struct ContactFormController {
    state: FormState,
}

impl ContactFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.state.draft
    }

    pub fn value(&self, field: Field) -> &str {
        draft_value(&self.state.draft, field)
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.state.errors.get(field)
    }

    pub fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.submitting
    }

    fn dispatch(&mut self, event: FormEvent) {
        let current = std::mem::take(&mut self.state);
        self.state = current.apply(event);
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.dispatch(FormEvent::FieldChanged {
            field,
            value: value.into(),
        });
    }

    /// Marks the form as submitting and hands back the draft to create.
    /// Returns `None` and leaves the state untouched when the form is invalid.
    pub fn begin_submit(&mut self) -> Option<ContactDraft> {
        if !self.is_valid() {
            return None;
        }
        self.dispatch(FormEvent::SubmitStarted);
        Some(self.state.draft.clone())
    }

    pub fn finish_submit(&mut self) {
        self.dispatch(FormEvent::SubmitFinished);
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
