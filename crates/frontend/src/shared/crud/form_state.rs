use super::form_fields::{FieldValue, FormFields};
use contracts::domain::common::RecordId;
use contracts::shared::FieldErrors;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    pub general: Option<String>,
    pub fields: FieldErrors,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.general.is_none() && self.fields.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    /// `None` ⇒ the next submit creates, `Some` ⇒ it updates that record
    pub editing_id: Option<RecordId>,
    pub fields: FormFields,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalState {
    pub open: bool,
    pub form: FormState,
    pub errors: FormErrors,
    pub saving: bool,
}

impl ModalState {
    pub fn closed(defaults: FormFields) -> Self {
        Self {
            open: false,
            form: FormState {
                editing_id: None,
                fields: defaults,
            },
            errors: FormErrors::default(),
            saving: false,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.form.editing_id.is_some()
    }

    /// Typing into a field clears its error
    pub fn set_field(&mut self, key: &str, value: impl Into<FieldValue>) {
        self.form.fields.set(key, value);
        self.errors.fields.remove(key);
    }

    pub fn field_text(&self, key: &str) -> String {
        self.form
            .fields
            .get(key)
            .map(FieldValue::as_text)
            .unwrap_or_default()
    }

    pub fn field_flag(&self, key: &str) -> bool {
        self.form.fields.flag(key)
    }

    pub fn field_error(&self, key: &str) -> Option<String> {
        self.errors.fields.get(key).cloned()
    }
}
