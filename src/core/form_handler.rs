use crate::domain::model::{FieldName, FormErrors, FormFields};

/// 聯絡表單的欄位值與錯誤狀態
#[derive(Debug, Clone, Default)]
pub struct ContactFormHandler {
    fields: FormFields,
    errors: FormErrors,
    is_submitting: bool,
}

impl ContactFormHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// 只接受四個已知欄位；未知名稱直接回傳 false
    pub fn update_field(&mut self, field_name: &str, value: &str) -> bool {
        match FieldName::parse(field_name) {
            Some(field) => {
                self.set_field(field, value);
                true
            }
            None => {
                tracing::debug!("Ignoring update for unknown field '{}'", field_name);
                false
            }
        }
    }

    pub fn set_field(&mut self, field: FieldName, value: &str) {
        self.fields.set(field, value);
        tracing::debug!("Updated form field '{}'", field);
    }

    pub fn field_value(&self, field_name: &str) -> String {
        FieldName::parse(field_name)
            .map(|field| self.fields.get(field).to_string())
            .unwrap_or_default()
    }

    pub fn set_error(&mut self, field: FieldName, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn clear_error(&mut self, field: FieldName) {
        self.errors.remove(&field);
    }

    pub fn clear_all_errors(&mut self) {
        self.errors.clear();
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> FormErrors {
        self.errors.clone()
    }

    pub fn reset_form(&mut self) {
        self.fields = FormFields::default();
        self.clear_all_errors();
    }

    pub fn form_data(&self) -> FormFields {
        self.fields.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn set_submitting(&mut self, submitting: bool) {
        self.is_submitting = submitting;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_known_and_unknown_fields() {
        let mut handler = ContactFormHandler::new();

        assert!(handler.update_field("name", "Breana Fulton"));
        assert_eq!(handler.field_value("name"), "Breana Fulton");

        assert!(!handler.update_field("company", "Acme"));
        assert_eq!(handler.field_value("company"), "");
        assert_eq!(handler.form_data(), FormFields {
            name: "Breana Fulton".to_string(),
            ..FormFields::default()
        });
    }

    #[test]
    fn test_set_field_by_kind() {
        let mut handler = ContactFormHandler::new();
        handler.set_field(FieldName::Phone, "555-123-4567");

        assert_eq!(handler.field_value("phone"), "555-123-4567");
        assert_eq!(handler.form_data().phone, "555-123-4567");
    }

    #[test]
    fn test_errors_set_and_clear() {
        let mut handler = ContactFormHandler::new();
        assert!(!handler.has_errors());

        handler.set_error(FieldName::Email, "Email is required");
        assert!(handler.has_errors());
        assert_eq!(
            handler.errors().get(&FieldName::Email).map(String::as_str),
            Some("Email is required")
        );

        handler.clear_error(FieldName::Email);
        assert!(!handler.has_errors());
        assert!(!handler.errors().contains_key(&FieldName::Email));
    }

    #[test]
    fn test_clear_error_without_entry_is_noop() {
        let mut handler = ContactFormHandler::new();
        handler.set_error(FieldName::Name, "Please enter your name");

        handler.clear_error(FieldName::Phone);
        handler.clear_error(FieldName::Phone);

        let errors = handler.errors();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key(&FieldName::Name));
    }

    #[test]
    fn test_snapshots_do_not_leak_mutation() {
        let mut handler = ContactFormHandler::new();
        handler.update_field("message", "hello");
        handler.set_error(FieldName::Message, "Message should be at least 20 characters");

        let mut errors = handler.errors();
        errors.clear();
        let mut data = handler.form_data();
        data.message.push_str(" world");

        assert!(handler.has_errors());
        assert_eq!(handler.field_value("message"), "hello");
    }

    #[test]
    fn test_reset_form() {
        let mut handler = ContactFormHandler::new();
        handler.update_field("name", "Breana Fulton");
        handler.update_field("phone", "555-123-4567");
        handler.set_error(FieldName::Email, "Email is required");

        handler.reset_form();

        assert_eq!(handler.form_data(), FormFields::default());
        assert!(handler.errors().is_empty());
    }

    #[test]
    fn test_submitting_flag_is_stored() {
        let mut handler = ContactFormHandler::new();
        assert!(!handler.is_submitting());
        handler.set_submitting(true);
        assert!(handler.is_submitting());
    }
}
