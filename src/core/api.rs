use crate::config::toml_config::PortfolioContent;
use crate::core::form_handler::ContactFormHandler;
use crate::core::navigation::NavigationManager;
use crate::core::portfolio::PortfolioManager;
use crate::domain::model::{
    FieldName, FormErrors, FormFields, NavigationOutcome, Profile, Project, ScrollTarget, Section,
    Skill, SubmissionOutcome,
};
use crate::domain::ports::ContentSource;

/// 作品集對外 API：持有三個管理器，由呼叫端明確建立
pub struct PortfolioApi<C: ContentSource = PortfolioContent> {
    portfolio: PortfolioManager<C>,
    navigation: NavigationManager,
    contact_form: ContactFormHandler,
}

impl<C: ContentSource> PortfolioApi<C> {
    pub fn new(content: C) -> Self {
        Self {
            portfolio: PortfolioManager::new(content),
            navigation: NavigationManager::new(),
            contact_form: ContactFormHandler::new(),
        }
    }

    pub fn about_section(&self) -> Profile {
        self.portfolio.about_data()
    }

    pub fn skills(&self) -> Vec<Skill> {
        self.portfolio.render_skills()
    }

    pub fn projects(&self) -> Vec<Project> {
        self.portfolio.render_projects()
    }

    pub fn navigate_to(&mut self, section_id: &str) -> NavigationOutcome {
        self.navigation.navigate_to_section(section_id)
    }

    pub fn scroll_to(&self, target_id: &str, offset: Option<u32>) -> ScrollTarget {
        self.portfolio.smooth_scroll_to(target_id, offset)
    }

    /// 更新欄位並立即驗證，回傳該欄位目前是否有效。
    /// 未知欄位不會寫入任何錯誤，直接回傳 false。
    pub fn update_form_field(&mut self, field_name: &str, value: &str) -> bool {
        let Some(field) = FieldName::parse(field_name) else {
            tracing::debug!("Ignoring update for unknown field '{}'", field_name);
            return false;
        };
        self.contact_form.set_field(field, value);

        let error = self.portfolio.validate_field(field.as_str(), value);
        if error.is_empty() {
            self.contact_form.clear_error(field);
            true
        } else {
            tracing::debug!("Field '{}' invalid: {}", field, error);
            self.contact_form.set_error(field, error);
            false
        }
    }

    pub fn submit_contact_form(&mut self) -> SubmissionOutcome {
        self.contact_form.set_submitting(true);
        let form_data = self.contact_form.form_data();
        let outcome = self.portfolio.submit_form(&form_data);

        match &outcome {
            SubmissionOutcome::Sent { .. } => self.contact_form.reset_form(),
            SubmissionOutcome::Rejected { errors } => {
                for (field, message) in errors {
                    self.contact_form.set_error(*field, message.clone());
                }
            }
        }

        self.contact_form.set_submitting(false);
        outcome
    }

    pub fn form_errors(&self) -> FormErrors {
        self.contact_form.errors()
    }

    pub fn form_data(&self) -> FormFields {
        self.contact_form.form_data()
    }

    pub fn current_section(&self) -> Section {
        self.navigation.current_section()
    }

    pub fn all_sections(&self) -> &'static [Section] {
        self.navigation.all_sections()
    }

    pub fn last_submission(&self) -> &FormFields {
        self.portfolio.last_submission()
    }
}

impl Default for PortfolioApi<PortfolioContent> {
    fn default() -> Self {
        Self::new(PortfolioContent::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_form_field_syncs_errors() {
        let mut api: PortfolioApi = PortfolioApi::default();

        assert!(!api.update_form_field("name", "B"));
        assert!(api.form_errors().contains_key(&FieldName::Name));

        assert!(api.update_form_field("name", "Breana Fulton"));
        assert!(api.form_errors().is_empty());
        assert_eq!(api.form_data().name, "Breana Fulton");
    }

    #[test]
    fn test_update_unknown_field_leaves_errors_untouched() {
        let mut api: PortfolioApi = PortfolioApi::default();
        api.update_form_field("email", "invalid-email");

        assert!(!api.update_form_field("company", "Acme"));
        let errors = api.form_errors();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key(&FieldName::Email));
        assert_eq!(api.form_data().email, "invalid-email");
    }

    #[test]
    fn test_update_form_field_stores_value_even_when_invalid() {
        let mut api: PortfolioApi = PortfolioApi::default();

        assert!(!api.update_form_field("phone", "123"));
        assert_eq!(api.form_data().phone, "123");
        assert_eq!(
            api.form_errors().get(&FieldName::Phone).map(String::as_str),
            Some("Please enter a valid phone number")
        );

        assert!(api.update_form_field("phone", ""));
        assert!(api.form_errors().is_empty());
    }

    #[test]
    fn test_failed_submit_copies_errors_into_form() {
        let mut api: PortfolioApi = PortfolioApi::default();
        api.update_form_field("name", "Breana Fulton");

        let outcome = api.submit_contact_form();
        assert!(!outcome.is_success());

        let errors = api.form_errors();
        assert!(errors.contains_key(&FieldName::Email));
        assert!(errors.contains_key(&FieldName::Message));
        assert!(!errors.contains_key(&FieldName::Name));
        assert_eq!(api.form_data().name, "Breana Fulton");
    }
}
