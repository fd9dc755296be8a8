use crate::core::validators;
use crate::domain::model::{
    FieldName, FormErrors, FormFields, Profile, Project, ScrollTarget, Skill, SubmissionOutcome,
    ValidationReport,
};
use crate::domain::ports::ContentSource;

pub const SUBMISSION_CONFIRMATION: &str = "✨ Message sent! I'll get back to you within 24 hours.";
pub const DEFAULT_SCROLL_OFFSET: u32 = 60;

pub struct PortfolioManager<C: ContentSource> {
    content: C,
    last_submission: FormFields,
}

impl<C: ContentSource> PortfolioManager<C> {
    pub fn new(content: C) -> Self {
        Self {
            content,
            last_submission: FormFields::default(),
        }
    }

    pub fn render_skills(&self) -> Vec<Skill> {
        self.content.skills().to_vec()
    }

    pub fn render_projects(&self) -> Vec<Project> {
        self.content.projects().to_vec()
    }

    pub fn about_data(&self) -> Profile {
        self.content.profile().clone()
    }

    /// 未知欄位一律視為有效
    pub fn validate_field(&self, field_name: &str, value: &str) -> String {
        match FieldName::parse(field_name) {
            Some(field) => validators::validate(field, value),
            None => String::new(),
        }
    }

    pub fn validate_form(&self, fields: &FormFields) -> ValidationReport {
        let errors: FormErrors = fields
            .iter()
            .filter_map(|(field, value)| {
                let error = validators::validate(field, value);
                (!error.is_empty()).then_some((field, error))
            })
            .collect();

        tracing::debug!("Form validation produced {} error(s)", errors.len());

        ValidationReport {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn submit_form(&mut self, fields: &FormFields) -> SubmissionOutcome {
        let report = self.validate_form(fields);

        if report.is_valid {
            self.last_submission = fields.clone();
            tracing::info!("✅ Form submitted successfully: {:?}", self.last_submission);
            return SubmissionOutcome::Sent {
                message: SUBMISSION_CONFIRMATION.to_string(),
            };
        }

        tracing::warn!(
            "❌ Form submission rejected for: {}",
            report
                .errors
                .keys()
                .map(FieldName::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        );
        SubmissionOutcome::Rejected {
            errors: report.errors,
        }
    }

    pub fn last_submission(&self) -> &FormFields {
        &self.last_submission
    }

    pub fn smooth_scroll_to(&self, target_id: &str, offset: Option<u32>) -> ScrollTarget {
        ScrollTarget {
            target: target_id.to_string(),
            offset: offset.unwrap_or(DEFAULT_SCROLL_OFFSET),
            behavior: "smooth",
        }
    }
}
