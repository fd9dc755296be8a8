pub mod api;
pub mod form_handler;
pub mod navigation;
pub mod portfolio;
pub mod validators;

pub use crate::domain::model::{
    FieldName, FormErrors, FormFields, NavigationOutcome, Profile, Project, ScrollTarget, Section,
    Skill, SubmissionOutcome, ValidationReport,
};
pub use crate::domain::ports::ContentSource;
pub use crate::utils::error::Result;
