pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::toml_config::PortfolioContent;
pub use crate::core::{
    api::PortfolioApi, form_handler::ContactFormHandler, navigation::NavigationManager,
    portfolio::PortfolioManager,
};
pub use domain::model::{
    FieldName, FormErrors, FormFields, NavigationOutcome, Profile, Project, ScrollTarget, Section,
    Skill, SubmissionOutcome, ValidationReport,
};
pub use utils::error::{PortfolioError, Result};

/// 將結果序列化成 JSON 字串
pub fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
