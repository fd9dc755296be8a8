use crate::config::defaults;
use crate::domain::model::{Profile, Project, Skill};
use crate::domain::ports::ContentSource;
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{validate_non_empty_list, validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

/// 作品集內容：個人簡介、技能與專案
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl PortfolioContent {
    /// 從 TOML 檔案載入內容
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PortfolioError::IoError)?;
        tracing::debug!("Loaded content file: {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析內容
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PortfolioError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| PortfolioError::ConfigValidationError {
            field: "toml_encoding".to_string(),
            message: format!("TOML encoding error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PORTFOLIO_NAME})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_content(&self) -> Result<()> {
        validate_non_empty_string("profile.name", &self.profile.name)?;
        validate_non_empty_string("profile.initials", &self.profile.initials)?;
        validate_non_empty_string("profile.title", &self.profile.title)?;
        validate_non_empty_list("profile.bio", &self.profile.bio)?;

        for (i, skill) in self.skills.iter().enumerate() {
            validate_non_empty_string(&format!("skills[{}].label", i), &skill.label)?;
        }

        for (i, project) in self.projects.iter().enumerate() {
            validate_non_empty_string(&format!("projects[{}].title", i), &project.title)?;
        }

        Ok(())
    }
}

impl Default for PortfolioContent {
    fn default() -> Self {
        defaults::breana_fulton()
    }
}

impl ContentSource for PortfolioContent {
    fn profile(&self) -> &Profile {
        &self.profile
    }

    fn skills(&self) -> &[Skill] {
        &self.skills
    }

    fn projects(&self) -> &[Project] {
        &self.projects
    }
}

impl Validate for PortfolioContent {
    fn validate(&self) -> Result<()> {
        self.validate_content()
    }
}
