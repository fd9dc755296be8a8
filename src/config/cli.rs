use crate::config::toml_config::PortfolioContent;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio")]
#[command(about = "Portfolio content, navigation and contact form from the command line")]
pub struct CliConfig {
    /// Path to a TOML content file; the built-in portfolio is used when omitted
    #[arg(long)]
    pub content: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Pretty-print JSON results")]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the about section
    About,
    /// List skills in display order
    Skills,
    /// List projects in display order
    Projects,
    /// List navigable sections
    Sections,
    /// Navigate to a section (about, work, contact)
    Navigate { section: String },
    /// Compute a smooth-scroll target
    Scroll {
        target: String,
        #[arg(long)]
        offset: Option<u32>,
    },
    /// Fill in the contact form and submit it
    Submit {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Replay a short session against the API
    Demo,
}

impl CliConfig {
    /// 載入並驗證內容；未指定檔案時使用內建內容
    pub fn load_content(&self) -> Result<PortfolioContent> {
        let content = match &self.content {
            Some(path) => PortfolioContent::from_file(path)?,
            None => PortfolioContent::default(),
        };
        content.validate()?;
        Ok(content)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.content {
            validate_non_empty_string("--content", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_submit_command() {
        let config = CliConfig::parse_from([
            "portfolio",
            "--pretty",
            "submit",
            "--name",
            "Breana Fulton",
            "--email",
            "breana@example.com",
        ]);

        assert!(config.pretty);
        assert!(config.content.is_none());
        match config.command {
            Command::Submit { name, phone, .. } => {
                assert_eq!(name, "Breana Fulton");
                assert_eq!(phone, "");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_empty_content_path_is_rejected() {
        let config = CliConfig::parse_from(["portfolio", "--content", "", "about"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_default_content() {
        let config = CliConfig::parse_from(["portfolio", "skills"]);
        let content = config.load_content().unwrap();
        assert_eq!(content.profile.name, "Breana Fulton");
    }
}
