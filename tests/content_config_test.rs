use anyhow::Result;
use portfolio_core::utils::validation::Validate;
use portfolio_core::{PortfolioApi, PortfolioContent, PortfolioError};
use tempfile::TempDir;

/// 從檔案載入自訂內容並透過 API 讀取
#[test]
fn test_custom_content_through_api() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("portfolio.toml");

    std::fs::write(
        &config_path,
        r#"
[profile]
name = "Ada Example"
initials = "AE"
title = "Systems Developer"
bio = ["Builds tools."]

[[skills]]
icon = "🦀"
label = "Rust"

[[projects]]
emoji = "📦"
title = "Crate Index"
description = "A searchable index of crates."
tags = ["Rust"]
"#,
    )?;

    let content = PortfolioContent::from_file(&config_path)?;
    content.validate()?;

    let mut api = PortfolioApi::new(content);
    assert_eq!(api.about_section().initials, "AE");
    assert_eq!(api.skills().len(), 1);
    assert_eq!(api.projects()[0].title, "Crate Index");

    // 表單邏輯與內容無關
    assert!(!api.update_form_field("email", "nope"));
    Ok(())
}

#[test]
fn test_invalid_content_file_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("broken.toml");

    std::fs::write(
        &config_path,
        r#"
[profile]
name = ""
initials = "AE"
title = "Developer"
bio = ["Hi."]
"#,
    )?;

    let content = PortfolioContent::from_file(&config_path)?;
    let err = content.validate().unwrap_err();
    assert!(matches!(
        err,
        PortfolioError::InvalidConfigValueError { ref field, .. } if field == "profile.name"
    ));
    Ok(())
}
