use crate::utils::error::{PortfolioError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PortfolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, items: &[T]) -> Result<()> {
    if items.is_empty() {
        return Err(PortfolioError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("profile.name", "Breana Fulton").is_ok());
        assert!(validate_non_empty_string("profile.name", "").is_err());
        assert!(validate_non_empty_string("profile.name", "   ").is_err());
    }

    #[test]
    fn test_validate_non_empty_list() {
        assert!(validate_non_empty_list::<String>("skills", &[]).is_err());
        assert!(validate_non_empty_list("skills", &["React".to_string()]).is_ok());
    }
}
