use crate::utils::error::{CardCheckError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Matches `^[0-9]*$`: the empty string counts as numeric.
pub fn is_numeric(value: &str) -> bool {
    value.bytes().all(|b| b.is_ascii_digit())
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CardCheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CardCheckError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CardCheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_endpoint_path(field_name: &str, path: &str) -> Result<()> {
    validate_non_empty_string(field_name, path)?;

    if !path.starts_with('/') {
        return Err(CardCheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Endpoint path must start with '/'".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CardCheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric(""));
        assert!(is_numeric("4111111111111111"));
        assert!(!is_numeric("12a4"));
        assert!(!is_numeric("4111 1111"));
        assert!(!is_numeric("-1"));
        // Non-ASCII digits are rejected.
        assert!(!is_numeric("١٢٣"));
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("server.url", "https://example.com").is_ok());
        assert!(validate_url("server.url", "http://localhost:8080").is_ok());
        assert!(validate_url("server.url", "").is_err());
        assert!(validate_url("server.url", "invalid-url").is_err());
        assert!(validate_url("server.url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_endpoint_path() {
        assert!(validate_endpoint_path("endpoints.validate", "/validate").is_ok());
        assert!(validate_endpoint_path("endpoints.validate", "validate").is_err());
        assert!(validate_endpoint_path("endpoints.validate", "  ").is_err());
    }
}
