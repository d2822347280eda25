// rfetch-net/src/validation.rs
use rfetch_common::{Result, RfetchError};
use url::Url;

/// Validates a resource locator: non-empty, absolute, http or https.
pub fn validate_url(url_str: &str) -> Result<()> {
    if url_str.trim().is_empty() {
        return Err(RfetchError::Validation(
            "Resource URL must not be empty".to_string(),
        ));
    }
    let url = Url::parse(url_str)
        .map_err(|e| RfetchError::Validation(format!("Failed to parse URL '{url_str}': {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(RfetchError::Validation(format!(
            "Invalid URL scheme for '{url_str}': Must be http or https, but got '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(validate_url("https://api.github.com/users/me").is_ok());
        assert!(validate_url("http://127.0.0.1:8080/users/me").is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            validate_url(""),
            Err(RfetchError::Validation(_))
        ));
        assert!(matches!(
            validate_url("   "),
            Err(RfetchError::Validation(_))
        ));
    }

    #[test]
    fn rejects_relative() {
        assert!(matches!(
            validate_url("users/me"),
            Err(RfetchError::Validation(_))
        ));
    }

    #[test]
    fn rejects_non_http_schemes() {
        assert!(matches!(
            validate_url("ftp://example.com/file"),
            Err(RfetchError::Validation(_))
        ));
    }
}
