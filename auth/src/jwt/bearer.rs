use super::errors::JwtError;

const BEARER_SCHEME: &str = "Bearer";

/// Extract the token from an `Authorization: Bearer <token>` header value.
///
/// The value is split on its first space. It must yield exactly two parts:
/// the `Bearer` scheme (ASCII case-insensitive) and a non-empty token.
///
/// # Errors
/// * `MalformedHeader` - Header has no space, a different scheme, or an empty token
pub fn extract_bearer_token(header: &str) -> Result<&str, JwtError> {
    let (scheme, token) = header.split_once(' ').ok_or_else(|| {
        JwtError::MalformedHeader("expected format: Bearer <token>".to_string())
    })?;

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return Err(JwtError::MalformedHeader(format!(
            "unsupported authorization scheme '{}'",
            scheme
        )));
    }

    if token.is_empty() {
        return Err(JwtError::MalformedHeader("token is empty".to_string()));
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_token() {
        assert_eq!(extract_bearer_token("Bearer abc.def.ghi"), Ok("abc.def.ghi"));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        assert_eq!(extract_bearer_token("bearer abc.def.ghi"), Ok("abc.def.ghi"));
    }

    #[test]
    fn test_missing_scheme() {
        let result = extract_bearer_token("abc.def.ghi");
        assert!(matches!(result, Err(JwtError::MalformedHeader(_))));
    }

    #[test]
    fn test_empty_header() {
        let result = extract_bearer_token("");
        assert!(matches!(result, Err(JwtError::MalformedHeader(_))));
    }

    #[test]
    fn test_empty_token() {
        let result = extract_bearer_token("Bearer ");
        assert!(matches!(result, Err(JwtError::MalformedHeader(_))));
    }

    #[test]
    fn test_other_scheme() {
        let result = extract_bearer_token("Basic dXNlcjpwYXNz");
        assert!(matches!(result, Err(JwtError::MalformedHeader(_))));
    }

    #[test]
    fn test_only_first_space_splits() {
        // Everything after the first space is the candidate token
        assert_eq!(extract_bearer_token("Bearer a b"), Ok("a b"));
    }
}
