//! Interpretation of the authentication service's reply

use serde_json::Value;

use super::error::RegistrationError;

/// Recognized fields of a registration response.
///
/// Fields that are missing, empty, or not strings read as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterResponse {
    pub authtoken: Option<String>,
    pub email: Option<String>,
    pub error: Option<String>,
}

/// What a response asks the controller to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseVerdict {
    Accepted { auth_token: String, email: String },
    Rejected(String),
    Unrecognized,
}

impl RegisterResponse {
    /// Parse a response body. Anything that is not JSON is a parse error;
    /// JSON that is not an object yields an empty response.
    pub fn from_body(body: &str) -> Result<Self, RegistrationError> {
        let value: Value = serde_json::from_str(body)?;
        Ok(Self::from_value(&value))
    }

    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        Self {
            authtoken: text("authtoken"),
            email: text("email"),
            error: text("error"),
        }
    }

    /// An `error` wins over an `authtoken` when both are present.
    pub fn verdict(self) -> ResponseVerdict {
        match (self.error, self.authtoken) {
            (Some(message), _) => ResponseVerdict::Rejected(message),
            (None, Some(auth_token)) => ResponseVerdict::Accepted {
                auth_token,
                email: self.email.unwrap_or_default(),
            },
            (None, None) => ResponseVerdict::Unrecognized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict_of(body: &str) -> ResponseVerdict {
        RegisterResponse::from_body(body).unwrap().verdict()
    }

    #[test]
    fn test_token_means_accepted() {
        assert_eq!(
            verdict_of(r#"{"authtoken":"abc123","email":"a@b.com"}"#),
            ResponseVerdict::Accepted {
                auth_token: "abc123".to_string(),
                email: "a@b.com".to_string(),
            }
        );
    }

    #[test]
    fn test_accepted_without_email_stores_empty_email() {
        assert_eq!(
            verdict_of(r#"{"authtoken":"abc123"}"#),
            ResponseVerdict::Accepted {
                auth_token: "abc123".to_string(),
                email: String::new(),
            }
        );
    }

    #[test]
    fn test_error_means_rejected() {
        assert_eq!(
            verdict_of(r#"{"error":"Email already registered"}"#),
            ResponseVerdict::Rejected("Email already registered".to_string())
        );
    }

    #[test]
    fn test_error_takes_precedence_over_token() {
        assert_eq!(
            verdict_of(r#"{"authtoken":"abc123","error":"Email already registered"}"#),
            ResponseVerdict::Rejected("Email already registered".to_string())
        );
    }

    #[test]
    fn test_empty_object_is_unrecognized() {
        assert_eq!(verdict_of("{}"), ResponseVerdict::Unrecognized);
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        assert_eq!(
            verdict_of(r#"{"authtoken":"","error":""}"#),
            ResponseVerdict::Unrecognized
        );
    }

    #[test]
    fn test_non_string_fields_count_as_absent() {
        let response =
            RegisterResponse::from_body(r#"{"authtoken":42,"error":{"code":1}}"#).unwrap();
        assert_eq!(response, RegisterResponse::default());
    }

    #[test]
    fn test_non_object_json_is_unrecognized() {
        assert_eq!(verdict_of("[]"), ResponseVerdict::Unrecognized);
        assert_eq!(verdict_of(r#""ok""#), ResponseVerdict::Unrecognized);
        assert_eq!(verdict_of("null"), ResponseVerdict::Unrecognized);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = RegisterResponse::from_body("<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, RegistrationError::Parse(_)));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let response =
            RegisterResponse::from_body(r#"{"authtoken":"t","email":"e@x.io","id":7}"#).unwrap();
        assert_eq!(response.authtoken.as_deref(), Some("t"));
        assert_eq!(response.email.as_deref(), Some("e@x.io"));
        assert!(response.error.is_none());
    }
}
