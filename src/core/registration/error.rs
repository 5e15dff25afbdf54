//! Registration transport errors

/// Failure to deliver or decode the registration exchange.
///
/// These never reach the user as an error message; the controller logs
/// them and reports them through [`super::SubmitOutcome::Failed`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error("Failed to encode request: {0}")]
    Serialization(String),

    #[error("Unable to reach the authentication service: {0}")]
    Network(String),

    #[error("Failed to decode response: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for RegistrationError {
    fn from(err: serde_json::Error) -> Self {
        RegistrationError::Parse(err.to_string())
    }
}
