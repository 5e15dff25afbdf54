//! Core registration logic, independent of any rendering layer

pub mod config;
pub mod navigator;
pub mod registration;
pub mod session;
#[cfg(test)]
mod tests;
pub mod transport;

pub use config::Config;
pub use navigator::{AUTHENTICATED_LANDING_ROUTE, Navigator};
pub use registration::{
    Field, Phase, RegistrationController, RegistrationError, RegistrationInput, SubmitOutcome,
    SubmitPolicy,
};
pub use session::{
    LoginFlag, LoginState, MemorySessionStore, Session, SessionContext, SessionStore,
};
pub use transport::AuthTransport;
