//! User registration flow
//!
//! This module provides the registration form controller:
//! - Holds the four form inputs and the inline error message
//! - Posts the inputs to the authentication service
//! - Establishes the session and navigates on success
//! - Surfaces domain rejections, swallows transport failures

mod controller;
mod error;
mod guard;
mod input;
mod response;

pub use controller::{Phase, RegistrationController, SubmitOutcome};
pub use error::RegistrationError;
pub use guard::SubmitPolicy;
pub use input::{Field, RegistrationInput};
pub use response::{RegisterResponse, ResponseVerdict};
