pub mod auth;
pub mod pages;

pub use auth::{AuthContext, RegisterForm, provide_auth_context, use_auth_context};
pub use pages::{LandingPage, NotFoundPage, RegisterPage};
