//! Application pages module
//!
//! - Register page
//! - Landing page (authenticated home)
//! - Not found page

mod landing;
mod not_found;
mod register;

pub use landing::LandingPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
