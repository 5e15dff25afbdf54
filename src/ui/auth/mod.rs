//! Authentication UI module
//!
//! Registration form and the auth context it writes to.

mod context;
mod register_form;

pub use context::{
    AuthContext, BrowserSessionStore, PageController, page_controller, provide_auth_context,
    use_auth_context,
};
pub use register_form::RegisterForm;
