//! Auth context and browser-side collaborators for the registration flow
//!
//! This module provides:
//! - A reactive login flag shared through the component tree
//! - A `sessionStorage`-backed session store
//! - The concrete controller type used by the registration page

use leptos::prelude::*;

use crate::core::registration::RegistrationController;
use crate::core::session::{LoginState, SessionContext, SessionStore};
use crate::core::Config;

#[cfg(feature = "ssr")]
use crate::core::transport::ReqwestTransport;
#[cfg(not(feature = "ssr"))]
use crate::core::transport::GlooTransport;

/// Auth context providing the application's logged-in flag
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub logged_in: RwSignal<bool>,
}

impl AuthContext {
    /// Check if user is authenticated
    pub fn is_authenticated(&self) -> bool {
        self.logged_in.get()
    }
}

impl LoginState for AuthContext {
    fn set_logged_in(&self, logged_in: bool) {
        self.logged_in.set(logged_in);
    }
}

/// Provide auth context to the component tree
pub fn provide_auth_context() -> AuthContext {
    let ctx = AuthContext {
        logged_in: RwSignal::new(false),
    };
    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Session store backed by the browser's `sessionStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    #[cfg(feature = "hydrate")]
    fn set(&self, key: &str, value: &str) {
        let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten())
        else {
            leptos::logging::warn!("sessionStorage not available, dropping {}", key);
            return;
        };

        if let Err(e) = storage.set_item(key, value) {
            leptos::logging::warn!("Failed to write {} to sessionStorage: {:?}", key, e);
        }
    }

    // No browser storage during server rendering
    #[cfg(not(feature = "hydrate"))]
    fn set(&self, _key: &str, _value: &str) {}
}

#[cfg(feature = "ssr")]
pub type PageTransport = ReqwestTransport;
#[cfg(not(feature = "ssr"))]
pub type PageTransport = GlooTransport;

pub type PageNavigator = Box<dyn Fn(&str)>;

/// Controller type driving the registration page
pub type PageController =
    RegistrationController<PageTransport, BrowserSessionStore, AuthContext, PageNavigator>;

fn page_config() -> Config {
    #[cfg(feature = "ssr")]
    {
        Config::from_env()
    }
    #[cfg(not(feature = "ssr"))]
    {
        Config::from_build_env()
    }
}

/// Build the registration controller for the current page
pub fn page_controller(auth: AuthContext, navigator: PageNavigator) -> PageController {
    RegistrationController::new(
        &page_config(),
        PageTransport::default(),
        SessionContext::new(BrowserSessionStore, auth),
        navigator,
    )
}
