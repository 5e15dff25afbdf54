//! Landing page component
//!
//! Destination after a successful registration.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::navigator::REGISTER_ROUTE;
use crate::ui::auth::use_auth_context;

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = use_auth_context();

    view! {
        <div class="container-lg mt-5 text-center">
            {move || {
                if auth.is_authenticated() {
                    view! { <h2 class="font-bold">"Welcome to GiftLink"</h2> }.into_any()
                } else {
                    view! {
                        <p>
                            "New here? "
                            <A href=REGISTER_ROUTE attr:class="text-primary">"Create an account"</A>
                        </p>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
