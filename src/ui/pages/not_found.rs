//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::navigator::AUTHENTICATED_LANDING_ROUTE;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <h1 class="text-6xl font-bold mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold mb-2">"Page Not Found"</h2>
                <p class="mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>
                <A
                    href=AUTHENTICATED_LANDING_ROUTE
                    attr:class="px-6 py-3 btn btn-primary rounded-lg"
                >
                    "Go Home"
                </A>
            </div>
        </div>
    }
}
