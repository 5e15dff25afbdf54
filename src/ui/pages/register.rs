//! Register page component

use leptos::prelude::*;

use crate::ui::auth::RegisterForm;

/// Register page component
#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="container-lg mt-5">
            <div class="row justify-content-center">
                <div class="col-md-6 col-lg-4">
                    <div class="register-card p-4 border rounded">
                        <RegisterForm />
                    </div>
                </div>
            </div>
        </div>
    }
}
