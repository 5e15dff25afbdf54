//! Register form component
//!
//! Four inputs bound to the registration controller, the service's error
//! message under the email input, and a submit button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::context::{page_controller, use_auth_context};
use crate::core::navigator::LOGIN_ROUTE;
use crate::core::registration::{Field, Phase, SubmitOutcome};

/// Register form component
#[component]
pub fn RegisterForm() -> impl IntoView {
    let auth = use_auth_context();
    let navigate = use_navigate();

    let controller = StoredValue::new_local(page_controller(
        auth,
        Box::new(move |route: &str| navigate(route, Default::default())),
    ));

    // Rendered copies of the controller state
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let set_field = move |field: Field, mirror: RwSignal<String>, value: String| {
        controller.with_value(|c| c.update_field(field, value.clone()));
        mirror.set(value);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let controller = controller.get_value();
        submitting.set(true);

        spawn_local(async move {
            let outcome = controller.submit().await;
            if let SubmitOutcome::Failed(err) = &outcome {
                // Not shown to the user; the form stays editable
                leptos::logging::log!("Error fetching details: {}", err);
            }

            // The page may already be gone after navigating away
            error_message.try_set(controller.error_message());
            submitting.try_set(controller.phase() == Phase::Submitting);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <h2 class="text-center mb-4 font-bold">"Register"</h2>

            <div>
                <label for="firstName" class="form-label">"First Name"</label>
                <input
                    id="firstName"
                    type="text"
                    class="form-control"
                    placeholder="Enter your First Name"
                    prop:value=move || first_name.get()
                    on:input=move |ev| set_field(Field::FirstName, first_name, event_target_value(&ev))
                />
            </div>

            <div>
                <label for="lastName" class="form-label">"Last Name"</label>
                <input
                    id="lastName"
                    type="text"
                    class="form-control"
                    placeholder="Enter your Last Name"
                    prop:value=move || last_name.get()
                    on:input=move |ev| set_field(Field::LastName, last_name, event_target_value(&ev))
                />
            </div>

            <div>
                <label for="email" class="form-label">"Email"</label>
                <input
                    id="email"
                    type="email"
                    class="form-control"
                    placeholder="Enter your email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_field(Field::Email, email, event_target_value(&ev))
                />
                <div class="text-danger">{move || error_message.get()}</div>
            </div>

            <div>
                <label for="password" class="form-label">"Password"</label>
                <input
                    id="password"
                    type="password"
                    class="form-control"
                    placeholder="Enter your password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_field(Field::Password, password, event_target_value(&ev))
                />
            </div>

            <button
                type="submit"
                class="btn btn-primary w-full"
                disabled=move || submitting.get()
            >
                "Register"
            </button>

            <p class="mt-4 text-center">
                "Already a member? "
                <A href=LOGIN_ROUTE attr:class="text-primary">"Login"</A>
            </p>
        </form>
    }
}
