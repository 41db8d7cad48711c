//! Signup Page
//!
//! Account form. There is no real authentication; submitting simply moves on
//! to the projects page.

use leptos::*;
use leptos_router::*;

use crate::components::Brand;

/// Signup page component
#[component]
pub fn Signup() -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());

    let navigate = use_navigate();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        navigate("/projects", Default::default());
    };

    view! {
        <div class="min-h-screen flex flex-col bg-white">
            <header class="flex justify-between items-center px-10 py-6">
                <Brand />
            </header>

            <main class="flex flex-col items-center justify-center flex-1 px-6">
                <div class="w-full max-w-md bg-white border rounded-xl shadow-md p-8">
                    <h2 class="text-2xl font-bold text-purple-700 mb-6">"Create your account"</h2>

                    <form on:submit=on_submit class="space-y-4">
                        <Field
                            label="Name"
                            input_type="text"
                            placeholder="Your name"
                            value=name
                            set_value=set_name
                        />
                        <Field
                            label="Email"
                            input_type="email"
                            placeholder="you@example.com"
                            value=email
                            set_value=set_email
                        />
                        <Field
                            label="Password"
                            input_type="password"
                            placeholder="••••••••"
                            value=password
                            set_value=set_password
                        />

                        <button
                            type="submit"
                            class="w-full bg-purple-600 text-white py-3 rounded-md font-semibold hover:bg-purple-700"
                        >
                            "Sign Up"
                        </button>
                    </form>

                    <p class="text-sm text-gray-500 mt-4 text-center">
                        "Already have an account? "
                        <A href="/projects" class="text-purple-600 hover:underline">"Continue"</A>
                    </p>
                </div>
            </main>
        </div>
    }
}

#[component]
fn Field(
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-700 mb-1">{label}</label>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full border rounded px-3 py-2 outline-purple-600"
            />
        </div>
    }
}
