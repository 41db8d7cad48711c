//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::Toast;
use crate::pages::{Projects, Signup, UploadFlow, Welcome};
use crate::state::global::{provide_global_state, GlobalState};
use crate::state::storage;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Mirror upload records back to browser storage whenever they change
    let state_for_mirror = state.clone();
    create_effect(move |_| {
        let records = state_for_mirror.uploads.get();
        if let Err(e) = storage::save_records(&records) {
            state_for_mirror.show_error(&e);
        }
    });

    view! {
        <Router>
            <Routes>
                <Route path="/" view=Welcome />
                <Route path="/signup" view=Signup />
                <Route path="/projects" view=Projects />
                <Route path="/projects/:id/upload" view=UploadFlow />
                <Route path="/*any" view=|| view! { <Redirect path="/" /> } />
            </Routes>

            // Toast notifications
            <Toast />
        </Router>
    }
}
