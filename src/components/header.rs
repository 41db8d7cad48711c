//! Header Component
//!
//! Top bar with brand mark and settings/notification buttons.

use leptos::*;
use leptos_router::*;

/// Brand mark used across pages
#[component]
pub fn Brand() -> impl IntoView {
    view! {
        <A href="/" class="flex items-center gap-2">
            <span class="text-2xl">"🎙️"</span>
            <h1 class="text-2xl font-bold text-purple-600">
                "Pod."<span class="text-black font-normal">"Studio"</span>
            </h1>
        </A>
    }
}

/// Page header with brand and icon buttons
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="flex justify-between items-center px-10 py-6">
            <Brand />
            <div class="flex items-center gap-6 text-gray-700">
                <button class="hover:text-black" title="Settings">"⚙️"</button>
                <button class="hover:text-black" title="Notifications">"🔔"</button>
            </div>
        </header>
    }
}
