//! Welcome Page
//!
//! Landing hero with calls to action.

use leptos::*;
use leptos_router::*;

use crate::components::Brand;

/// Landing page component
#[component]
pub fn Welcome() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-white">
            <header class="flex justify-between items-center px-10 py-6">
                <Brand />
            </header>

            <main class="flex flex-col items-center justify-center flex-1 px-6 text-center">
                <h2 class="text-4xl font-bold text-purple-700 mb-4">
                    "Your podcast workspace"
                </h2>
                <p class="text-gray-500 max-w-xl mb-8">
                    "Create projects, bring in episodes from RSS feeds, YouTube, or your own files, "
                    "and edit transcripts right in the browser."
                </p>
                <div class="flex items-center gap-4">
                    <A
                        href="/signup"
                        class="bg-purple-600 text-white px-8 py-3 rounded-md font-semibold hover:bg-purple-700"
                    >
                        "Get Started"
                    </A>
                    <A
                        href="/projects"
                        class="text-purple-600 px-6 py-3 font-medium hover:underline"
                    >
                        "Go to projects"
                    </A>
                </div>
            </main>
        </div>
    }
}
