//! Modal Dialog Shell
//!
//! Overlay plus centered panel; callers supply the panel contents.

use leptos::*;

/// Modal overlay wrapping its children in a centered white panel
#[component]
pub fn Modal(
    /// Max-width utility class for the panel
    #[prop(default = "max-w-lg")]
    width: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-black bg-opacity-40 flex items-center justify-center z-50">
            <div class=format!("bg-white rounded-xl p-6 w-full {} shadow-lg relative", width)>
                {children()}
            </div>
        </div>
    }
}
