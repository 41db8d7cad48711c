//! Toast Notification Component
//!
//! Renders the global success and error message signals as transient
//! overlays in the corner of the viewport.

use leptos::*;

use crate::state::global::GlobalState;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ToastVariant {
    Success,
    Error,
}

impl ToastVariant {
    fn glyph(self) -> &'static str {
        match self {
            ToastVariant::Success => "✓",
            ToastVariant::Error => "✕",
        }
    }

    fn panel_class(self) -> &'static str {
        match self {
            ToastVariant::Success => "bg-green-600",
            ToastVariant::Error => "bg-red-600",
        }
    }
}

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let success = state.success;
    let error = state.error;

    view! {
        <div class="fixed bottom-6 right-4 z-50 space-y-2">
            {move || {
                success.get().map(|msg| view! {
                    <ToastMessage message=msg variant=ToastVariant::Success />
                })
            }}
            {move || {
                error.get().map(|msg| view! {
                    <ToastMessage message=msg variant=ToastVariant::Error />
                })
            }}
        </div>
    }
}

#[component]
fn ToastMessage(
    #[prop(into)]
    message: String,
    variant: ToastVariant,
) -> impl IntoView {
    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out animate-slide-in",
            variant.panel_class()
        )>
            <span class="text-lg">{variant.glyph()}</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_styling() {
        assert_eq!(ToastVariant::Success.glyph(), "✓");
        assert_eq!(ToastVariant::Success.panel_class(), "bg-green-600");
        assert_eq!(ToastVariant::Error.glyph(), "✕");
        assert_eq!(ToastVariant::Error.panel_class(), "bg-red-600");
    }
}
