//! Sidebar Component
//!
//! Collapsible navigation rail for the upload flow.

use leptos::*;

/// Tabs available in the upload-flow sidebar
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SidebarTab {
    Upload,
    Repurpose,
    Widget,
    Upgrade,
}

impl SidebarTab {
    pub const ALL: [SidebarTab; 4] = [
        SidebarTab::Upload,
        SidebarTab::Repurpose,
        SidebarTab::Widget,
        SidebarTab::Upgrade,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SidebarTab::Upload => "Add your Podcast(s)",
            SidebarTab::Repurpose => "Create & Repurpose",
            SidebarTab::Widget => "Podcast Widget",
            SidebarTab::Upgrade => "Upgrade",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SidebarTab::Upload => "+",
            SidebarTab::Repurpose => "✎",
            SidebarTab::Widget => "🧩",
            SidebarTab::Upgrade => "🚀",
        }
    }

    /// Trailing breadcrumb segment for this tab
    pub fn breadcrumb(&self) -> &'static str {
        match self {
            SidebarTab::Upload => "Add your podcast",
            SidebarTab::Repurpose => "repurpose",
            SidebarTab::Widget => "widget",
            SidebarTab::Upgrade => "upgrade",
        }
    }
}

/// Collapsible sidebar with tab buttons, help link, and user footer
#[component]
pub fn Sidebar(
    collapsed: ReadSignal<bool>,
    set_collapsed: WriteSignal<bool>,
    active: ReadSignal<SidebarTab>,
    set_active: WriteSignal<SidebarTab>,
) -> impl IntoView {
    view! {
        <aside
            class="relative bg-white border-r shadow-sm flex flex-col justify-between transition-all duration-300"
            style:width=move || if collapsed.get() { "80px" } else { "256px" }
        >
            <div class="p-4">
                {move || {
                    if collapsed.get() {
                        view! {}.into_view()
                    } else {
                        view! {
                            <div class="flex items-center gap-3 mb-10">
                                <span class="text-2xl">"🎙️"</span>
                                <h1 class="text-2xl font-bold text-purple-600">
                                    "Pod."<span class="font-normal text-black">"Studio"</span>
                                </h1>
                            </div>
                        }.into_view()
                    }
                }}

                <nav class="space-y-4">
                    {SidebarTab::ALL.into_iter().map(|tab| {
                        view! {
                            <TabButton tab=tab collapsed=collapsed active=active set_active=set_active />
                        }
                    }).collect_view()}
                </nav>
            </div>

            <div class="p-4 text-sm text-gray-600 space-y-3">
                <a href="#" class="flex items-center gap-3 hover:text-purple-600 px-3 py-2 rounded">
                    <span>"❓"</span>
                    {move || (!collapsed.get()).then(|| "Help")}
                </a>
                <div class="flex items-center gap-3 px-3">
                    <span class="text-2xl text-gray-400">"👤"</span>
                    {move || {
                        (!collapsed.get()).then(|| view! {
                            <div>
                                <p class="text-gray-800">"Username"</p>
                                <p class="text-xs text-gray-500">"username@gmail.com"</p>
                            </div>
                        })
                    }}
                </div>
            </div>

            // Floating collapse toggle on the sidebar edge
            <button
                on:click=move |_| set_collapsed.update(|c| *c = !*c)
                class="absolute z-10 top-1/2 right-0 transform translate-x-1/2 -translate-y-1/2 w-8 h-8
                       bg-purple-600 text-white rounded-full shadow-md hover:bg-purple-700
                       flex items-center justify-center transition"
            >
                {move || if collapsed.get() { "»" } else { "«" }}
            </button>
        </aside>
    }
}

#[component]
fn TabButton(
    tab: SidebarTab,
    collapsed: ReadSignal<bool>,
    active: ReadSignal<SidebarTab>,
    set_active: WriteSignal<SidebarTab>,
) -> impl IntoView {
    view! {
        <button
            on:click=move |_| set_active.set(tab)
            class=move || {
                let base = "flex items-center gap-3 px-3 py-2 rounded w-full text-left";
                if active.get() == tab {
                    format!("{} text-purple-600 font-semibold bg-purple-50", base)
                } else {
                    format!("{} text-gray-700 hover:text-purple-600", base)
                }
            }
        >
            <span class="w-5 text-center">{tab.icon()}</span>
            {move || (!collapsed.get()).then(|| tab.label())}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_breadcrumb() {
        assert_eq!(SidebarTab::Upload.breadcrumb(), "Add your podcast");
        assert_eq!(SidebarTab::Widget.breadcrumb(), "widget");
    }
}
