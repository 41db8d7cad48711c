//! Projects Page
//!
//! Project listing with the create-project dialog. Projects live only in
//! memory for the current session.

use leptos::*;
use leptos_router::*;

use crate::components::{Header, Modal};
use crate::state::global::{validate_project_name, GlobalState, Project};

/// Project creation/listing page
#[component]
pub fn Projects() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (show_create, set_show_create) = create_signal(false);

    let projects = state.projects;

    view! {
        <div class="min-h-screen flex flex-col bg-white">
            <Header />

            // Create button, top right, once at least one project exists
            {move || {
                (!projects.get().is_empty()).then(|| view! {
                    <div class="flex justify-end px-10 mt-4">
                        <CreateButton on_click=move |_| set_show_create.set(true) />
                    </div>
                })
            }}

            // Empty-state hero
            {move || {
                projects.get().is_empty().then(|| view! {
                    <main class="flex flex-col items-center justify-center flex-1 px-6 text-center">
                        <h2 class="text-3xl font-bold text-purple-700 mb-6">
                            "Create a New Project"
                        </h2>
                        <span class="text-7xl mb-6">"🎧"</span>
                        <p class="text-gray-500 max-w-xl mb-8 text-sm">
                            "A project groups everything for one show: episodes pulled from RSS or "
                            "YouTube, uploaded files, and their transcripts."
                        </p>
                        <CreateButton on_click=move |_| set_show_create.set(true) />
                    </main>
                })
            }}

            // Project card grid
            {move || {
                let current = projects.get();
                (!current.is_empty()).then(|| view! {
                    <section class="px-10 mt-6">
                        <h3 class="text-xl font-bold text-purple-700 mb-4">"Projects"</h3>
                        <div class="flex flex-wrap gap-4">
                            {current.into_iter().map(|project| {
                                view! { <ProjectCard project=project /> }
                            }).collect_view()}
                        </div>
                    </section>
                })
            }}

            // Create dialog
            {move || {
                show_create.get().then(|| view! {
                    <CreateProjectModal on_close=move || set_show_create.set(false) />
                })
            }}
        </div>
    }
}

#[component]
fn CreateButton(on_click: impl Fn(web_sys::MouseEvent) + 'static) -> impl IntoView {
    view! {
        <button
            on:click=on_click
            class="bg-gray-900 text-white px-6 py-3 rounded-md text-sm font-semibold
                   flex items-center gap-2 hover:bg-gray-800"
        >
            <span>"+"</span>
            "Create New Project"
        </button>
    }
}

/// Single project card; clicking it opens the upload flow
#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let navigate = use_navigate();
    let id = project.id;

    view! {
        <div
            on:click=move |_| navigate(&format!("/projects/{}/upload", id), Default::default())
            class="flex items-center gap-3 border rounded-lg p-4 w-72 cursor-pointer hover:shadow-md transition"
        >
            <div class="flex items-center justify-center h-12 w-12 bg-yellow-400 text-white font-bold rounded">
                {project.initials()}
            </div>
            <div class="flex flex-col text-left">
                <p class="font-semibold text-purple-700 text-sm">{project.name.clone()}</p>
                <p class="text-xs text-gray-500">{format!("{} Files", project.files.len())}</p>
                <p class="text-[10px] text-gray-400">"Last edited just now"</p>
            </div>
        </div>
    }
}

/// Dialog for naming and creating a project
#[component]
fn CreateProjectModal(on_close: impl Fn() + Copy + 'static) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (error, set_error) = create_signal(false);

    let create = move |_| {
        let raw = name.get();
        match validate_project_name(&raw) {
            Some(valid) => {
                let project = state.create_project(valid);
                state.show_success(&format!("Project \"{}\" created", project.name));
                on_close();
            }
            None => set_error.set(true),
        }
    };

    view! {
        <Modal>
            <h2 class="text-xl font-bold mb-4 text-black">"Create Project"</h2>
            <label class="block text-sm text-gray-700 mb-1">"Enter Project Name:"</label>
            <input
                type="text"
                placeholder="Type here"
                prop:value=move || name.get()
                on:input=move |ev| {
                    set_name.set(event_target_value(&ev));
                    set_error.set(false);
                }
                class="w-full border rounded px-3 py-2 mb-1 outline-purple-600"
            />
            {move || {
                error.get().then(|| view! {
                    <p class="text-sm text-red-500">"Project Name Can't be empty"</p>
                })
            }}
            <div class="mt-4 flex justify-end gap-4">
                <button
                    on:click=move |_| on_close()
                    class="text-red-500 font-medium"
                >
                    "Cancel"
                </button>
                <button
                    on:click=create
                    class="bg-purple-600 text-white px-4 py-2 rounded"
                >
                    "Create"
                </button>
            </div>
        </Modal>
    }
}
