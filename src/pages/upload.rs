//! Upload Flow Page
//!
//! Sidebar navigation, content source cards, the upload dialog, the files
//! table, and the transcript viewer/editor.

use leptos::*;
use leptos_router::*;

use crate::components::{FilesTable, Modal, Sidebar, SidebarTab};
use crate::state::global::{GlobalState, SourceKind, UploadRecord};

/// Upload flow for one project
#[component]
pub fn UploadFlow() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let params = use_params_map();

    let (collapsed, set_collapsed) = create_signal(false);
    let (active_tab, set_active_tab) = create_signal(SidebarTab::Upload);
    let (dialog, set_dialog) = create_signal(None::<SourceKind>);
    let (viewing, set_viewing) = create_signal(None::<usize>);

    // The project only exists in this session's signal; after a reload the
    // lookup misses and the breadcrumb falls back.
    let state_for_name = state.clone();
    let project_name = create_memo(move |_| {
        params
            .with(|p| p.get("id").and_then(|id| id.parse::<i64>().ok()))
            .and_then(|id| state_for_name.project_by_id(id))
            .map(|p| p.name)
            .unwrap_or_else(|| "Untitled Project".to_string())
    });

    let uploads = state.uploads;
    let state_for_delete = state.clone();

    view! {
        <div class="flex font-sans relative h-screen overflow-hidden">
            <Sidebar
                collapsed=collapsed
                set_collapsed=set_collapsed
                active=active_tab
                set_active=set_active_tab
            />

            <main class="bg-gray-50 min-h-screen transition-all duration-300 p-10 flex-1 overflow-y-auto">
                // Breadcrumb
                <div class="text-sm text-gray-500 mb-4">
                    {move || format!("Home Page / {} / ", project_name.get())}
                    <span class="text-purple-600 font-medium">
                        {move || active_tab.get().breadcrumb()}
                    </span>
                </div>

                {move || {
                    if let Some(index) = viewing.get() {
                        view! {
                            <TranscriptView index=index on_back=move || set_viewing.set(None) />
                        }.into_view()
                    } else if active_tab.get() == SidebarTab::Upload {
                        view! {
                            <h1 class="text-2xl font-bold mb-6">"Add Podcast"</h1>

                            // Content source cards
                            <div class="grid grid-cols-1 sm:grid-cols-3 gap-6 mb-10">
                                {[SourceKind::Rss, SourceKind::Youtube, SourceKind::File]
                                    .into_iter()
                                    .map(|kind| view! {
                                        <SourceCard kind=kind on_open=move |k| set_dialog.set(Some(k)) />
                                    })
                                    .collect_view()}
                            </div>

                            // Drop-zone placeholder
                            <div class="bg-white border-2 border-dashed border-gray-300 p-10 rounded-xl text-center shadow-sm">
                                <span class="text-5xl text-purple-600 block mb-4">"☁️"</span>
                                <p class="text-gray-700 text-sm mb-2">
                                    "Select a file or drag and drop here (Podcast Media or Transcription Text)"
                                </p>
                                <p class="text-xs text-gray-400 mb-4">
                                    "MP4, MOV, MP3, WAV, PDF, DOCX or TXT file"
                                </p>
                                <button class="border border-purple-600 text-purple-600 px-6 py-2 rounded-full text-sm hover:bg-purple-50">
                                    "Select File"
                                </button>
                            </div>

                            // Uploaded records
                            {
                                let state_for_table = state_for_delete.clone();
                                move || {
                                    (!uploads.get().is_empty()).then(|| {
                                        let state_for_table = state_for_table.clone();
                                        view! {
                                            <FilesTable
                                                records=uploads
                                                on_view=move |index| set_viewing.set(Some(index))
                                                on_delete=move |index| state_for_table.delete_upload(index)
                                            />
                                        }
                                    })
                                }
                            }
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </main>

            // Upload dialog
            {move || {
                dialog.get().map(|kind| view! {
                    <UploadModal kind=kind on_close=move || set_dialog.set(None) />
                })
            }}
        </div>
    }
}

/// Clickable card for one content source
#[component]
fn SourceCard(kind: SourceKind, on_open: impl Fn(SourceKind) + 'static) -> impl IntoView {
    view! {
        <div
            on:click=move |_| on_open(kind)
            class="cursor-pointer bg-white border shadow-md rounded p-4 py-8 hover:shadow-lg transition flex-1"
        >
            <div class="flex items-center justify-between h-full">
                <div class="flex flex-col justify-center">
                    <h3 class="text-xl font-bold text-gray-900">{kind.card_title()}</h3>
                    <p class="text-md text-gray-500 leading-snug">
                        "Bring episodes straight into this project."
                    </p>
                </div>
                <span class=format!("text-4xl ml-4 {}", kind.icon_class())>{kind.icon()}</span>
            </div>
        </div>
    }
}

/// Dialog collecting a name and transcript for a new upload record
#[component]
fn UploadModal(kind: SourceKind, on_close: impl Fn() + Copy + 'static) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (transcript, set_transcript) = create_signal(String::new());

    let upload = move |_| {
        let record = UploadRecord::now(&name.get(), &transcript.get());
        state.show_success(&format!("\"{}\" uploaded", record.name));
        state.add_upload(record);
        on_close();
    };

    view! {
        <Modal width="max-w-3xl">
            <button
                on:click=move |_| on_close()
                class="absolute right-4 top-4 text-gray-500 hover:text-black"
            >
                "✕"
            </button>
            <div class="flex items-center gap-3 mb-4">
                <span class=format!("text-3xl {}", kind.icon_class())>{kind.icon()}</span>
                <h2 class="text-xl font-bold">{kind.dialog_title()}</h2>
            </div>
            <div class="space-y-4">
                <input
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    class="w-full border px-3 py-2 rounded outline-none focus:ring-2 focus:ring-purple-500"
                />
                <textarea
                    placeholder="Transcript"
                    rows=4
                    prop:value=move || transcript.get()
                    on:input=move |ev| set_transcript.set(event_target_value(&ev))
                    class="w-full border px-3 py-2 rounded outline-none focus:ring-2 focus:ring-purple-500 resize-none"
                ></textarea>
                <button
                    on:click=upload
                    class="bg-purple-900 text-white px-6 py-2 rounded hover:bg-purple-700 float-right"
                >
                    "Upload"
                </button>
            </div>
        </Modal>
    }
}

/// Transcript viewer with an inline edit mode
#[component]
fn TranscriptView(index: usize, on_back: impl Fn() + Copy + 'static) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (edit_mode, set_edit_mode) = create_signal(false);
    let (edited, set_edited) = create_signal(String::new());

    let uploads = state.uploads;
    let current_transcript = move || {
        uploads
            .get()
            .get(index)
            .map(|r| r.transcript.clone())
            .unwrap_or_default()
    };

    let start_edit = move |_| {
        set_edited.set(current_transcript());
        set_edit_mode.set(true);
    };

    let state_for_save = state.clone();
    let save = move |_| {
        state_for_save.set_transcript(index, edited.get());
        state_for_save.show_success("Transcript saved");
        set_edit_mode.set(false);
    };

    view! {
        <div class="flex items-center justify-between mb-6">
            <button
                on:click=move |_| {
                    set_edit_mode.set(false);
                    on_back();
                }
                class="text-black flex items-center gap-2"
            >
                "← Edit Transcript"
            </button>
            {move || {
                if edit_mode.get() {
                    view! {
                        <div class="flex gap-3">
                            <button
                                on:click=move |_| set_edit_mode.set(false)
                                class="px-6 py-2 border border-red-400 text-red-500 rounded hover:bg-red-50 font-semibold"
                            >
                                "Discard"
                            </button>
                            <button
                                on:click=save.clone()
                                class="px-6 py-2 bg-purple-600 text-white rounded hover:bg-purple-700 font-semibold"
                            >
                                "Save"
                            </button>
                        </div>
                    }.into_view()
                } else {
                    view! {
                        <button
                            on:click=start_edit
                            class="bg-black text-white px-6 py-2 rounded hover:bg-gray-800 font-semibold"
                        >
                            "Edit"
                        </button>
                    }.into_view()
                }
            }}
        </div>
        <div class="bg-white p-6 rounded-xl shadow-md">
            <h3 class="text-purple-700 font-semibold mb-3">"Speaker"</h3>
            {move || {
                if edit_mode.get() {
                    view! {
                        <textarea
                            class="w-full h-60 p-3 border rounded outline-none focus:ring-2 focus:ring-purple-500"
                            prop:value=move || edited.get()
                            on:input=move |ev| set_edited.set(event_target_value(&ev))
                        ></textarea>
                    }.into_view()
                } else {
                    view! {
                        <p class="text-gray-700 whitespace-pre-wrap">{current_transcript()}</p>
                    }.into_view()
                }
            }}
        </div>
    }
}
