//! Files Table Component
//!
//! Lists upload records with view/delete actions.

use leptos::*;

use crate::state::global::UploadRecord;

/// "Your Files" table of upload records
#[component]
pub fn FilesTable(
    #[prop(into)]
    records: Signal<Vec<UploadRecord>>,
    #[prop(into)]
    on_view: Callback<usize>,
    #[prop(into)]
    on_delete: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="bg-white mt-10 rounded-lg shadow-md overflow-hidden border border-gray-200">
            <h3 class="bg-gray-100 px-6 py-3 text-sm font-semibold text-gray-700 border-b">
                "Your Files"
            </h3>
            <table class="w-full text-sm text-left text-gray-700">
                <thead class="bg-gray-100 text-xs text-gray-500 uppercase">
                    <tr>
                        <th class="px-6 py-3">"No."</th>
                        <th class="px-6 py-3">"Name"</th>
                        <th class="px-6 py-3">"Upload Date & Time"</th>
                        <th class="px-6 py-3">"Action"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        records.get().into_iter().enumerate().map(|(index, record)| {
                            view! {
                                <tr class="border-t border-gray-200">
                                    <td class="px-6 py-3 font-semibold">{index + 1}</td>
                                    <td class="px-6 py-3 font-semibold">{record.name.clone()}</td>
                                    <td class="px-6 py-3 font-semibold whitespace-nowrap">
                                        {format!("{} | {}", record.date, record.time)}
                                    </td>
                                    <td class="px-6 py-3">
                                        <div class="flex gap-2 font-semibold">
                                            <button
                                                class="text-gray-700 border border-gray-300 px-4 py-1 rounded hover:bg-gray-100 text-sm"
                                                on:click=move |_| on_view.call(index)
                                            >
                                                "View"
                                            </button>
                                            <button
                                                class="text-red-500 border border-red-300 px-4 py-1 rounded hover:bg-red-50 text-sm"
                                                on:click=move |_| on_delete.call(index)
                                            >
                                                "Delete"
                                            </button>
                                        </div>
                                    </td>
                                </tr>
                            }
                        }).collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
