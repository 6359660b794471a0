//! Upload Page
//!
//! File import: reads the chosen file in the browser and posts its content
//! to the upload endpoint.

use leptos::*;
use serde_json::json;
use wasm_bindgen::JsCast;

use crate::api::{self, ApiClient};
use crate::state::GlobalState;

/// Upload page component
#[component]
pub fn Upload() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let client = use_context::<ApiClient>().expect("ApiClient not found");

    let (importing, set_importing) = create_signal(false);
    let (status, set_status) = create_signal(String::new());

    let handle_file_upload = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = match ev.target().and_then(|t| t.dyn_into().ok()) {
            Some(input) => input,
            None => return,
        };

        let file = match input.files().and_then(|files| files.get(0)) {
            Some(file) => file,
            None => return,
        };

        set_importing.set(true);
        set_status.set("Reading file...".to_string());

        let filename = file.name();
        let state_clone = state.clone();
        let client_clone = client.clone();
        let file_reader = match web_sys::FileReader::new() {
            Ok(reader) => reader,
            Err(_) => {
                set_importing.set(false);
                return;
            }
        };

        let onload = {
            let file_reader = file_reader.clone();
            wasm_bindgen::closure::Closure::wrap(Box::new(move |_: web_sys::Event| {
                let content = match file_reader.result().ok().and_then(|v| v.as_string()) {
                    Some(content) => content,
                    None => {
                        set_status.set("Could not read file".to_string());
                        set_importing.set(false);
                        return;
                    }
                };

                set_status.set("Uploading...".to_string());

                let state = state_clone.clone();
                let client = client_clone.clone();
                let filename = filename.clone();
                spawn_local(async move {
                    let payload = json!({ "filename": filename, "content": content });
                    match api::upload(&client, payload).await {
                        Ok(_) => {
                            set_status.set(format!("Imported {}", filename));
                            state.show_success("File imported");
                        }
                        Err(e) => {
                            set_status.set(format!("Error: {}", e));
                            state.show_error(&e.to_string());
                        }
                    }
                    set_importing.set(false);
                });
            }) as Box<dyn FnMut(_)>)
        };

        file_reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        let _ = file_reader.read_as_text(&file);
    };

    view! {
        <div class="space-y-8 max-w-2xl mx-auto">
            <div>
                <h1 class="text-3xl font-bold">"Upload"</h1>
                <p class="text-gray-400 mt-1">"Import graph data from a file"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6 space-y-3">
                <label
                    class="flex items-center justify-center px-4 py-8 bg-gray-700
                           hover:bg-gray-600 rounded-lg cursor-pointer transition-colors
                           border-2 border-dashed border-gray-500 hover:border-primary-500"
                >
                    <input
                        type="file"
                        accept=".csv,.json,.txt"
                        class="hidden"
                        on:change=handle_file_upload
                        disabled=move || importing.get()
                    />
                    <span class="flex items-center gap-2">
                        {move || if importing.get() {
                            view! { <span class="loading-spinner w-4 h-4"></span> }.into_view()
                        } else {
                            view! { <span>"📁"</span> }.into_view()
                        }}
                        {move || if importing.get() {
                            "Processing..."
                        } else {
                            "Choose a file or drag it here"
                        }}
                    </span>
                </label>

                {move || {
                    let message = status.get();
                    if message.is_empty() {
                        view! {}.into_view()
                    } else {
                        view! {
                            <div class="text-sm p-2 bg-gray-900 rounded">
                                {message}
                            </div>
                        }.into_view()
                    }
                }}

                <p class="text-xs text-gray-500">"CSV, JSON and plain text files are accepted"</p>
            </section>
        </div>
    }
}
