//! Home Page
//!
//! Landing page with the chat panel. Messages go out through the chat
//! endpoint; the microphone button pulls the latest speech-to-text
//! transcript into the input box.

use leptos::*;
use serde_json::{json, Value};

use crate::api::{self, ApiClient};
use crate::state::{ChatMessage, GlobalState};

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let client = use_context::<ApiClient>().expect("ApiClient not found");

    let messages = create_rw_signal(Vec::<ChatMessage>::new());
    let (input, set_input) = create_signal(String::new());
    let (sending, set_sending) = create_signal(false);
    let (listening, set_listening) = create_signal(false);

    let state_for_send = state.clone();
    let client_for_send = client.clone();
    let send_message = move |_| {
        let text = input.get().trim().to_string();
        if text.is_empty() || sending.get() {
            return;
        }

        messages.update(|m| m.push(ChatMessage::user(&text)));
        set_input.set(String::new());
        set_sending.set(true);

        let state = state_for_send.clone();
        let client = client_for_send.clone();
        spawn_local(async move {
            match api::chat(&client, json!(text)).await {
                Ok(Some(reply)) => {
                    messages.update(|m| m.push(ChatMessage::assistant(reply_text(&reply))));
                }
                Ok(None) => {
                    state.show_error("No reply received");
                }
                Err(e) => {
                    state.show_error(&e.to_string());
                }
            }
            set_sending.set(false);
        });
    };

    let state_for_speech = state;
    let client_for_speech = client;
    let transcribe = move |_| {
        if listening.get() {
            return;
        }
        set_listening.set(true);

        let state = state_for_speech.clone();
        let client = client_for_speech.clone();
        spawn_local(async move {
            match api::speech_to_text(&client).await {
                Ok(Some(transcript)) => {
                    set_input.set(reply_text(&transcript));
                }
                Ok(None) => {
                    state.show_error("No transcript available");
                }
                Err(e) => {
                    state.show_error(&e.to_string());
                }
            }
            set_listening.set(false);
        });
    };

    view! {
        <div class="space-y-8 max-w-3xl mx-auto">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"KinAtlas"</h1>
                <p class="text-gray-400 mt-1">"Your personal, family and world graphs - with a chat companion"</p>
            </div>

            // Chat transcript
            <section class="bg-gray-800 rounded-xl p-6 min-h-[40vh] space-y-3">
                {move || {
                    let entries = messages.get();
                    if entries.is_empty() {
                        view! {
                            <p class="text-gray-500 text-center py-12">"Ask something to get started"</p>
                        }.into_view()
                    } else {
                        entries.into_iter().map(|message| {
                            let align = if message.from_user { "justify-end" } else { "justify-start" };
                            let bubble = if message.from_user { "bg-primary-600" } else { "bg-gray-700" };
                            view! {
                                <div class=format!("flex {}", align)>
                                    <div class=format!("{} rounded-lg px-4 py-2 max-w-[80%]", bubble)>
                                        <p class="text-sm">{message.text.clone()}</p>
                                        <p class="text-xs text-gray-400 mt-1">{message.time_label()}</p>
                                    </div>
                                </div>
                            }
                        }).collect_view()
                    }
                }}
            </section>

            // Input row
            <div class="flex space-x-2">
                <input
                    type="text"
                    placeholder="Type a message..."
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <button
                    on:click=transcribe
                    disabled=move || listening.get()
                    class="px-4 py-3 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                           rounded-lg font-medium transition-colors"
                >
                    {move || if listening.get() { "..." } else { "🎤" }}
                </button>
                <button
                    on:click=send_message
                    disabled=move || sending.get()
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if sending.get() { "Sending..." } else { "Send" }}
                </button>
            </div>
        </div>
    }
}

/// Pull display text out of a reply body: prefer the `data` field, fall
/// back to a bare string, then to raw JSON.
fn reply_text(value: &Value) -> String {
    value
        .get("data")
        .and_then(Value::as_str)
        .map(str::to_string)
        .or_else(|| value.as_str().map(str::to_string))
        .unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_text_prefers_data_field() {
        assert_eq!(reply_text(&json!({ "data": "hello" })), "hello");
        assert_eq!(reply_text(&json!("plain")), "plain");
        assert_eq!(reply_text(&json!({ "other": 1 })), r#"{"other":1}"#);
    }
}
