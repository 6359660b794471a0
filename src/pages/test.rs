//! Test Page
//!
//! Books demo: lists the books endpoint and adds new entries through it.
//! Kept as the scratch page for trying the backend out.

use leptos::*;

use crate::api::{self, ApiClient};
use crate::components::ListSkeleton;
use crate::state::{Book, GlobalState};

/// Test page component
#[component]
pub fn Test() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let client = use_context::<ApiClient>().expect("ApiClient not found");

    let books = create_rw_signal(Vec::<Book>::new());
    let (loading, set_loading) = create_signal(true);
    let (name, set_name) = create_signal(String::new());
    let (author, set_author) = create_signal(String::new());
    let (saving, set_saving) = create_signal(false);

    // Fetch the list on mount
    let state_for_effect = state.clone();
    let client_for_effect = client.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        let client = client_for_effect.clone();
        spawn_local(async move {
            match api::get_books(&client).await {
                Ok(Some(list)) => books.set(list),
                Ok(None) => {}
                Err(e) => state.show_error(&e.to_string()),
            }
            set_loading.set(false);
        });
    });

    let state_for_save = state;
    let client_for_save = client;
    let add_book = move |_| {
        let book_name = name.get().trim().to_string();
        let book_author = author.get().trim().to_string();
        if book_name.is_empty() || book_author.is_empty() || saving.get() {
            return;
        }
        set_saving.set(true);

        let state = state_for_save.clone();
        let client = client_for_save.clone();
        spawn_local(async move {
            match api::post_book(&client, &book_name, &book_author).await {
                Ok(_) => {
                    state.show_success("Book saved");
                    set_name.set(String::new());
                    set_author.set(String::new());

                    // Reload the list so the new entry shows up
                    match api::get_books(&client).await {
                        Ok(Some(list)) => books.set(list),
                        Ok(None) => {}
                        Err(e) => state.show_error(&e.to_string()),
                    }
                }
                Err(e) => state.show_error(&e.to_string()),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="space-y-8 max-w-2xl mx-auto">
            <div>
                <h1 class="text-3xl font-bold">"Test Bench"</h1>
                <p class="text-gray-400 mt-1">"Books demo endpoint"</p>
            </div>

            // Add form
            <section class="bg-gray-800 rounded-xl p-6 space-y-4">
                <h2 class="text-xl font-semibold">"Add a Book"</h2>
                <div class="flex space-x-2">
                    <input
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <input
                        type="text"
                        placeholder="Author"
                        prop:value=move || author.get()
                        on:input=move |ev| set_author.set(event_target_value(&ev))
                        class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <button
                        on:click=add_book
                        disabled=move || saving.get()
                        class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if saving.get() { "Saving..." } else { "Add" }}
                    </button>
                </div>
            </section>

            // Book list
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Books"</h2>
                {move || {
                    if loading.get() {
                        view! { <ListSkeleton /> }.into_view()
                    } else {
                        let list = books.get();
                        if list.is_empty() {
                            view! { <p class="text-gray-500">"No books yet"</p> }.into_view()
                        } else {
                            list.into_iter().map(|book| view! {
                                <div class="flex items-center justify-between p-3 bg-gray-700 rounded-lg mb-2">
                                    <span class="font-medium">{book.name.clone()}</span>
                                    <span class="text-gray-400 text-sm">{book.author.clone()}</span>
                                </div>
                            }).collect_view()
                        }
                    }
                }}
            </section>
        </div>
    }
}
