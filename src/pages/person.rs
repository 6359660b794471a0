//! Person Page
//!
//! Personal relation graph: node and edge lists from the nodes/links
//! endpoints.

use leptos::*;

use crate::api::{self, ApiClient};
use crate::components::{ListSkeleton, NodeGrid};
use crate::state::{GlobalState, GraphLink, GraphNode};

/// Person page component
#[component]
pub fn Person() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let client = use_context::<ApiClient>().expect("ApiClient not found");

    let nodes = create_rw_signal(Vec::<GraphNode>::new());
    let links = create_rw_signal(Vec::<GraphLink>::new());
    let (loading, set_loading) = create_signal(true);

    create_effect(move |_| {
        let state = state.clone();
        let client = client.clone();
        spawn_local(async move {
            match api::get_nodes(&client).await {
                Ok(Some(list)) => nodes.set(list),
                Ok(None) => {}
                Err(e) => state.show_error(&e.to_string()),
            }

            match api::get_links(&client).await {
                Ok(Some(list)) => links.set(list),
                Ok(None) => {}
                Err(e) => state.show_error(&e.to_string()),
            }

            set_loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Person"</h1>
                <p class="text-gray-400 mt-1">"Your personal relation graph"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">
                    {move || format!("People ({})", nodes.get().len())}
                </h2>
                {move || {
                    if loading.get() {
                        view! { <ListSkeleton /> }.into_view()
                    } else {
                        view! { <NodeGrid nodes=nodes.get() /> }.into_view()
                    }
                }}
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">
                    {move || format!("Relations ({})", links.get().len())}
                </h2>
                {move || {
                    if loading.get() {
                        view! { <ListSkeleton /> }.into_view()
                    } else {
                        let list = links.get();
                        if list.is_empty() {
                            view! { <p class="text-gray-500">"No relations"</p> }.into_view()
                        } else {
                            list.into_iter().map(|link| {
                                let target = link.target.clone().unwrap_or_default();
                                let value = link.value.clone().unwrap_or_default();
                                view! {
                                    <div class="flex items-center justify-between p-3 bg-gray-700 rounded-lg mb-2">
                                        <span>{format!("{} -> {}", link.source, target)}</span>
                                        <span class="text-gray-400 text-sm">{value}</span>
                                    </div>
                                }
                            }).collect_view()
                        }
                    }
                }}
            </section>
        </div>
    }
}
