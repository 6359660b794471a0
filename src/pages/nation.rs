//! Nation Page
//!
//! Family graph view, served by the family endpoint.

use leptos::*;

use crate::api::{self, ApiClient};
use crate::components::{ListSkeleton, NodeGrid};
use crate::state::{GlobalState, GraphNode};

/// Nation page component
#[component]
pub fn Nation() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let client = use_context::<ApiClient>().expect("ApiClient not found");

    let nodes = create_rw_signal(Vec::<GraphNode>::new());
    let (loading, set_loading) = create_signal(true);

    create_effect(move |_| {
        let state = state.clone();
        let client = client.clone();
        spawn_local(async move {
            match api::get_family(&client).await {
                Ok(Some(list)) => nodes.set(list),
                Ok(None) => {}
                Err(e) => state.show_error(&e.to_string()),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Nation"</h1>
                <p class="text-gray-400 mt-1">"Family graph"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                {move || {
                    if loading.get() {
                        view! { <ListSkeleton count=6 /> }.into_view()
                    } else {
                        view! { <NodeGrid nodes=nodes.get() /> }.into_view()
                    }
                }}
            </section>
        </div>
    }
}
