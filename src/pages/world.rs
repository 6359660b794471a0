//! World Page
//!
//! World graph view. The external charting library is pulled in through the
//! module loader before the data renders; if it cannot load, the plain grid
//! still works.

use leptos::*;

use crate::api::{self, ApiClient};
use crate::components::{ListSkeleton, NodeGrid};
use crate::loader::{DomScriptLoader, ModuleLoader};
use crate::state::{GlobalState, GraphNode};

/// Charting library loaded on demand for the map view.
const CHART_LIB_SRC: &str = "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js";

/// World page component
#[component]
pub fn World() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let client = use_context::<ApiClient>().expect("ApiClient not found");

    let nodes = create_rw_signal(Vec::<GraphNode>::new());
    let (loading, set_loading) = create_signal(true);
    let (chart_ready, set_chart_ready) = create_signal(false);

    create_effect(move |_| {
        let state = state.clone();
        let client = client.clone();
        spawn_local(async move {
            if let Err(e) = DomScriptLoader.load(CHART_LIB_SRC).await {
                state.show_error(&e.to_string());
            } else {
                set_chart_ready.set(true);
            }

            match api::get_world(&client).await {
                Ok(Some(list)) => nodes.set(list),
                Ok(None) => {}
                Err(e) => state.show_error(&e.to_string()),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"World"</h1>
                    <p class="text-gray-400 mt-1">"World relation graph"</p>
                </div>
                {move || {
                    if chart_ready.get() {
                        view! { <span class="text-sm text-green-400">"chart library ready"</span> }.into_view()
                    } else {
                        view! { <span class="text-sm text-gray-500">"chart library unavailable"</span> }.into_view()
                    }
                }}
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
