//! Node Grid Component
//!
//! Card grid for graph nodes, shared by the world, nation and internation
//! views.

use leptos::*;

use crate::state::GraphNode;

/// Card grid over a set of graph nodes
#[component]
pub fn NodeGrid(nodes: Vec<GraphNode>) -> impl IntoView {
    if nodes.is_empty() {
        return view! { <p class="text-gray-500">"No data"</p> }.into_view();
    }

    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            {nodes.into_iter().map(|node| {
                let value = node.value.clone().unwrap_or_default();
                let symbol = node.symbol.clone().unwrap_or_else(|| "•".to_string());
                view! {
                    <div class="bg-gray-700 rounded-lg p-4">
                        <div class="flex items-center justify-between">
                            <span class="font-medium">{node.name.clone()}</span>
                            <span class="text-gray-400 text-sm">{symbol}</span>
                        </div>
                        <p class="text-gray-400 text-sm mt-1">{value}</p>
                    </div>
                }
            }).collect_view()}
        </div>
    }
    .into_view()
}
