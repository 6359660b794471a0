//! Internation Page
//!
//! Cross-border view over the world graph: same data as the world page,
//! ranked by node value.

use leptos::*;

use crate::api::{self, ApiClient};
use crate::components::ListSkeleton;
use crate::state::{GlobalState, GraphNode};

/// Internation page component
#[component]
pub fn Internation() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let client = use_context::<ApiClient>().expect("ApiClient not found");

    let nodes = create_rw_signal(Vec::<GraphNode>::new());
    let (loading, set_loading) = create_signal(true);

    create_effect(move |_| {
        let state = state.clone();
        let client = client.clone();
        spawn_local(async move {
            match api::get_world(&client).await {
                Ok(Some(list)) => nodes.set(rank_by_value(list)),
                Ok(None) => {}
                Err(e) => state.show_error(&e.to_string()),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="space-y-8 max-w-2xl mx-auto">
            <div>
                <h1 class="text-3xl font-bold">"Internation"</h1>
                <p class="text-gray-400 mt-1">"World graph ranked by weight"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                {move || {
                    if loading.get() {
                        view! { <ListSkeleton count=6 /> }.into_view()
                    } else {
                        let list = nodes.get();
                        if list.is_empty() {
                            view! { <p class="text-gray-500">"No data"</p> }.into_view()
                        } else {
                            list.into_iter().enumerate().map(|(rank, node)| {
                                let value = node.value.clone().unwrap_or_default();
                                view! {
                                    <div class="flex items-center p-3 bg-gray-700 rounded-lg mb-2">
                                        <span class="text-gray-500 w-8">{format!("{}", rank + 1)}</span>
                                        <span class="flex-1 font-medium">{node.name.clone()}</span>
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

/// Sort nodes by numeric value, highest first; rows without a parseable
/// value sink to the end.
fn rank_by_value(mut nodes: Vec<GraphNode>) -> Vec<GraphNode> {
    nodes.sort_by(|a, b| {
        let weight = |node: &GraphNode| {
            node.value
                .as_deref()
                .and_then(|v| v.parse::<f64>().ok())
                .unwrap_or(f64::NEG_INFINITY)
        };
        weight(b).total_cmp(&weight(a))
    });
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str, value: Option<&str>) -> GraphNode {
        GraphNode {
            name: name.to_string(),
            value: value.map(str::to_string),
            x: None,
            y: None,
            symbol: None,
            symbol_size: None,
            item_style: None,
        }
    }

    #[test]
    fn test_rank_by_value_descending() {
        let ranked = rank_by_value(vec![
            node("low", Some("1")),
            node("high", Some("10")),
            node("unparsed", Some("n/a")),
            node("missing", None),
        ]);

        let names: Vec<_> = ranked.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(&names[..2], ["high", "low"]);
        // Unrankable rows keep their relative order at the end
        assert_eq!(&names[2..], ["unparsed", "missing"]);
    }
}
