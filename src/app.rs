//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::api::ApiClient;
use crate::components::{Nav, Toast};
use crate::pages::{Home, Internation, Nation, Person, Test, Upload, World};
use crate::state::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    // One shared HTTP client for every page
    provide_context(ApiClient::new());

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area; these routes mirror crate::router::ROUTES
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/test" view=Test />
                        <Route path="/person" view=Person />
                        <Route path="/world" view=World />
                        <Route path="/nation" view=Nation />
                        <Route path="/internation" view=Internation />
                        <Route path="/uploadpage" view=Upload />
                        <Route path="/*any" view=EmptyState />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Unmatched paths render an empty main area; the route table defines no
/// fallback of its own.
#[component]
fn EmptyState() -> impl IntoView {
    view! { <div class="min-h-[40vh]" /> }
}
