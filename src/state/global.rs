//! Global application state and domain types.
//!
//! Reactive state management using Leptos signals, plus the data shapes the
//! backend serves.

use leptos::*;

/// Global application state provided to all components.
#[derive(Clone)]
pub struct GlobalState {
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// A book record from the demo endpoint.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Book {
    pub name: String,
    pub author: String,
}

/// A graph node as served by the nodes/world/family endpoints.
///
/// Field names follow the backend rows, which in turn follow the charting
/// library's node shape (hence the camelCase `itemStyle`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct GraphNode {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub x: Option<i64>,
    #[serde(default)]
    pub y: Option<i64>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub symbol_size: Option<i64>,
    #[serde(default, rename = "itemStyle")]
    pub item_style: Option<serde_json::Value>,
}

/// A directed edge between two graph nodes.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct GraphLink {
    pub source: String,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// One turn in the chat panel. Client-side only, never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub from_user: bool,
    pub text: String,
    pub timestamp: i64,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::stamped(true, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::stamped(false, text)
    }

    fn stamped(from_user: bool, text: impl Into<String>) -> Self {
        Self {
            from_user,
            text: text.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Clock-time label for the message row.
    pub fn time_label(&self) -> String {
        chrono::DateTime::from_timestamp_millis(self.timestamp)
            .map(|dt| dt.format("%H:%M:%S").to_string())
            .unwrap_or_default()
    }
}

/// Provide global state to the component tree.
pub fn provide_global_state() {
    let state = GlobalState {
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout).
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout).
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Clear error message.
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}
