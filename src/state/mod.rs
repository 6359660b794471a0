//! State Management
//!
//! Global application state and the domain types the backend serves.

pub mod global;

pub use global::{provide_global_state, Book, ChatMessage, GlobalState, GraphLink, GraphNode};
