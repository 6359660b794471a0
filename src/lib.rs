//! # KinAtlas
//!
//! Personal, family and world relation graphs built with Leptos (WASM).
//!
//! # Features
//!
//! - Relation graph views (person, family, nation, world)
//! - Chat panel with speech-to-text support
//! - File import for graph data
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data comes from a backend reached through the `/api`
//! base path; during development trunk proxies that prefix to the backend
//! server. The crate has no server-side logic of its own.
//!
//! # Modules
//!
//! - [`api`]: HTTP transport wrapper and the endpoint surface
//! - [`router`]: static route table consumed by the navigation bar
//! - [`loader`]: dynamic script loading behind a capability trait
//! - [`pages`]: one component per route
//! - [`state`]: reactive global state and domain types

pub mod api;
pub mod app;
pub mod components;
pub mod loader;
pub mod pages;
pub mod router;
pub mod state;

// Re-export top-level types for convenience
pub use api::{
    ApiClient, CredentialProvider, LocalStorageCredentials, Method, RequestDescriptor,
    RequestError, StaticCredentials,
};
pub use loader::{DomScriptLoader, LoaderError, ModuleLoader, NoopLoader};
pub use router::{Page, RouteEntry, ROUTES};
pub use state::{provide_global_state, Book, ChatMessage, GlobalState, GraphLink, GraphNode};
