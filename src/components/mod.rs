//! UI Components
//!
//! Reusable Leptos components shared across pages.

pub mod loading;
pub mod nav;
pub mod node_grid;
pub mod toast;

pub use loading::{ListSkeleton, Loading};
pub use nav::Nav;
pub use node_grid::NodeGrid;
pub use toast::Toast;
