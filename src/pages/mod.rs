//! Pages
//!
//! Top-level page components, one per route table entry.

pub mod home;
pub mod internation;
pub mod nation;
pub mod person;
pub mod test;
pub mod upload;
pub mod world;

pub use home::Home;
pub use internation::Internation;
pub use nation::Nation;
pub use person::Person;
pub use test::Test;
pub use upload::Upload;
pub use world::World;
