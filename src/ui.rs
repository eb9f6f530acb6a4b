//! Terminal UI components, views, and state management.

pub mod app;
pub mod colors;
pub mod components;
pub mod effects;
pub mod events;
pub mod prompt;
pub mod store;
pub mod views;
