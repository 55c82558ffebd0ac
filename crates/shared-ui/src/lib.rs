//! Presentation kit for the dispatch console.

pub mod components;
pub mod theme;

pub use components::*;
