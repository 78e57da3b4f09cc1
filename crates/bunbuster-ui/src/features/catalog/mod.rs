//! Genre and director browsing.
//!
//! # Design
//! - Both collections are fetched once per session and resolved by name for detail routes.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
