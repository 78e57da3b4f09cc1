//! Core, DOM-free primitives and helpers for the Web UI.
pub mod auth;
pub mod config;
pub mod http;
pub mod logic;
pub mod routing;
pub mod store;
pub mod validation;
