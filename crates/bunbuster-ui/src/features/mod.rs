//! Feature slices: state and logic compile everywhere, views and API glue only on wasm32.

pub mod auth;
pub mod catalog;
pub mod favorites;
pub mod movies;
pub mod profile;
