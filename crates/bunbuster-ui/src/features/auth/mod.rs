//! Login and signup.
//!
//! # Design
//! - Forms validate inline on input and in full on submit.
//! - A login only counts once the server returned both the user and a token.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
