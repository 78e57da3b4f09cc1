//! Shared UI atoms used across the shell and views.

pub(crate) mod empty_state;

pub(crate) use empty_state::{EmptyState, missing_api_context};
