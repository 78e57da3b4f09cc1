//! Shared API client handed to views through a Yew context.
//!
//! The client is built once at boot; login and logout only swap its bearer token.

use crate::core::config::ClientConfig;
use crate::core::store::{AppStore, current_token};
use crate::services::api::ApiClient;
use std::rc::Rc;

#[derive(Clone)]
pub(crate) struct ApiCtx {
    pub client: Rc<ApiClient>,
}

impl ApiCtx {
    /// Client for the build-time base URL, carrying the token of a restored session.
    pub(crate) fn boot(store: &AppStore) -> Self {
        let token = current_token(store).map(str::to_string);
        Self {
            client: Rc::new(ApiClient::new(ClientConfig::from_build_env(), token)),
        }
    }
}

// Same client instance means same context; avoids re-rendering every consumer.
impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
