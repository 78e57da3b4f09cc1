//! HTTP client for the Bunbuster REST API.
//!
//! # Design
//! - One explicit wrapper per endpoint; no URL pattern matching.
//! - Read the body as text once and hand it to the DOM-free classifiers in `core::http`.
//! - The bearer token lives behind interior mutability so the client is created once per boot.

use crate::core::auth::Session;
use crate::core::config::ClientConfig;
use crate::core::http::{ApiError, bearer, decode_json, expect_success};
use crate::core::logic::{favorite_movies_path, favorite_path, user_path};
use crate::features::auth::logic::session_from_login;
use crate::features::favorites::logic::returned_user;
use crate::features::movies::logic::{
    MovieListOutcome, MovieQuery, build_movies_path, movie_list_outcome,
};
use crate::models::{Director, Genre, Movie, UserProfile};
use bunbuster_api_models::{
    DirectorRecord, FavoriteMoviesResponse, GenreRecord, LoginRequest, LoginResponse,
    ProfileUpdateRequest, SignupRequest, UserResponse,
};
use gloo_net::http::Request;
use serde::Serialize;
use std::cell::RefCell;

/// Status line and body of a completed request.
struct RawResponse {
    status: u16,
    status_text: String,
    body: String,
}

impl RawResponse {
    fn decode<T: serde::de::DeserializeOwned>(&self) -> Result<T, ApiError> {
        decode_json(self.status, &self.status_text, &self.body)
    }

    fn expect_success(&self) -> Result<(), ApiError> {
        expect_success(self.status, &self.status_text, &self.body)
    }
}

#[derive(Debug)]
pub(crate) struct ApiClient {
    config: ClientConfig,
    token: RefCell<Option<String>>,
}

impl ApiClient {
    pub(crate) fn new(config: ClientConfig, token: Option<String>) -> Self {
        Self {
            config,
            token: RefCell::new(token),
        }
    }

    pub(crate) const fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn set_token(&self, token: Option<String>) {
        *self.token.borrow_mut() = token;
    }

    fn token(&self) -> Result<String, ApiError> {
        self.token.borrow().clone().ok_or(ApiError::NoSession)
    }

    fn authorize(&self, req: Request) -> Result<Request, ApiError> {
        let token = self.token()?;
        Ok(req.header("Authorization", &bearer(&token)))
    }

    async fn send(req: Request) -> Result<RawResponse, ApiError> {
        let resp = req
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let status = resp.status();
        let status_text = resp.status_text();
        let body = resp
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok(RawResponse {
            status,
            status_text,
            body,
        })
    }

    fn with_json<T: Serialize>(req: Request, body: &T) -> Result<Request, ApiError> {
        req.json(body).map_err(|err| ApiError::Decode(err.to_string()))
    }

    pub(crate) async fn login(&self, request: &LoginRequest) -> Result<Session, ApiError> {
        let req = Self::with_json(Request::post(&self.config.url("/login")), request)?;
        let response: LoginResponse = Self::send(req).await?.decode()?;
        session_from_login(response)
    }

    pub(crate) async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        let req = Self::with_json(Request::post(&self.config.url("/users")), request)?;
        Self::send(req).await?.expect_success()
    }

    pub(crate) async fn fetch_movies(
        &self,
        query: &MovieQuery,
    ) -> Result<MovieListOutcome, ApiError> {
        let req = self.authorize(Request::get(&self.config.url(&build_movies_path(query))))?;
        let raw = Self::send(req).await?;
        movie_list_outcome(raw.status, &raw.status_text, &raw.body)
    }

    pub(crate) async fn fetch_genres(&self) -> Result<Vec<Genre>, ApiError> {
        let req = self.authorize(Request::get(&self.config.url("/movies/genres/all")))?;
        let records: Vec<GenreRecord> = Self::send(req).await?.decode()?;
        Ok(records.into_iter().map(Genre::from).collect())
    }

    pub(crate) async fn fetch_directors(&self) -> Result<Vec<Director>, ApiError> {
        let req = self.authorize(Request::get(&self.config.url("/movies/directors/all")))?;
        let records: Vec<DirectorRecord> = Self::send(req).await?.decode()?;
        Ok(records.into_iter().map(Director::from).collect())
    }

    pub(crate) async fn fetch_profile(&self, username: &str) -> Result<UserProfile, ApiError> {
        let req = self.authorize(Request::get(&self.config.url(&user_path(username))))?;
        let response: UserResponse = Self::send(req).await?.decode()?;
        Ok(UserProfile::from(response.into_user()))
    }

    pub(crate) async fn update_profile(
        &self,
        username: &str,
        update: &ProfileUpdateRequest,
    ) -> Result<UserProfile, ApiError> {
        let req = self.authorize(Request::put(&self.config.url(&user_path(username))))?;
        let req = Self::with_json(req, update)?;
        let response: UserResponse = Self::send(req).await?.decode()?;
        Ok(UserProfile::from(response.into_user()))
    }

    pub(crate) async fn delete_account(&self, username: &str) -> Result<(), ApiError> {
        let req = self.authorize(Request::delete(&self.config.url(&user_path(username))))?;
        Self::send(req).await?.expect_success()
    }

    pub(crate) async fn fetch_favorite_movies(
        &self,
        username: &str,
    ) -> Result<Vec<Movie>, ApiError> {
        let req = self.authorize(Request::get(
            &self.config.url(&favorite_movies_path(username)),
        ))?;
        let response: FavoriteMoviesResponse = Self::send(req).await?.decode()?;
        Ok(response.fav_movies.into_iter().map(Movie::from).collect())
    }

    pub(crate) async fn add_favorite(
        &self,
        username: &str,
        movie_id: &str,
    ) -> Result<Option<UserProfile>, ApiError> {
        let req = self.authorize(Request::put(
            &self.config.url(&favorite_path(username, movie_id)),
        ))?;
        let raw = Self::send(req).await?;
        raw.expect_success()?;
        Ok(returned_user(&raw.body))
    }

    pub(crate) async fn remove_favorite(
        &self,
        username: &str,
        movie_id: &str,
    ) -> Result<Option<UserProfile>, ApiError> {
        let req = self.authorize(Request::delete(
            &self.config.url(&favorite_path(username, movie_id)),
        ))?;
        let raw = Self::send(req).await?;
        raw.expect_success()?;
        Ok(returned_user(&raw.body))
    }
}
