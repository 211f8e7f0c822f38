//! Stateless fetch client for the placeholder API.
//!
//! # Design
//! `FetchClient` holds only a `base_url` and a shared `reqwest::Client`, and
//! carries no mutable state between calls. Every fetch is split into
//! `build_get`, which produces an `HttpRequest`, and `parse_json`, which
//! consumes an `HttpResponse`; `fetch_json` joins the two around a single
//! network round-trip. The derived queries here are the directly-awaited
//! form; the deferred and callback forms in `completion` wrap these same
//! futures.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::http::{self, HttpRequest, HttpResponse};
use crate::query;
use crate::types::{Comment, Post, Todo, User, UserContact};

/// Public test API used when no other base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

pub const POSTS: &str = "/posts";
pub const COMMENTS: &str = "/comments";
pub const USERS: &str = "/users";
pub const TODOS: &str = "/todos";

/// Asynchronous, stateless client for the placeholder API.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted,
/// so clones share one connection pool.
#[derive(Debug, Clone)]
pub struct FetchClient {
    base_url: String,
    http: reqwest::Client,
}

impl FetchClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_http(base_url, reqwest::Client::new())
    }

    /// Build a client around an existing `reqwest::Client`.
    pub fn with_http(base_url: &str, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_get(&self, path: &str) -> HttpRequest {
        HttpRequest {
            url: format!("{}/{}", self.base_url, path.trim_start_matches('/')),
        }
    }

    pub fn parse_json<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T, FetchError> {
        check_status(&response)?;
        Ok(serde_json::from_str(&response.body)?)
    }

    /// GET `path` relative to the base URL and decode the body as `T`.
    pub async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let request = self.build_get(path);
        debug!(url = %request.url, "fetching");
        let result = http::execute(&self.http, request)
            .await
            .and_then(|response| self.parse_json(response));
        if let Err(e) = &result {
            warn!(path, error = %e, "fetch failed");
        }
        result
    }

    pub async fn posts_by_title_length(&self) -> Result<Vec<Post>, FetchError> {
        let posts: Vec<Post> = self.fetch_json(POSTS).await?;
        Ok(query::posts_by_title_length_desc(posts))
    }

    pub async fn comments_by_name(&self) -> Result<Vec<Comment>, FetchError> {
        let comments: Vec<Comment> = self.fetch_json(COMMENTS).await?;
        Ok(query::comments_by_name_asc(comments))
    }

    pub async fn users_projected(&self) -> Result<Vec<UserContact>, FetchError> {
        let users: Vec<User> = self.fetch_json(USERS).await?;
        Ok(query::users_projected(users))
    }

    pub async fn todos_uncompleted(&self) -> Result<Vec<Todo>, FetchError> {
        let todos: Vec<Todo> = self.fetch_json(TODOS).await?;
        Ok(query::todos_uncompleted(todos))
    }
}

/// Map non-2xx status codes to `FetchError::Status`.
fn check_status(response: &HttpResponse) -> Result<(), FetchError> {
    if response.is_success() {
        return Ok(());
    }
    Err(FetchError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
