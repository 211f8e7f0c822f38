//! Asynchronous client core for the placeholder REST API.
//!
//! # Overview
//! Fetches posts, comments, users, and todos over HTTP, decodes them into
//! typed records, and applies one derived query to each collection: posts by
//! title length, comments by name, users projected to contact fields, and
//! uncompleted todos.
//!
//! # Design
//! - `FetchClient` is stateless; it holds only `base_url` and a shared
//!   `reqwest::Client`.
//! - Each fetch is split into `build_get` (produces a request) and
//!   `parse_json` (consumes a response) around one network call, so the I/O
//!   boundary is explicit and both halves are testable without a server.
//! - The request logic exists once as `async fn`s. `Deferred` and the
//!   `*_with` callback methods are thin adapters over those futures.
//! - Records are defined independently from the mock-server crate;
//!   integration tests catch schema drift.

pub mod client;
pub mod collate;
pub mod completion;
pub mod error;
pub mod http;
pub mod query;
pub mod types;

pub use client::{FetchClient, DEFAULT_BASE_URL};
pub use completion::Deferred;
pub use error::FetchError;
pub use http::{HttpRequest, HttpResponse};
pub use types::{Address, Comment, Company, Geo, Post, Todo, User, UserContact};
