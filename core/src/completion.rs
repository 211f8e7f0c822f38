//! Deferred and callback forms of every fetch.
//!
//! # Design
//! The request logic lives once, in the `async fn`s on `FetchClient`.
//! `Deferred` runs one of those futures on its own tokio task, starting it
//! immediately rather than on first poll, and is itself a `Future` that
//! resolves to the task's `Result`. The callback form is `Deferred` plus a
//! second task that hands the result to an `FnOnce`, so the callback runs
//! exactly once with either `Ok(value)` or `Err(error)`.
//!
//! All constructors spawn, so they must be called inside a tokio runtime.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use serde::de::DeserializeOwned;
use tokio::task::JoinHandle;

use crate::client::{FetchClient, COMMENTS, POSTS, TODOS, USERS};
use crate::error::FetchError;
use crate::query;
use crate::types::{Comment, Post, Todo, User, UserContact};

/// A fetch already in flight, resolving to its result.
///
/// Dropping a `Deferred` detaches the task; it still runs to completion.
#[must_use = "a Deferred does nothing useful unless awaited, mapped, or given a callback"]
pub struct Deferred<T> {
    handle: JoinHandle<Result<T, FetchError>>,
}

impl<T: Send + 'static> Deferred<T> {
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, FetchError>> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(future),
        }
    }

    /// Chain a transform onto a successful result. Errors pass through.
    pub fn map<U, F>(self, f: F) -> Deferred<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        Deferred::spawn(async move { self.await.map(f) })
    }

    /// Hand the result to `callback` once it is ready.
    pub fn on_complete<F>(self, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<T, FetchError>) + Send + 'static,
    {
        tokio::spawn(async move { callback(self.await) })
    }
}

impl<T> Future for Deferred<T> {
    type Output = Result<T, FetchError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.handle)
            .poll(cx)
            .map(|joined| joined.unwrap_or_else(|e| Err(e.into())))
    }
}

impl FetchClient {
    pub fn fetch_json_deferred<T>(&self, path: &str) -> Deferred<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let client = self.clone();
        let path = path.to_string();
        Deferred::spawn(async move { client.fetch_json(&path).await })
    }

    pub fn fetch_json_with<T, F>(&self, path: &str, callback: F) -> JoinHandle<()>
    where
        T: DeserializeOwned + Send + 'static,
        F: FnOnce(Result<T, FetchError>) + Send + 'static,
    {
        self.fetch_json_deferred(path).on_complete(callback)
    }

    pub fn posts_by_title_length_deferred(&self) -> Deferred<Vec<Post>> {
        self.fetch_json_deferred::<Vec<Post>>(POSTS)
            .map(query::posts_by_title_length_desc)
    }

    pub fn comments_by_name_deferred(&self) -> Deferred<Vec<Comment>> {
        self.fetch_json_deferred::<Vec<Comment>>(COMMENTS)
            .map(query::comments_by_name_asc)
    }

    pub fn users_projected_deferred(&self) -> Deferred<Vec<UserContact>> {
        self.fetch_json_deferred::<Vec<User>>(USERS)
            .map(query::users_projected)
    }

    pub fn todos_uncompleted_deferred(&self) -> Deferred<Vec<Todo>> {
        self.fetch_json_deferred::<Vec<Todo>>(TODOS)
            .map(query::todos_uncompleted)
    }

    pub fn posts_by_title_length_with<F>(&self, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<Vec<Post>, FetchError>) + Send + 'static,
    {
        self.posts_by_title_length_deferred().on_complete(callback)
    }

    pub fn comments_by_name_with<F>(&self, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<Vec<Comment>, FetchError>) + Send + 'static,
    {
        self.comments_by_name_deferred().on_complete(callback)
    }

    pub fn users_projected_with<F>(&self, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<Vec<UserContact>, FetchError>) + Send + 'static,
    {
        self.users_projected_deferred().on_complete(callback)
    }

    pub fn todos_uncompleted_with<F>(&self, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<Vec<Todo>, FetchError>) + Send + 'static,
    {
        self.todos_uncompleted_deferred().on_complete(callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn explode() -> Result<u32, FetchError> {
        panic!("boom")
    }

    #[tokio::test]
    async fn deferred_resolves_with_value() {
        let value = Deferred::spawn(async { Ok(41_u32) }).map(|n| n + 1).await;
        assert_eq!(value, Ok(42));
    }

    #[tokio::test]
    async fn map_passes_errors_through() {
        let err = Deferred::<u32>::spawn(async { Err(FetchError::Parse("bad".to_string())) })
            .map(|n| n * 2)
            .await
            .unwrap_err();
        assert_eq!(err, FetchError::Parse("bad".to_string()));
    }

    #[tokio::test]
    async fn panicking_task_surfaces_as_task_failed() {
        let err = Deferred::spawn(explode()).await.unwrap_err();
        assert!(matches!(err, FetchError::TaskFailed(_)));
    }

    #[tokio::test]
    async fn callback_receives_result_once() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        Deferred::spawn(async { Ok("done") })
            .on_complete(move |result| tx.send(result).unwrap())
            .await
            .unwrap();
        assert_eq!(rx.recv().await, Some(Ok("done")));
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn callback_runs_even_when_task_panics() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        Deferred::spawn(explode())
            .on_complete(move |result| tx.send(result.is_err()).unwrap())
            .await
            .unwrap();
        assert_eq!(rx.recv().await, Some(true));
    }
}
