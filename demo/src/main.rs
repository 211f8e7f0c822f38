//! Runs every placeholder query in each completion form and prints counts.
//!
//! Group A uses callbacks, group B deferred values, group C plain awaits.
//! Requests inside a group run concurrently and may finish in any order; a
//! group starts only after the previous one has completed.

use anyhow::Context;
use placeholder_core::{FetchClient, DEFAULT_BASE_URL};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let base_url = std::env::var("PLACEHOLDER_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    info!(%base_url, "starting");
    let client = FetchClient::new(&base_url);

    run(&client)
        .await
        .inspect_err(|e| error!(error = %describe(e), "demo failed"))
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env("PLACEHOLDER_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}

/// Render an error with its whole context chain, outermost first.
fn describe(error: &anyhow::Error) -> String {
    format!("{error:#}")
}

async fn run(client: &FetchClient) -> anyhow::Result<()> {
    println!("=== placeholder queries ===\n");

    let posts = client.posts_by_title_length_with(|result| match result {
        Ok(posts) => {
            println!("A.i - posts by title length:");
            println!("received {} posts", posts.len());
        }
        Err(e) => error!(error = %e, "posts by title length failed"),
    });
    let comments = client.comments_by_name_with(|result| match result {
        Ok(comments) => {
            println!("A.ii - comments by name:");
            println!("received {} comments", comments.len());
        }
        Err(e) => error!(error = %e, "comments by name failed"),
    });
    posts.await.context("posts callback task")?;
    comments.await.context("comments callback task")?;

    let users = client.users_projected_deferred().map(|users| {
        println!("B.i - users with contact fields:");
        println!("received {} users", users.len());
    });
    let todos = client.todos_uncompleted_deferred().map(|todos| {
        println!("B.ii - uncompleted todos:");
        println!("received {} todos", todos.len());
    });
    users.await.context("users projected")?;
    todos.await.context("todos uncompleted")?;

    let posts = client.posts_by_title_length().await.context("posts by title length")?;
    let comments = client.comments_by_name().await.context("comments by name")?;
    let users = client.users_projected().await.context("users projected")?;
    let todos = client.todos_uncompleted().await.context("todos uncompleted")?;

    println!("\nC - awaited results:");
    println!("posts: {}, comments: {}", posts.len(), comments.len());
    println!("users: {}, todos: {}", users.len(), todos.len());

    println!("\n=== all queries complete ===");
    Ok(())
}
