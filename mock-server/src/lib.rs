use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::debug;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub post_id: u64,
    pub id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

/// The four collections the server hands out, unchanged, on every request.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Fixtures {
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
    pub users: Vec<User>,
    pub todos: Vec<Todo>,
}

impl Fixtures {
    /// A small sample shaped like the public jsonplaceholder data.
    pub fn sample() -> Self {
        let post = |id, title: &str| Post {
            user_id: 1,
            id,
            title: title.to_string(),
            body: format!("body of post {id}"),
        };
        let comment = |id, name: &str| Comment {
            post_id: 1,
            id,
            name: name.to_string(),
            email: format!("commenter{id}@example.com"),
            body: format!("body of comment {id}"),
        };
        let todo = |id, title: &str, completed| Todo {
            user_id: 1,
            id,
            title: title.to_string(),
            completed,
        };
        Self {
            posts: vec![
                post(1, "sunt aut facere repellat provident"),
                post(2, "qui est esse"),
                post(3, "ea molestias quasi exercitationem repellat qui ipsa sit aut"),
                post(4, "eum et est occaecati"),
            ],
            comments: vec![
                comment(1, "id labore ex et quam laborum"),
                comment(2, "quo vero reiciendis velit similique earum"),
                comment(3, "Alias odio sit"),
                comment(4, "alias odio sit"),
                comment(5, "odio adipisci rerum aut animi"),
            ],
            users: vec![
                user(1, "Leanne Graham", "Bret", "Sincere@april.biz", "1-770-736-8031 x56442"),
                user(2, "Ervin Howell", "Antonette", "Shanna@melissa.tv", "010-692-6593 x09125"),
                user(3, "Clementine Bauch", "Samantha", "Nathan@yesenia.net", "1-463-123-4447"),
            ],
            todos: vec![
                todo(1, "delectus aut autem", false),
                todo(2, "quis ut nam facilis et officia qui", false),
                todo(3, "fugiat veniam minus", true),
                todo(4, "et porro tempora", true),
                todo(5, "laboriosam mollitia et enim quasi adipisci", false),
            ],
        }
    }
}

fn user(id: u64, name: &str, username: &str, email: &str, phone: &str) -> User {
    User {
        id,
        name: name.to_string(),
        username: username.to_string(),
        email: email.to_string(),
        address: Address {
            street: "Kulas Light".to_string(),
            suite: format!("Apt. {id}"),
            city: "Gwenborough".to_string(),
            zipcode: "92998-3874".to_string(),
            geo: Geo {
                lat: "-37.3159".to_string(),
                lng: "81.1496".to_string(),
            },
        },
        phone: phone.to_string(),
        website: format!("{}.org", username.to_lowercase()),
        company: Company {
            name: "Romaguera-Crona".to_string(),
            catch_phrase: "Multi-layered client-server neural-net".to_string(),
            bs: "harness real-time e-markets".to_string(),
        },
    }
}

pub type Db = Arc<Fixtures>;

pub fn app() -> Router {
    app_with(Fixtures::sample())
}

pub fn app_with(fixtures: Fixtures) -> Router {
    let db: Db = Arc::new(fixtures);
    Router::new()
        .route("/posts", get(list_posts))
        .route("/comments", get(list_comments))
        .route("/users", get(list_users))
        .route("/todos", get(list_todos))
        .with_state(db)
}

/// Router whose resource routes all answer 200 with a body that is not JSON.
pub fn malformed_app() -> Router {
    Router::new()
        .route("/posts", get(malformed))
        .route("/comments", get(malformed))
        .route("/users", get(malformed))
        .route("/todos", get(malformed))
}

/// Router whose resource routes all answer 200 with bytes that are not UTF-8.
pub fn non_utf8_app() -> Router {
    Router::new()
        .route("/posts", get(non_utf8))
        .route("/comments", get(non_utf8))
        .route("/users", get(non_utf8))
        .route("/todos", get(non_utf8))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_app(listener, app()).await
}

pub async fn run_app(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    debug!(count = db.posts.len(), "serving posts");
    Json(db.posts.clone())
}

async fn list_comments(State(db): State<Db>) -> Json<Vec<Comment>> {
    debug!(count = db.comments.len(), "serving comments");
    Json(db.comments.clone())
}

async fn list_users(State(db): State<Db>) -> Json<Vec<User>> {
    debug!(count = db.users.len(), "serving users");
    Json(db.users.clone())
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    debug!(count = db.todos.len(), "serving todos");
    Json(db.todos.clone())
}

async fn malformed() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html")],
        "<html><body>not json</body></html>",
    )
}

async fn non_utf8() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        vec![0xff_u8, 0xfe, b'['],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_serializes_camel_case() {
        let post = Post {
            user_id: 1,
            id: 2,
            title: "Test".to_string(),
            body: "b".to_string(),
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["userId"], 1);
        assert_eq!(json["title"], "Test");
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn company_serializes_catch_phrase_camel_case() {
        let user = user(1, "n", "Bret", "e", "p");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["company"]["catchPhrase"], "Multi-layered client-server neural-net");
        assert_eq!(json["address"]["geo"]["lat"], "-37.3159");
        assert_eq!(json["website"], "bret.org");
    }

    #[test]
    fn sample_has_both_todo_states() {
        let fixtures = Fixtures::sample();
        assert!(fixtures.todos.iter().any(|t| t.completed));
        assert!(fixtures.todos.iter().any(|t| !t.completed));
    }

    #[test]
    fn default_fixtures_are_empty() {
        let fixtures = Fixtures::default();
        assert!(fixtures.posts.is_empty());
        assert!(fixtures.users.is_empty());
    }
}
