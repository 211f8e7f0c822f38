use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, malformed_app, non_utf8_app, Comment, Fixtures, Post, Todo, User};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- collections ---

#[tokio::test]
async fn posts_returns_sample() {
    let resp = app().oneshot(get("/posts")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let posts: Vec<Post> = body_json(resp).await;
    assert_eq!(posts.len(), Fixtures::sample().posts.len());
    assert_eq!(posts[0].title, "sunt aut facere repellat provident");
}

#[tokio::test]
async fn comments_returns_sample() {
    let resp = app().oneshot(get("/comments")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let comments: Vec<Comment> = body_json(resp).await;
    assert_eq!(comments.len(), 5);
}

#[tokio::test]
async fn users_include_nested_records() {
    let resp = app().oneshot(get("/users")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let users: Vec<serde_json::Value> = body_json(resp).await;
    assert_eq!(users.len(), 3);
    assert_eq!(users[0]["username"], "Bret");
    assert!(users[0]["address"]["geo"].is_object());
    assert!(users[0]["company"]["catchPhrase"].is_string());
}

#[tokio::test]
async fn todos_keep_fixture_order() {
    let resp = app().oneshot(get("/todos")).await.unwrap();

    let todos: Vec<Todo> = body_json(resp).await;
    let ids: Vec<u64> = todos.iter().map(|t| t.id).collect();
    assert_eq!(ids, [1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn responses_are_json() {
    let resp = app().oneshot(get("/todos")).await.unwrap();

    let content_type = resp.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert_eq!(content_type, "application/json");
}

// --- custom fixtures ---

#[tokio::test]
async fn app_with_serves_given_fixtures() {
    let fixtures = Fixtures {
        users: Vec::<User>::new(),
        todos: vec![Todo {
            user_id: 9,
            id: 42,
            title: "only one".to_string(),
            completed: true,
        }],
        ..Fixtures::default()
    };
    let router = app_with(fixtures);

    let todos: Vec<Todo> = body_json(router.clone().oneshot(get("/todos")).await.unwrap()).await;
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, 42);

    let posts: Vec<Post> = body_json(router.oneshot(get("/posts")).await.unwrap()).await;
    assert!(posts.is_empty());
}

// --- error surfaces ---

#[tokio::test]
async fn unknown_route_returns_404() {
    let resp = app().oneshot(get("/albums")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn post_method_not_allowed() {
    let req = Request::builder()
        .method("POST")
        .uri("/posts")
        .body(String::new())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn malformed_app_returns_non_json_body() {
    for uri in ["/posts", "/comments", "/users", "/todos"] {
        let resp = malformed_app().oneshot(get(uri)).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        let bytes = body_bytes(resp).await;
        assert!(serde_json::from_slice::<serde_json::Value>(&bytes).is_err(), "{uri}");
    }
}

#[tokio::test]
async fn non_utf8_app_returns_invalid_utf8_body() {
    for uri in ["/posts", "/comments", "/users", "/todos"] {
        let resp = non_utf8_app().oneshot(get(uri)).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        let bytes = body_bytes(resp).await;
        assert!(std::str::from_utf8(&bytes).is_err(), "{uri}");
    }
}
