//! Pure transforms applied to fetched collections.
//!
//! None of these touch the network. `FetchClient` runs them after decoding;
//! they are public so callers holding already-fetched data can reuse them.

use crate::collate;
use crate::types::{Comment, Post, Todo, User, UserContact};

/// Longest title first. Equal lengths keep their input order.
///
/// Length counts Unicode scalar values, not bytes.
pub fn posts_by_title_length_desc(mut posts: Vec<Post>) -> Vec<Post> {
    posts.sort_by_key(|post| std::cmp::Reverse(post.title.chars().count()));
    posts
}

/// Ascending by name in collation order. Equal names keep their input order.
pub fn comments_by_name_asc(mut comments: Vec<Comment>) -> Vec<Comment> {
    comments.sort_by(|a, b| collate::compare(&a.name, &b.name));
    comments
}

pub fn users_projected(users: Vec<User>) -> Vec<UserContact> {
    users.into_iter().map(UserContact::from).collect()
}

/// Keep todos that are not completed, in their original order.
pub fn todos_uncompleted(todos: Vec<Todo>) -> Vec<Todo> {
    todos.into_iter().filter(|todo| !todo.completed).collect()
}
