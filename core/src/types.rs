//! Typed records for the placeholder API.
//!
//! # Design
//! Fields a query reads (`Post::title`, `Comment::name`, the five user
//! contact fields, `Todo::completed`) are required, so a payload missing one
//! fails at decode time with a `Parse` error instead of later at access time.
//! Everything else is optional and `None` when absent. Wire names are
//! camelCase.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: Option<u64>,
    pub id: Option<u64>,
    pub title: String,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub post_id: Option<u64>,
    pub id: Option<u64>,
    pub name: String,
    pub email: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: Option<String>,
    pub address: Option<Address>,
    pub company: Option<Company>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Option<Geo>,
}

/// Coordinates arrive as strings on the wire and are kept that way.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

/// Contact projection of a `User`: exactly these five fields, nothing else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserContact {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
}

impl From<User> for UserContact {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            username: user.username,
            email: user.email,
            phone: user.phone,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub user_id: Option<u64>,
    pub id: Option<u64>,
    pub title: Option<String>,
    pub completed: bool,
}
