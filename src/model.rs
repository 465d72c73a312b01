use serde::{Deserialize, Serialize};

pub const DEFAULT_CONTENT: &str = "Default content";

fn default_content() -> String {
    DEFAULT_CONTENT.to_owned()
}

/// A blog article, both the wire shape and the stored row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    /// Absent on create requests until the store assigns one.
    pub id: Option<i64>,
    pub title: String,
    #[serde(default = "default_content")]
    pub content: String,
    pub author: String,
}

impl Post {
    pub fn new(id: i64, title: &str, content: &str, author: &str) -> Self {
        Self {
            id: Some(id),
            title: title.to_owned(),
            content: content.to_owned(),
            author: author.to_owned(),
        }
    }
}
