use async_trait::async_trait;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::error::StorageError;
use crate::model::Post;

type Result<T> = std::result::Result<T, StorageError>;

/// Capability interface over the post store: everything the persisted
/// variant ever asks of its backing table.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All stored posts in identifier order.
    async fn find_all(&self) -> Result<Vec<Post>>;

    /// Persist a post, assigning an identifier when the caller supplied
    /// none, and return the stored record.
    async fn save(&self, post: Post) -> Result<Post>;
}

/// `PostStore` over an embedded SQLite database.
#[derive(Clone, Debug)]
pub struct SqlitePostStore {
    pool: SqlitePool,
}

impl SqlitePostStore {
    pub async fn connect(url: &str) -> Result<Self> {
        // A single connection keeps `sqlite::memory:` databases alive;
        // separate pool connections would each see an empty database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(url)
            .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS posts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                author TEXT NOT NULL
            )",
        )
        .execute(&pool)
        .await?;

        tracing::info!("post store ready");

        Ok(Self { pool })
    }
}

#[async_trait]
impl PostStore for SqlitePostStore {
    async fn find_all(&self) -> Result<Vec<Post>> {
        let posts =
            sqlx::query_as::<_, Post>("SELECT id, title, content, author FROM posts ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(posts)
    }

    async fn save(&self, post: Post) -> Result<Post> {
        let id = match post.id {
            Some(id) => {
                sqlx::query(
                    "INSERT INTO posts (id, title, content, author)
                     VALUES (?1, ?2, ?3, ?4)
                     ON CONFLICT(id) DO UPDATE SET
                         title = excluded.title,
                         content = excluded.content,
                         author = excluded.author",
                )
                .bind(id)
                .bind(&post.title)
                .bind(&post.content)
                .bind(&post.author)
                .execute(&self.pool)
                .await?;

                id
            }
            None => {
                let result =
                    sqlx::query("INSERT INTO posts (title, content, author) VALUES (?1, ?2, ?3)")
                        .bind(&post.title)
                        .bind(&post.content)
                        .bind(&post.author)
                        .execute(&self.pool)
                        .await?;

                result.last_insert_rowid()
            }
        };

        Ok(Post {
            id: Some(id),
            ..post
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> SqlitePostStore {
        SqlitePostStore::connect("sqlite::memory:").await.unwrap()
    }

    #[tokio::test]
    async fn save_assigns_identifier_when_absent() {
        let store = store().await;

        let saved = store
            .save(Post {
                id: None,
                title: "New Post".to_owned(),
                content: "Hello".to_owned(),
                author: "Me".to_owned(),
            })
            .await
            .unwrap();

        assert_eq!(saved.id, Some(1));
        assert_eq!(saved.title, "New Post");
    }

    #[tokio::test]
    async fn save_with_existing_identifier_updates_in_place() {
        let store = store().await;

        store.save(Post::new(7, "Draft", "v1", "Me")).await.unwrap();
        store.save(Post::new(7, "Draft", "v2", "Me")).await.unwrap();

        let posts = store.find_all().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].content, "v2");
    }

    #[tokio::test]
    async fn find_all_returns_identifier_order() {
        let store = store().await;

        store.save(Post::new(3, "c", "c", "c")).await.unwrap();
        store.save(Post::new(1, "a", "a", "a")).await.unwrap();
        store.save(Post::new(2, "b", "b", "b")).await.unwrap();

        let ids: Vec<_> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
    }
}
