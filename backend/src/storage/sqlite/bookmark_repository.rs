use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite};

use crate::domain::models::bookmark::{Bookmark, BookmarkPatch, NewBookmark};
use crate::storage::connection::DbConnection;
use crate::storage::error::StorageError;
use crate::storage::traits::{BookmarkStorage, StorageResult};

/// Repository for bookmark operations backed by SQLite
#[derive(Clone)]
pub struct BookmarkRepository {
    db: DbConnection,
}

impl BookmarkRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_bookmark(row: &SqliteRow) -> StorageResult<Bookmark> {
        let id: i64 = row.try_get("id")?;
        let rating: i64 = row.try_get("rating")?;
        let rating = u8::try_from(rating).map_err(|_| StorageError::Corrupt {
            id,
            reason: format!("rating {} does not fit the model", rating),
        })?;

        Ok(Bookmark {
            id,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            url: row.try_get("url")?,
            rating,
        })
    }
}

#[async_trait]
impl BookmarkStorage for BookmarkRepository {
    async fn list_bookmarks(&self) -> StorageResult<Vec<Bookmark>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, url, rating
            FROM bookmarks
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_bookmark).collect()
    }

    async fn get_bookmark(&self, id: i64) -> StorageResult<Option<Bookmark>> {
        let row = sqlx::query(
            r#"
            SELECT id, title, description, url, rating
            FROM bookmarks
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::row_to_bookmark).transpose()
    }

    async fn insert_bookmark(&self, bookmark: &NewBookmark) -> StorageResult<Bookmark> {
        let result = sqlx::query(
            r#"
            INSERT INTO bookmarks (title, description, url, rating)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&bookmark.title)
        .bind(&bookmark.description)
        .bind(&bookmark.url)
        .bind(i64::from(bookmark.rating))
        .execute(self.db.pool())
        .await?;

        Ok(bookmark.clone().into_bookmark(result.last_insert_rowid()))
    }

    async fn update_bookmark(&self, id: i64, patch: &BookmarkPatch) -> StorageResult<u64> {
        if patch.is_empty() {
            return Ok(self.get_bookmark(id).await?.map_or(0, |_| 1));
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE bookmarks SET ");
        let mut assignments = builder.separated(", ");
        if let Some(title) = &patch.title {
            assignments.push("title = ").push_bind_unseparated(title.clone());
        }
        if let Some(description) = &patch.description {
            assignments
                .push("description = ")
                .push_bind_unseparated(description.clone());
        }
        if let Some(url) = &patch.url {
            assignments.push("url = ").push_bind_unseparated(url.clone());
        }
        if let Some(rating) = patch.rating {
            assignments
                .push("rating = ")
                .push_bind_unseparated(i64::from(rating));
        }
        builder.push(" WHERE id = ").push_bind(id);

        let result = builder.build().execute(self.db.pool()).await?;
        Ok(result.rows_affected())
    }

    async fn delete_bookmark(&self, id: i64) -> StorageResult<u64> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected())
    }
}
