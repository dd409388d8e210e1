//! Repository for the `book_contents` table.

use sqlx::PgPool;

use crate::models::book_content::{BookContent, CreateBookContent};

/// Column list for book_contents queries.
const COLUMNS: &str = "id, title, author, content, created_at";

/// Provides lookup and insert for full-text book content.
pub struct BookContentRepo;

impl BookContentRepo {
    /// All rows matching the exact title and author, ordered by id.
    /// A mismatch yields an empty list, not an error.
    pub async fn find_by_title_and_author(
        pool: &PgPool,
        title: &str,
        author: &str,
    ) -> Result<Vec<BookContent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM book_contents WHERE title = $1 AND author = $2 ORDER BY id"
        );
        sqlx::query_as::<_, BookContent>(&query)
            .bind(title)
            .bind(author)
            .fetch_all(pool)
            .await
    }

    /// Insert new book content, returning the stored row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBookContent,
    ) -> Result<BookContent, sqlx::Error> {
        let query = format!(
            "INSERT INTO book_contents (title, author, content)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BookContent>(&query)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }
}
