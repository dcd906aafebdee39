use std::{path::Path, pin::Pin};

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteSynchronous},
};
use tracing::debug;
use uuid::Uuid;

use crate::{
    db::interface::{DatabaseClient, DatabaseError},
    models::{NewNote, NewUser, Note, NoteSummary, NoteUpdate, User},
};

#[cfg(test)]
mod tests;

#[derive(Debug, thiserror::Error)]
pub enum CreateSqliteClientError {
    #[error("failed to migrate database to current version: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

#[derive(Debug, Clone)]
pub struct SqliteClient {
    pool: SqlitePool,
}

impl SqliteClient {
    /// Opens or creates the database at the given path.
    pub async fn open(path: &Path) -> Result<Self, CreateSqliteClientError> {
        Ok(Self {
            pool: Self::do_open(
                SqliteConnectOptions::new()
                    .create_if_missing(true)
                    .filename(path),
            )
            .await?,
        })
    }

    /// Creates a client that uses a new in-memory database.
    pub async fn new_memory() -> Result<Self, CreateSqliteClientError> {
        // sqlx has some special handling for the in-memory database which only
        // happens when parsing from a URL string
        let options: SqliteConnectOptions = "sqlite://:memory:".parse()?;
        Ok(Self {
            pool: Self::do_open(options).await?,
        })
    }

    async fn do_open(
        base_options: SqliteConnectOptions,
    ) -> Result<SqlitePool, CreateSqliteClientError> {
        let options = base_options
            .synchronous(SqliteSynchronous::Normal)
            .optimize_on_close(true, None)
            .pragma("foreign_keys", "ON");
        let pool = SqlitePool::connect_with(options).await?;

        sqlx::migrate!("src/db/clients/sqlite/migrations")
            .run(&pool)
            .await?;

        Ok(pool)
    }
}

impl DatabaseClient for SqliteClient {
    fn get_notes(&self) -> Pin<Box<dyn Future<Output = Result<Vec<Note>, DatabaseError>> + Send>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let notes: Vec<Note> =
                sqlx::query_as("SELECT id, content, important, date FROM notes ORDER BY rowid")
                    .fetch_all(&pool)
                    .await?;
            Ok(notes)
        })
    }

    fn get_note_by_id<'id>(
        &self,
        id: &'id Uuid,
    ) -> Pin<Box<dyn Future<Output = Result<Note, DatabaseError>> + Send + 'id>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let note: Note =
                sqlx::query_as("SELECT id, content, important, date FROM notes WHERE id = $1")
                    .bind(id)
                    .fetch_one(&pool)
                    .await?;
            Ok(note)
        })
    }

    fn create_note<'note>(
        &self,
        id: &'note Uuid,
        note: &'note NewNote,
    ) -> Pin<Box<dyn Future<Output = Result<Note, DatabaseError>> + Send + 'note>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let mut tx = pool.begin().await?;
            let created: Note = sqlx::query_as(
                "INSERT INTO notes (id, content, important, date)
                VALUES ($1, $2, $3, $4)
                RETURNING id, content, important, date",
            )
            .bind(id)
            .bind(&note.content)
            .bind(note.important)
            .bind(note.date)
            .fetch_one(&mut *tx)
            .await?;

            if let Some(user_id) = &note.user_id {
                sqlx::query("INSERT INTO user_notes (user_id, note_id) VALUES ($1, $2)")
                    .bind(user_id)
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;
            }

            // dropping the transaction on any early return above rolls back the insert
            tx.commit().await?;
            Ok(created)
        })
    }

    fn update_note<'arg>(
        &self,
        id: &'arg Uuid,
        update: &'arg NoteUpdate,
    ) -> Pin<Box<dyn Future<Output = Result<Note, DatabaseError>> + Send + 'arg>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            if update.is_empty() {
                return Err(DatabaseError::EmptyUpdate);
            }

            let mut query_parts = Vec::new();
            if update.content.is_some() {
                query_parts.push("content = ?");
            }
            if update.important.is_some() {
                query_parts.push("important = ?");
            }

            let query = format!(
                "UPDATE notes SET {} WHERE id = ? RETURNING id, content, important, date",
                query_parts.join(", ")
            );

            let mut sql_query = sqlx::query_as::<_, Note>(&query);

            // Bind parameters in order
            if let Some(content) = &update.content {
                sql_query = sql_query.bind(content);
            }
            if let Some(important) = update.important {
                sql_query = sql_query.bind(important);
            }
            sql_query = sql_query.bind(id);

            let note = sql_query.fetch_one(&pool).await?;
            Ok(note)
        })
    }

    fn delete_note_by_id<'id>(
        &self,
        id: &'id Uuid,
    ) -> Pin<Box<dyn Future<Output = Result<(), DatabaseError>> + Send + 'id>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let result = sqlx::query("DELETE FROM notes WHERE id = $1")
                .bind(id)
                .execute(&pool)
                .await?;
            if result.rows_affected() == 0 {
                debug!(%id, "delete requested for absent note");
            }
            Ok(())
        })
    }

    fn create_user<'user>(
        &self,
        id: &'user Uuid,
        user: &'user NewUser,
    ) -> Pin<Box<dyn Future<Output = Result<User, DatabaseError>> + Send + 'user>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let user: User = sqlx::query_as(
                "INSERT INTO users (id, username, name, password_hash)
                VALUES ($1, $2, $3, $4)
                RETURNING id, username, name, password_hash",
            )
            .bind(id)
            .bind(&user.username)
            .bind(&user.name)
            .bind(&user.password_hash)
            .fetch_one(&pool)
            .await?;
            Ok(user)
        })
    }

    fn get_users(&self) -> Pin<Box<dyn Future<Output = Result<Vec<User>, DatabaseError>> + Send>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let users: Vec<User> = sqlx::query_as(
                "SELECT id, username, name, password_hash FROM users ORDER BY rowid",
            )
            .fetch_all(&pool)
            .await?;
            Ok(users)
        })
    }

    fn get_user_by_id<'id>(
        &self,
        id: &'id Uuid,
    ) -> Pin<Box<dyn Future<Output = Result<User, DatabaseError>> + Send + 'id>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let user: User = sqlx::query_as(
                "SELECT id, username, name, password_hash FROM users WHERE id = $1",
            )
            .bind(id)
            .fetch_one(&pool)
            .await?;
            Ok(user)
        })
    }

    fn get_note_summaries_by_user_id<'id>(
        &self,
        user_id: &'id Uuid,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<NoteSummary>, DatabaseError>> + Send + 'id>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let notes: Vec<NoteSummary> = sqlx::query_as(
                "SELECT n.content, n.date
                 FROM notes n
                 INNER JOIN user_notes un
                 ON n.id = un.note_id
                 WHERE un.user_id = $1
                 ORDER BY un.rowid",
            )
            .bind(user_id)
            .fetch_all(&pool)
            .await?;
            Ok(notes)
        })
    }
}
