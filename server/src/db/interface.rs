use std::{borrow::Cow, future::Future, pin::Pin};

use uuid::Uuid;

use crate::models::{NewNote, NewUser, Note, NoteSummary, NoteUpdate, User};

pub trait DatabaseClient: Send + Sync + 'static {
    // Note repository

    /// Returns every note, in insertion order.
    fn get_notes(&self) -> Pin<Box<dyn Future<Output = Result<Vec<Note>, DatabaseError>> + Send>>;

    fn get_note_by_id<'id>(
        &self,
        id: &'id Uuid,
    ) -> Pin<Box<dyn Future<Output = Result<Note, DatabaseError>> + Send + 'id>>;

    /// Stores a note and, if [`NewNote::user_id`] is set, appends it to that user's notes.
    ///
    /// Fails with [`DatabaseError::ForeignKeyViolation`] without storing anything if the user
    /// does not exist.
    fn create_note<'note>(
        &self,
        id: &'note Uuid,
        note: &'note NewNote,
    ) -> Pin<Box<dyn Future<Output = Result<Note, DatabaseError>> + Send + 'note>>;

    fn update_note<'arg>(
        &self,
        id: &'arg Uuid,
        update: &'arg NoteUpdate,
    ) -> Pin<Box<dyn Future<Output = Result<Note, DatabaseError>> + Send + 'arg>>;

    /// Deletes a note. Deleting a note which does not exist is not an error.
    fn delete_note_by_id<'id>(
        &self,
        id: &'id Uuid,
    ) -> Pin<Box<dyn Future<Output = Result<(), DatabaseError>> + Send + 'id>>;

    // User repository

    fn create_user<'user>(
        &self,
        id: &'user Uuid,
        user: &'user NewUser,
    ) -> Pin<Box<dyn Future<Output = Result<User, DatabaseError>> + Send + 'user>>;

    /// Returns every user, in insertion order, with [`User::notes`] left unpopulated.
    fn get_users(&self) -> Pin<Box<dyn Future<Output = Result<Vec<User>, DatabaseError>> + Send>>;

    fn get_user_by_id<'id>(
        &self,
        id: &'id Uuid,
    ) -> Pin<Box<dyn Future<Output = Result<User, DatabaseError>> + Send + 'id>>;

    fn get_note_summaries_by_user_id<'id>(
        &self,
        user_id: &'id Uuid,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<NoteSummary>, DatabaseError>> + Send + 'id>>;
}

/// Error type for database operations
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("row/resource not found")]
    NotFound,

    #[error(
        "uniqueness violation {}{}",
        if field.is_some() { "on field " } else { "(field unknown)" },
        field.as_deref().unwrap_or("")
    )]
    UniquenessViolation {
        /// The field that caused the uniqueness violation, if known
        field: Option<Cow<'static, str>>,
    },

    #[error("referenced row/resource does not exist")]
    ForeignKeyViolation,

    #[error("the update request contains no changes")]
    EmptyUpdate,

    #[error("database error: {0}")]
    Other(Box<dyn std::error::Error + Send + Sync + 'static>),
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => Self::NotFound,
            sqlx::Error::Database(e) if e.is_unique_violation() => {
                Self::UniquenessViolation { field: None }
            }
            sqlx::Error::Database(e) if e.is_foreign_key_violation() => Self::ForeignKeyViolation,
            other => Self::Other(Box::new(other)),
        }
    }
}
