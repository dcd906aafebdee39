use uuid::Uuid;

use crate::{
    db::interface::{DatabaseClient, DatabaseError},
    models::NoteSummary,
};

#[derive(Debug, Clone)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub name: Option<String>,
    pub password_hash: String,
    /// Populated by [`User::fetch_notes`]; empty until then.
    #[cfg_attr(feature = "sqlx", sqlx(skip))]
    pub notes: Vec<NoteSummary>,
}

impl User {
    /// Resolves this user's note references into summaries, in the order they were added.
    pub async fn fetch_notes(&mut self, db: &dyn DatabaseClient) -> Result<(), DatabaseError> {
        self.notes = db.get_note_summaries_by_user_id(&self.id).await?;
        Ok(())
    }
}

/// A user ready to be stored. Only ever carries the password hash.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub name: Option<String>,
    pub password_hash: String,
}
