use chrono::{DateTime, SubsecRound, Utc};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Note {
    pub id: Uuid,
    pub content: String,
    pub important: bool,
    pub date: DateTime<Utc>,
}

/// Reduced view of a [`Note`] used when resolving a user's notes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct NoteSummary {
    pub content: String,
    pub date: DateTime<Utc>,
}

/// A validated note ready to be stored.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub content: String,
    pub important: bool,
    pub date: DateTime<Utc>,
    /// User whose note list the new note is appended to, if any.
    pub user_id: Option<Uuid>,
}

impl NewNote {
    /// Creates a note stamped with the current time, at millisecond precision.
    #[must_use]
    pub fn new(content: String, important: bool) -> Self {
        Self {
            content,
            important,
            date: Utc::now().trunc_subsecs(3),
            user_id: None,
        }
    }

    #[must_use]
    pub fn with_user_id(mut self, user_id: Uuid) -> Self {
        self.user_id = Some(user_id);
        self
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteUpdate {
    pub content: Option<String>,
    pub important: Option<bool>,
}

impl NoteUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn with_important(mut self, important: bool) -> Self {
        self.important = Some(important);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.important.is_none()
    }
}
