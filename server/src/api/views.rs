//! # Response bodies
//!
//! Domain models are never serialized directly. Each handler converts what it got from the
//! database into one of these types, which decide exactly which fields leave the server.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Note, NoteSummary, User};

#[derive(Debug, Clone, Serialize)]
pub struct NoteView {
    pub id: Uuid,
    pub content: String,
    pub important: bool,
    pub date: DateTime<Utc>,
}

impl From<Note> for NoteView {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            content: note.content,
            important: note.important,
            date: note.date,
        }
    }
}

/// A note as embedded in a [`UserView`]: content and date only.
#[derive(Debug, Clone, Serialize)]
pub struct NoteSummaryView {
    pub content: String,
    pub date: DateTime<Utc>,
}

impl From<NoteSummary> for NoteSummaryView {
    fn from(note: NoteSummary) -> Self {
        Self {
            content: note.content,
            date: note.date,
        }
    }
}

/// Public view of a [`User`]. The password hash is dropped here.
#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub id: Uuid,
    pub username: String,
    pub name: Option<String>,
    pub notes: Vec<NoteSummaryView>,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            notes: user.notes.into_iter().map(NoteSummaryView::from).collect(),
        }
    }
}
