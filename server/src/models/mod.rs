use uuid::Uuid;

mod note;
mod user;

pub use note::{NewNote, Note, NoteSummary, NoteUpdate};
pub use user::{NewUser, User};

/// Helper function to generate a new UUID.
/// This allows us to easily switch out the UUID version if needed.
pub fn new_uuid() -> Uuid {
    Uuid::new_v4()
}
