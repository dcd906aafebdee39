use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{
    api::{
        ApiState,
        error::ApiError,
        extractors::{ResourceId, parse_id},
        views::NoteView,
    },
    db::interface::DatabaseError,
    models::{NewNote, NoteUpdate, new_uuid},
};

const CONTENT_MISSING: &str = "content missing";
const UNKNOWN_USER: &str = "unknown userId";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    pub content: Option<String>,
    pub important: Option<bool>,
    pub user_id: Option<String>,
}

pub async fn list_notes(State(state): State<ApiState>) -> Result<Json<Vec<NoteView>>, ApiError> {
    let notes = state.db.get_notes().await?;
    Ok(Json(notes.into_iter().map(NoteView::from).collect()))
}

pub async fn get_note(
    ResourceId(id): ResourceId,
    State(state): State<ApiState>,
) -> Result<Json<NoteView>, ApiError> {
    let note = state.db.get_note_by_id(&id).await?;
    Ok(Json(note.into()))
}

pub async fn create_note(
    State(state): State<ApiState>,
    request: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Result<Json<NoteView>, ApiError> {
    let Json(request) = request?;
    let content = match request.content {
        Some(content) if !content.is_empty() => content,
        _ => return Err(ApiError::Validation(CONTENT_MISSING)),
    };

    let mut note = NewNote::new(content, request.important.unwrap_or(false));
    if let Some(user_id) = request.user_id {
        note = note.with_user_id(parse_id(&user_id)?);
    }

    match state.db.create_note(&new_uuid(), &note).await {
        Ok(created) => Ok(Json(created.into())),
        Err(DatabaseError::ForeignKeyViolation) => Err(ApiError::Validation(UNKNOWN_USER)),
        Err(e) => Err(e.into()),
    }
}

pub async fn update_note(
    ResourceId(id): ResourceId,
    State(state): State<ApiState>,
    update: Result<Json<NoteUpdate>, JsonRejection>,
) -> Result<Json<NoteView>, ApiError> {
    let Json(update) = update?;
    if update.content.as_deref().is_some_and(str::is_empty) {
        return Err(ApiError::Validation(CONTENT_MISSING));
    }

    let note = if update.is_empty() {
        state.db.get_note_by_id(&id).await?
    } else {
        state.db.update_note(&id, &update).await?
    };
    Ok(Json(note.into()))
}

pub async fn delete_note(
    ResourceId(id): ResourceId,
    State(state): State<ApiState>,
) -> Result<StatusCode, ApiError> {
    state.db.delete_note_by_id(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
