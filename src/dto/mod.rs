use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNoteDto {
    /// Note title
    pub title: String,
    /// Note content
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNoteDto {
    /// ID of the note to update
    pub id: Uuid,
    /// New title
    pub title: String,
    /// New content
    pub content: String,
}
