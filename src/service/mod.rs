use std::{sync::Arc, time::Duration};

use thiserror::Error;
use uuid::Uuid;

use crate::{
    dto::{CreateNoteDto, UpdateNoteDto},
    models::Note,
    repository::NoteStore,
};

/// Simulated round-trip latency applied to every operation.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NotesApiError {
    #[error("Note not found")]
    NotFound,
}

/// In-process stand-in for a remote notes service.
///
/// Each operation sleeps for the configured latency before touching the
/// store. Calls issued concurrently overlap in their delays, but their
/// effects serialize on the store lock; completion order follows whichever
/// delay elapses first and is not a contract callers may rely on.
#[derive(Clone)]
pub struct NotesApi {
    store: Arc<tokio::sync::Mutex<NoteStore>>,
    latency: Duration,
}

impl NotesApi {
    pub fn new(store: Arc<tokio::sync::Mutex<NoteStore>>) -> Self {
        Self::with_latency(store, DEFAULT_LATENCY)
    }

    pub const fn with_latency(
        store: Arc<tokio::sync::Mutex<NoteStore>>,
        latency: Duration,
    ) -> Self {
        Self { store, latency }
    }

    pub async fn get_all_notes(&self) -> Vec<Note> {
        tokio::time::sleep(self.latency).await;
        self.store.lock().await.list()
    }

    pub async fn create_note(&self, dto: CreateNoteDto) -> Note {
        tokio::time::sleep(self.latency).await;

        let note = self.store.lock().await.create(dto);
        tracing::debug!("created note {}", note.id);
        note
    }

    pub async fn update_note(&self, dto: UpdateNoteDto) -> Result<Note, NotesApiError> {
        tokio::time::sleep(self.latency).await;

        match self.store.lock().await.update(&dto) {
            Some(note) => {
                tracing::debug!("updated note {}", note.id);
                Ok(note)
            }
            None => {
                tracing::warn!("update requested for missing note {}", dto.id);
                Err(NotesApiError::NotFound)
            }
        }
    }

    /// Deleting a missing id is silently ignored, unlike [`Self::update_note`];
    /// the remote service being mocked behaves the same way.
    pub async fn delete_note(&self, id: Uuid) {
        tokio::time::sleep(self.latency).await;

        if self.store.lock().await.remove(id) {
            tracing::debug!("deleted note {id}");
        } else {
            tracing::debug!("delete requested for missing note {id}, ignoring");
        }
    }
}
