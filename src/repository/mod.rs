use chrono::Utc;
use uuid::Uuid;

use crate::{
    dto::{CreateNoteDto, UpdateNoteDto},
    models::Note,
};

/// Exclusive owner of the in-memory note collection, kept in insertion
/// order. Callers only ever receive clones of stored notes, so nothing
/// outside this type can mutate the collection.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    pub const fn new() -> Self {
        Self { notes: Vec::new() }
    }

    pub fn create(&mut self, dto: CreateNoteDto) -> Note {
        let now = Utc::now();
        let note = Note {
            id: Uuid::new_v4(),
            title: dto.title,
            content: dto.content,
            created_at: now,
            updated_at: now,
        };

        self.notes.push(note.clone());
        note
    }

    pub fn update(&mut self, dto: &UpdateNoteDto) -> Option<Note> {
        let note = self.notes.iter_mut().find(|note| note.id == dto.id)?;

        note.title = dto.title.clone();
        note.content = dto.content.clone();
        note.updated_at = Utc::now();

        Some(note.clone())
    }

    pub fn remove(&mut self, id: Uuid) -> bool {
        match self.notes.iter().position(|note| note.id == id) {
            Some(index) => {
                self.notes.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn list(&self) -> Vec<Note> {
        self.notes.clone()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_dto(title: &str, content: &str) -> CreateNoteDto {
        CreateNoteDto {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn create_assigns_id_and_equal_timestamps() {
        let mut store = NoteStore::new();
        let note = store.create(create_dto("Groceries", "Milk, eggs, coffee"));

        assert!(!note.id.is_nil());
        assert_eq!(note.created_at, note.updated_at);
        assert_eq!(store.list(), vec![note]);
    }

    #[test]
    fn create_assigns_distinct_ids() {
        let mut store = NoteStore::new();
        let first = store.create(create_dto("First", "First body"));
        let second = store.create(create_dto("Second", "Second body"));

        assert_ne!(first.id, second.id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn update_preserves_id_and_created_at() {
        let mut store = NoteStore::new();
        let original = store.create(create_dto("Draft", "First attempt"));

        let updated = store
            .update(&UpdateNoteDto {
                id: original.id,
                title: "Final".to_string(),
                content: "Second attempt".to_string(),
            })
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.title, "Final");
        assert_eq!(updated.content, "Second attempt");
        assert!(updated.updated_at >= original.created_at);
        assert_eq!(store.list(), vec![updated]);
    }

    #[test]
    fn update_misses_unknown_id() {
        let mut store = NoteStore::new();
        store.create(create_dto("Keep", "Unchanged body"));
        let snapshot = store.list();

        let result = store.update(&UpdateNoteDto {
            id: Uuid::new_v4(),
            title: "New".to_string(),
            content: "New body".to_string(),
        });

        assert!(result.is_none());
        assert_eq!(store.list(), snapshot);
    }

    #[test]
    fn remove_takes_out_exactly_one() {
        let mut store = NoteStore::new();
        let first = store.create(create_dto("First", "First body"));
        let second = store.create(create_dto("Second", "Second body"));
        let third = store.create(create_dto("Third", "Third body"));

        assert!(store.remove(second.id));
        assert_eq!(store.list(), vec![first, third]);
    }

    #[test]
    fn remove_reports_miss_and_leaves_store_alone() {
        let mut store = NoteStore::new();
        store.create(create_dto("Only", "Only body"));

        assert!(!store.remove(Uuid::new_v4()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn listed_notes_are_independent_clones() {
        let mut store = NoteStore::new();
        store.create(create_dto("Original", "Original body"));

        let mut listed = store.list();
        listed[0].title = "Tampered".to_string();

        assert_eq!(store.list()[0].title, "Original");
    }
}
