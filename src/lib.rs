//! Client-side data layer for a notes application.
//!
//! Three pieces, consumed by a UI layer that lives elsewhere:
//!
//! - [`models`] / [`dto`]: the `Note` entity and its create/update input shapes
//! - [`validation`]: a synchronous schema giving field-level feedback on input
//! - [`repository`] + [`service`]: an in-memory store behind a mock API that
//!   simulates network latency on every call
//!
//! The store is constructed explicitly and handed to the API, so tests and
//! composition roots control its lifetime:
//!
//! ```
//! use std::{sync::Arc, time::Duration};
//!
//! use notes_client::{
//!     dto::CreateNoteDto, repository::NoteStore, service::NotesApi,
//!     validation::NoteSchema,
//! };
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let dto = CreateNoteDto {
//!     title: "Groceries".to_string(),
//!     content: "Milk, eggs, coffee beans".to_string(),
//! };
//! NoteSchema::new().validate(&dto).unwrap();
//!
//! let store = Arc::new(tokio::sync::Mutex::new(NoteStore::new()));
//! let api = NotesApi::with_latency(store, Duration::ZERO);
//!
//! let note = api.create_note(dto).await;
//! assert_eq!(api.get_all_notes().await, vec![note]);
//! # }
//! ```

pub mod dto;
pub mod models;
pub mod repository;
pub mod service;
pub mod validation;
