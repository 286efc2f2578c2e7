// src/editor/mod.rs
//! CV editing: the shared store and the experience editor working on it

pub mod experience_editor;
pub mod host;
pub mod store;

pub use experience_editor::{
    validate_experience, DeleteOutcome, EditorMode, ExperienceEditor, SaveOutcome,
    DELETE_CONFIRMATION,
};
pub use host::{EditorHost, RecordingHost};
pub use store::CvEditorStore;
