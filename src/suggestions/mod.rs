// src/suggestions/mod.rs
pub mod overlay;
pub mod prompt;

pub use overlay::{SuggestionDialog, SuggestionOverlay};
pub use prompt::{
    base_prompt, parse_numbered_phrases, phrase_within_bounds, suggestion_prompt,
    DEFAULT_GENERATED_TEXT,
};
