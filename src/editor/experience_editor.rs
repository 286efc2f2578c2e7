// src/editor/experience_editor.rs
//! Draft state for a single work-experience entry

use chrono::{DateTime, Utc};

use super::host::EditorHost;
use super::store::CvEditorStore;
use crate::app_log;
use crate::errors::{EditorError, EditorResult, REQUIRED_FIELDS_MESSAGE};
use crate::suggestions::{suggestion_prompt, SuggestionDialog, SuggestionOverlay};
use crate::types::{Experience, ExperienceField, ExperienceId};
use crate::utils::{parse_loose_date, parse_toggle};

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this experience?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    New,
    Existing(ExperienceId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Appended(ExperienceId),
    Replaced(ExperienceId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(ExperienceId),
    Declined,
}

#[derive(Debug, Clone)]
pub struct ExperienceEditor {
    mode: EditorMode,
    draft: Experience,
    prompt: String,
    overlay: SuggestionOverlay,
    loaded_revision: u64,
}

impl ExperienceEditor {
    /// Editor for a new entry, id derived from `now`
    pub fn create(now: DateTime<Utc>) -> Self {
        let draft = Experience::blank(ExperienceId::from_time(now));
        Self::with_draft(EditorMode::New, draft, 0)
    }

    /// Editor over an existing entry. The draft is copied once and never re-synced.
    pub fn edit(store: &CvEditorStore, id: ExperienceId) -> EditorResult<Self> {
        let draft = store
            .find_experience(id)
            .cloned()
            .ok_or(EditorError::ExperienceNotFound(id))?;

        Ok(Self::with_draft(
            EditorMode::Existing(id),
            draft,
            store.revision(),
        ))
    }

    fn with_draft(mode: EditorMode, draft: Experience, loaded_revision: u64) -> Self {
        let prompt = suggestion_prompt(&draft.job);
        Self {
            mode,
            draft,
            prompt,
            overlay: SuggestionOverlay::Closed,
            loaded_revision,
        }
    }

    pub fn is_new(&self) -> bool {
        self.mode == EditorMode::New
    }

    pub fn draft(&self) -> &Experience {
        &self.draft
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn overlay(&self) -> &SuggestionOverlay {
        &self.overlay
    }

    /// End date input is disabled while the position is ongoing
    pub fn end_date_enabled(&self) -> bool {
        !self.draft.on_course
    }

    pub fn can_delete(&self) -> bool {
        matches!(self.mode, EditorMode::Existing(_))
    }

    /// Set one field from its form value, leaving the rest of the draft alone
    pub fn set_field(&mut self, field: ExperienceField, value: &str) -> EditorResult<()> {
        match field {
            ExperienceField::Job => self.set_job(value),
            ExperienceField::StartingDate => {
                self.draft.starting_date = parse_date(field, value)?;
            }
            ExperienceField::FinishingDate => {
                self.draft.finishing_date = parse_date(field, value)?;
            }
            ExperienceField::OnCourse => self.set_on_course(parse_toggle(value)),
            ExperienceField::Description => self.set_description(value),
        }
        Ok(())
    }

    /// `set_field` keyed by the raw input name
    pub fn set_named_field(&mut self, name: &str, value: &str) -> EditorResult<()> {
        let field: ExperienceField = name.parse()?;
        self.set_field(field, value)
    }

    pub fn set_on_course(&mut self, on_course: bool) {
        self.draft.on_course = on_course;
    }

    /// Rich-text editor change callback
    pub fn set_description(&mut self, description: &str) {
        self.draft.description = Some(description.to_string());
    }

    fn set_job(&mut self, job: &str) {
        if self.draft.job == job {
            return;
        }
        self.draft.job = job.to_string();
        self.prompt = suggestion_prompt(&self.draft.job);
    }

    pub fn validate(&self) -> EditorResult<()> {
        validate_experience(&self.draft)
    }

    /// Merge the draft into the store, then close. Nothing is written on failure.
    pub fn save(
        &mut self,
        store: &mut CvEditorStore,
        host: &mut dyn EditorHost,
    ) -> EditorResult<SaveOutcome> {
        if let Err(e) = self.validate() {
            app_log!(debug, "Rejected experience save: {}", e);
            host.notify_error(REQUIRED_FIELDS_MESSAGE);
            return Err(e);
        }

        let outcome = match self.mode {
            EditorMode::Existing(id) => {
                if store.revision() != self.loaded_revision {
                    app_log!(
                        warn,
                        "Experience {} changed since the editor opened (revision {} -> {})",
                        id,
                        self.loaded_revision,
                        store.revision()
                    );
                }
                store.replace_experience(id, self.draft.clone())?;
                SaveOutcome::Replaced(id)
            }
            EditorMode::New => {
                let id = store.append_experience(self.draft.clone());
                self.draft.id = id;
                SaveOutcome::Appended(id)
            }
        };

        app_log!(info, "Saved experience: {:?}", outcome);
        host.close();
        Ok(outcome)
    }

    /// Remove the edited entry after the host confirms
    pub fn delete(
        &mut self,
        store: &mut CvEditorStore,
        host: &mut dyn EditorHost,
    ) -> EditorResult<DeleteOutcome> {
        let EditorMode::Existing(id) = self.mode else {
            return Err(EditorError::DeleteUnavailable);
        };

        if !host.confirm(DELETE_CONFIRMATION) {
            return Ok(DeleteOutcome::Declined);
        }

        store.remove_experience(id)?;
        app_log!(info, "Deleted experience {}", id);
        host.close();
        Ok(DeleteOutcome::Deleted(id))
    }

    /// Discard the draft
    pub fn cancel(self, host: &mut dyn EditorHost) {
        host.close();
    }

    pub fn can_open_suggestions(&self) -> bool {
        !self.overlay.is_open() && !self.draft.job.is_empty()
    }

    pub fn open_suggestions(&mut self) -> EditorResult<&SuggestionDialog> {
        if !self.can_open_suggestions() {
            return Err(EditorError::SuggestionsUnavailable);
        }

        let dialog = SuggestionDialog::new(self.prompt.clone(), self.draft.job.clone());
        self.overlay = SuggestionOverlay::Open(dialog);
        self.overlay
            .dialog()
            .ok_or(EditorError::SuggestionsUnavailable)
    }

    /// Append the picked text to the description. The overlay stays as it is.
    pub fn select_suggestion(&mut self, text: &str) {
        self.draft.append_description(text);
    }

    pub fn close_suggestions(&mut self) {
        self.overlay.close();
    }
}

/// Required fields: job title, start date, and an end date unless ongoing
pub fn validate_experience(experience: &Experience) -> EditorResult<()> {
    if experience.job.is_empty() {
        return Err(EditorError::MissingJobTitle);
    }
    if experience.starting_date.is_none() {
        return Err(EditorError::MissingStartDate);
    }
    if experience.finishing_date.is_none() && !experience.on_course {
        return Err(EditorError::MissingEndDate);
    }
    Ok(())
}

fn parse_date(
    field: ExperienceField,
    value: &str,
) -> EditorResult<Option<chrono::NaiveDate>> {
    parse_loose_date(value).map_err(|_| EditorError::InvalidDate {
        field: field.input_name(),
        value: value.to_string(),
    })
}
