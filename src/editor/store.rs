// src/editor/store.rs
//! Explicit state container for the CV being edited

use std::collections::BTreeSet;

use crate::app_log;
use crate::errors::{EditorError, EditorResult};
use crate::types::{CvEditorState, Experience, ExperienceId};

#[derive(Debug, Clone, Default)]
pub struct CvEditorStore {
    state: CvEditorState,
    revision: u64,
}

impl CvEditorStore {
    pub fn new(state: CvEditorState) -> Self {
        Self { state, revision: 0 }
    }

    pub fn state(&self) -> &CvEditorState {
        &self.state
    }

    /// Replace the whole state tree
    pub fn set_state(&mut self, state: CvEditorState) {
        self.state = state;
        self.bump();
    }

    /// Mutate the state tree in place
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(&mut CvEditorState),
    {
        f(&mut self.state);
        self.bump();
    }

    /// Incremented on every mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn experiences(&self) -> &[Experience] {
        &self.state.experience.experience
    }

    pub fn find_experience(&self, id: ExperienceId) -> Option<&Experience> {
        self.experiences().iter().find(|exp| exp.id == id)
    }

    /// Append one entry. A colliding id is moved past the current maximum,
    /// or to the smallest free non-negative id when the maximum is `i64::MAX`.
    pub fn append_experience(&mut self, mut experience: Experience) -> ExperienceId {
        if self.find_experience(experience.id).is_some() {
            let next = self.next_free_id();
            app_log!(
                debug,
                "Experience id {} already taken, using {}",
                experience.id,
                next
            );
            experience.id = next;
        }

        let id = experience.id;
        self.update(|state| state.experience.experience.push(experience));
        id
    }

    fn next_free_id(&self) -> ExperienceId {
        let max = self
            .experiences()
            .iter()
            .map(|exp| exp.id.value())
            .max()
            .unwrap_or(0);
        if let Some(next) = max.checked_add(1) {
            return ExperienceId(next);
        }

        let taken: BTreeSet<i64> = self.experiences().iter().map(|exp| exp.id.value()).collect();
        // fewer entries than non-negative ids, so the scan always ends
        let mut candidate = 0;
        while taken.contains(&candidate) {
            candidate += 1;
        }
        ExperienceId(candidate)
    }

    /// Replace the entry with the matching id, keeping its position
    pub fn replace_experience(
        &mut self,
        id: ExperienceId,
        experience: Experience,
    ) -> EditorResult<()> {
        let position = self
            .experiences()
            .iter()
            .position(|exp| exp.id == id)
            .ok_or(EditorError::ExperienceNotFound(id))?;

        self.update(|state| state.experience.experience[position] = experience);
        Ok(())
    }

    pub fn remove_experience(&mut self, id: ExperienceId) -> EditorResult<Experience> {
        let position = self
            .experiences()
            .iter()
            .position(|exp| exp.id == id)
            .ok_or(EditorError::ExperienceNotFound(id))?;

        let removed = self.state.experience.experience.remove(position);
        self.bump();
        Ok(removed)
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Education, PersonalInfo};

    fn entry(id: i64, job: &str) -> Experience {
        Experience {
            job: job.to_string(),
            ..Experience::blank(ExperienceId(id))
        }
    }

    fn store_with(entries: Vec<Experience>) -> CvEditorStore {
        let mut state = CvEditorState::default();
        state.experience.experience = entries;
        CvEditorStore::new(state)
    }

    #[test]
    fn test_append_keeps_ids_unique() {
        let mut store = store_with(vec![entry(5, "a"), entry(9, "b")]);

        let id = store.append_experience(entry(5, "c"));
        assert_eq!(id, ExperienceId(10));
        assert_eq!(store.experiences().len(), 3);
        assert_eq!(store.experiences()[2].job, "c");

        let fresh = store.append_experience(entry(42, "d"));
        assert_eq!(fresh, ExperienceId(42));
    }

    #[test]
    fn test_append_collision_at_max_id() {
        let mut store = store_with(vec![entry(i64::MAX, "a"), entry(0, "b"), entry(1, "c")]);

        let id = store.append_experience(entry(i64::MAX, "d"));
        assert_eq!(id, ExperienceId(2));
        assert_eq!(store.experiences().len(), 4);

        let again = store.append_experience(Experience::blank(ExperienceId(i64::MAX)));
        assert_eq!(again, ExperienceId(3));
        let mut ids: Vec<_> = store.experiences().iter().map(|e| e.id.value()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_replace_in_place() {
        let mut store = store_with(vec![entry(1, "a"), entry(2, "b"), entry(3, "c")]);
        store
            .replace_experience(ExperienceId(2), entry(2, "B"))
            .unwrap();

        let jobs: Vec<_> = store.experiences().iter().map(|e| e.job.as_str()).collect();
        assert_eq!(jobs, vec!["a", "B", "c"]);
    }

    #[test]
    fn test_replace_missing_leaves_state() {
        let mut store = store_with(vec![entry(1, "a")]);
        let before = store.revision();

        let err = store.replace_experience(ExperienceId(7), entry(7, "x"));
        assert_eq!(err, Err(EditorError::ExperienceNotFound(ExperienceId(7))));
        assert_eq!(store.revision(), before);
        assert_eq!(store.experiences().len(), 1);
    }

    #[test]
    fn test_remove_only_target() {
        let mut store = store_with(vec![entry(1, "a"), entry(2, "b"), entry(3, "c")]);
        let removed = store.remove_experience(ExperienceId(2)).unwrap();

        assert_eq!(removed.job, "b");
        let ids: Vec<_> = store.experiences().iter().map(|e| e.id.value()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(store.remove_experience(ExperienceId(2)).is_err());
    }

    #[test]
    fn test_set_state_replaces_tree() {
        let mut store = store_with(vec![entry(1, "a")]);
        store.set_state(CvEditorState::default());
        assert!(store.experiences().is_empty());
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_experience_update_preserves_other_sections() {
        let mut state = CvEditorState::default();
        state.personal_info = PersonalInfo {
            name: "Ana".to_string(),
            ..PersonalInfo::default()
        };
        state.education.education.push(Education {
            id: 1,
            institution: "UPM".to_string(),
            degree: "BSc".to_string(),
            field: None,
            starting_date: None,
            finishing_date: None,
            on_course: true,
        });
        let mut store = CvEditorStore::new(state.clone());

        store.append_experience(entry(1, "a"));

        assert_eq!(store.state().personal_info, state.personal_info);
        assert_eq!(store.state().education, state.education);
        assert_eq!(store.revision(), 1);
    }
}
