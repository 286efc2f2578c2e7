// src/catalog.rs
//! In-memory CV collection behind the dashboard, seeded from YAML

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::app_log;
use crate::editor::CvEditorStore;
use crate::types::{CvEditorState, CvSummary};
use crate::utils::{file_accessible, read_file_safe};

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    account: AccountSeed,
    #[serde(default)]
    cvs: Vec<CvSeed>,
}

#[derive(Debug, Default, Deserialize)]
struct AccountSeed {
    #[serde(default)]
    linked: bool,
}

#[derive(Debug, Deserialize)]
struct CvSeed {
    summary: CvSummary,
    #[serde(default)]
    state: CvEditorState,
}

#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub summary: CvSummary,
    pub store: CvEditorStore,
}

#[derive(Debug, Clone, Default)]
pub struct CvCatalog {
    linked: bool,
    entries: Vec<CatalogEntry>,
}

impl CvCatalog {
    pub fn new(linked: bool) -> Self {
        Self {
            linked,
            entries: Vec::new(),
        }
    }

    /// Load the seed file; a missing file yields an empty, unlinked catalog
    pub async fn load(path: &Path) -> Result<Self> {
        if !file_accessible(path).await {
            app_log!(
                warn,
                "Catalog seed not found at {}, starting empty",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = read_file_safe(path).await?;
        let catalog = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse catalog seed: {}", path.display()))?;

        app_log!(
            info,
            "Loaded {} CVs from {} (account linked: {})",
            catalog.entries.len(),
            path.display(),
            catalog.linked
        );
        Ok(catalog)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let seed: SeedFile = serde_yaml::from_str(content).context("Invalid catalog YAML")?;

        let mut catalog = Self::new(seed.account.linked);
        for cv in seed.cvs {
            if catalog.entry(cv.summary.id).is_some() {
                anyhow::bail!("Duplicate CV id in catalog: {}", cv.summary.id);
            }
            catalog.insert(cv.summary, cv.state);
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, summary: CvSummary, state: CvEditorState) {
        self.entries.push(CatalogEntry {
            summary,
            store: CvEditorStore::new(state),
        });
    }

    pub fn is_linked(&self) -> bool {
        self.linked
    }

    pub fn summaries(&self) -> Vec<CvSummary> {
        self.entries.iter().map(|e| e.summary.clone()).collect()
    }

    pub fn entry(&self, cv_id: i64) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.summary.id == cv_id)
    }

    pub fn store(&self, cv_id: i64) -> Option<&CvEditorStore> {
        self.entry(cv_id).map(|e| &e.store)
    }

    pub fn store_mut(&mut self, cv_id: i64) -> Option<&mut CvEditorStore> {
        self.entries
            .iter_mut()
            .find(|e| e.summary.id == cv_id)
            .map(|e| &mut e.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ExperienceId;

    const SEED: &str = r#"
account:
  linked: true
cvs:
  - summary:
      id: 1
      code: "a1b2"
      name: "Main resume"
      completed: true
      principal: true
  - summary:
      id: 2
      code: "c3d4"
      name: "Backend"
      incompleteSteps: ["education"]
    state:
      personalInfo:
        name: "Ana"
      experience:
        experience:
          - id: 10
            job: "Engineer"
            startingDate: "2020-01-01T00:00:00Z"
            onCourse: true
"#;

    #[test]
    fn test_from_yaml() {
        let catalog = CvCatalog::from_yaml(SEED).unwrap();

        assert!(catalog.is_linked());
        let names: Vec<_> = catalog.summaries().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Main resume", "Backend"]);

        let store = catalog.store(2).unwrap();
        let exp = store.find_experience(ExperienceId(10)).unwrap();
        assert_eq!(exp.job, "Engineer");
        assert!(exp.on_course);
        assert!(catalog.store(1).unwrap().experiences().is_empty());
        assert!(catalog.store(3).is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let seed = r#"
cvs:
  - summary: { id: 1, code: "a", name: "A" }
  - summary: { id: 1, code: "b", name: "B" }
"#;
        assert!(CvCatalog::from_yaml(seed).is_err());
    }

    #[tokio::test]
    async fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = CvCatalog::load(&dir.path().join("nope.yaml")).await.unwrap();
        assert!(!catalog.is_linked());
        assert!(catalog.summaries().is_empty());
    }

    #[tokio::test]
    async fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        std::fs::write(&path, SEED).unwrap();

        let catalog = CvCatalog::load(&path).await.unwrap();
        assert_eq!(catalog.summaries().len(), 2);
    }
}
