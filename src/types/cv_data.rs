// src/types/cv_data.rs
//! CV editing state tree and dashboard summaries

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::deserialize_loose_date;

// ===== Dashboard =====

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvSummary {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub principal: bool,
    #[serde(default)]
    pub incomplete_steps: Vec<String>,
}

// ===== Experience =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExperienceId(pub i64);

impl ExperienceId {
    /// Client-side id derived from the creation time in milliseconds
    pub fn from_time(now: DateTime<Utc>) -> Self {
        Self(now.timestamp_millis())
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ExperienceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: ExperienceId,
    #[serde(default)]
    pub job: String,
    #[serde(default, deserialize_with = "deserialize_loose_date")]
    pub starting_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_loose_date")]
    pub finishing_date: Option<NaiveDate>, // None with on_course means current
    #[serde(default)]
    pub on_course: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Experience {
    /// Empty entry as shown when the "add experience" form opens
    pub fn blank(id: ExperienceId) -> Self {
        Self {
            id,
            job: String::new(),
            starting_date: None,
            finishing_date: None,
            on_course: false,
            description: None,
        }
    }

    /// Append generated text, newline-separated from any existing content
    pub fn append_description(&mut self, text: &str) {
        self.description = Some(match self.description.take() {
            Some(existing) if !existing.is_empty() => format!("{}\n{}", existing, text),
            _ => text.to_string(),
        });
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceSection {
    #[serde(default)]
    pub experience: Vec<Experience>,
}

// ===== Other sections =====

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default)]
    pub name: String,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: i64,
    pub institution: String,
    pub degree: String,
    pub field: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_date")]
    pub starting_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_loose_date")]
    pub finishing_date: Option<NaiveDate>,
    #[serde(default)]
    pub on_course: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationSection {
    #[serde(default)]
    pub education: Vec<Education>,
}

/// State tree of the CV currently open in the editor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvEditorState {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub experience: ExperienceSection,
    #[serde(default)]
    pub education: EducationSection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_uses_form_field_names() {
        let json = r#"{
            "id": 1700000000000,
            "job": "Engineer",
            "startingDate": "2020-01-01T00:00:00.000Z",
            "finishingDate": "",
            "onCourse": true
        }"#;
        let exp: Experience = serde_json::from_str(json).unwrap();

        assert_eq!(exp.id, ExperienceId(1_700_000_000_000));
        assert_eq!(exp.job, "Engineer");
        assert_eq!(exp.starting_date, NaiveDate::from_ymd_opt(2020, 1, 1));
        assert_eq!(exp.finishing_date, None);
        assert!(exp.on_course);
        assert_eq!(exp.description, None);

        let value = serde_json::to_value(&exp).unwrap();
        assert_eq!(value["startingDate"], "2020-01-01");
        assert!(value.get("description").is_none());
    }

    #[test]
    fn test_summary_incomplete_steps_camel_case() {
        let json = r#"{"id": 3, "code": "abc", "name": "Main CV",
            "completed": false, "principal": true,
            "incompleteSteps": ["experience", "education"]}"#;
        let cv: CvSummary = serde_json::from_str(json).unwrap();
        assert!(cv.principal);
        assert_eq!(cv.incomplete_steps, vec!["experience", "education"]);
    }

    #[test]
    fn test_append_description() {
        let mut exp = Experience::blank(ExperienceId(1));
        exp.append_description("First phrase");
        assert_eq!(exp.description.as_deref(), Some("First phrase"));

        exp.append_description("Second phrase");
        assert_eq!(
            exp.description.as_deref(),
            Some("First phrase\nSecond phrase")
        );

        let mut empty = Experience::blank(ExperienceId(2));
        empty.description = Some(String::new());
        empty.append_description("Only");
        assert_eq!(empty.description.as_deref(), Some("Only"));
    }
}
