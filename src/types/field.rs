// src/types/field.rs
use std::str::FromStr;

use crate::errors::EditorError;

/// Editable draft field, keyed by the form input name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceField {
    Job,
    StartingDate,
    FinishingDate,
    OnCourse,
    Description,
}

impl ExperienceField {
    pub fn input_name(self) -> &'static str {
        match self {
            Self::Job => "job",
            Self::StartingDate => "startingDate",
            Self::FinishingDate => "finishingDate",
            Self::OnCourse => "onCourse",
            Self::Description => "description",
        }
    }
}

impl FromStr for ExperienceField {
    type Err = EditorError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "job" => Ok(Self::Job),
            "startingDate" => Ok(Self::StartingDate),
            "finishingDate" => Ok(Self::FinishingDate),
            "onCourse" => Ok(Self::OnCourse),
            "description" => Ok(Self::Description),
            other => Err(EditorError::UnknownField(other.to_string())),
        }
    }
}
