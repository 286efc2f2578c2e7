// src/types/mod.rs
pub mod cv_data;
pub mod field;
pub mod response;

pub use cv_data::{
    CvEditorState, CvSummary, Education, EducationSection, Experience, ExperienceId,
    ExperienceSection, PersonalInfo,
};
pub use field::ExperienceField;
