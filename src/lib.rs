pub mod catalog;
pub mod cli;
pub mod core;
pub mod dashboard;
pub mod editor;
pub mod environment;
pub mod errors;
pub mod logging;
pub mod suggestions;
pub mod types;
pub mod utils;
pub mod web;

pub use catalog::CvCatalog;
pub use dashboard::{build_dashboard, DashboardCard};
pub use editor::{CvEditorStore, EditorHost, ExperienceEditor};
pub use errors::{EditorError, EditorResult};
pub use web::start_web_server;
