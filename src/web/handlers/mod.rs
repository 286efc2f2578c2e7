pub mod dashboard_handlers;
pub mod experience_handlers;
pub mod helpers;
pub mod suggestion_handlers;
pub mod system_handlers;

pub use dashboard_handlers::*;
pub use experience_handlers::*;
pub use suggestion_handlers::*;
pub use system_handlers::*;
