//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod auth_cmd;
mod project_cmd;
mod pipeline_cmd;
mod status_cmd;
mod card_cmd;
mod backup_cmd;
mod search_cmd;
mod prefs_cmd;

pub use auth_cmd::*;
pub use project_cmd::*;
pub use pipeline_cmd::*;
pub use status_cmd::*;
pub use card_cmd::*;
pub use backup_cmd::*;
pub use search_cmd::*;
pub use prefs_cmd::*;
