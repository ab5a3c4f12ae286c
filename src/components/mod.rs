//! UI Components
//!
//! Reusable Leptos components.

mod login_form;
mod dashboard;
mod project_selector;
mod pipeline_list;
mod kanban_board;
mod status_column;
mod card_item;
mod card_modal;
mod create_pipeline_modal;
mod pipeline_settings_modal;
mod backup_manager;
mod card_search;
mod color_picker;
mod change_password_modal;
mod delete_confirm_button;

pub use login_form::LoginForm;
pub use dashboard::Dashboard;
pub use project_selector::ProjectSelector;
pub use pipeline_list::PipelineList;
pub use kanban_board::KanbanBoard;
pub use status_column::StatusColumn;
pub use card_item::CardItem;
pub use card_modal::{CardModal, CardModalMode};
pub use create_pipeline_modal::CreatePipelineModal;
pub use pipeline_settings_modal::PipelineSettingsModal;
pub use backup_manager::BackupManager;
pub use card_search::CardSearch;
pub use color_picker::{ColorPicker, COLOR_PALETTE};
pub use change_password_modal::ChangePasswordModal;
pub use delete_confirm_button::DeleteConfirmButton;
