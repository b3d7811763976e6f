//! UI Components
//!
//! Leptos components shared by the pages.

mod branch_departments;
mod branch_users;
mod document_management;
mod document_modal;
mod document_table;
mod header;
mod page_shell;
mod pager_controls;
mod search_panel;
mod sidebar;
mod uploaded_files;

pub use branch_departments::BranchDepartmentList;
pub use branch_users::BranchUserList;
pub use document_management::DocumentManagement;
pub use document_modal::{DocumentModal, DocumentViewer};
pub use document_table::DocumentTable;
pub use header::Header;
pub use page_shell::PageShell;
pub use pager_controls::PagerControls;
pub use search_panel::SearchPanel;
pub use sidebar::Sidebar;
pub use uploaded_files::UploadedFiles;
