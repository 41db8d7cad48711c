//! UI Components
//!
//! Reusable Leptos components for the app.

pub mod files_table;
pub mod header;
pub mod modal;
pub mod sidebar;
pub mod toast;

pub use files_table::FilesTable;
pub use header::{Brand, Header};
pub use modal::Modal;
pub use sidebar::{Sidebar, SidebarTab};
pub use toast::Toast;
