//! State Management
//!
//! Global application state and localStorage persistence.

pub mod global;
pub mod storage;

pub use global::{
    provide_global_state, validate_project_name, GlobalState, Project, SourceKind, UploadRecord,
};
