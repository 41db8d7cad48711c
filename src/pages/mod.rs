//! Pages
//!
//! Top-level page components for each route.

pub mod projects;
pub mod signup;
pub mod upload;
pub mod welcome;

pub use projects::Projects;
pub use signup::Signup;
pub use upload::UploadFlow;
pub use welcome::Welcome;
