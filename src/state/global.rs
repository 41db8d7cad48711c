//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use crate::state::storage;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Projects created this session (not persisted)
    pub projects: RwSignal<Vec<Project>>,
    /// Upload records, mirrored to browser storage
    pub uploads: RwSignal<Vec<UploadRecord>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// An in-memory grouping of uploaded content under a name
#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub files: Vec<UploadRecord>,
}

impl Project {
    /// Create a project with the current timestamp as its id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: chrono::Utc::now().timestamp_millis(),
            name: name.into(),
            files: Vec::new(),
        }
    }

    /// First two characters of the name, uppercased, for the card badge
    pub fn initials(&self) -> String {
        self.name.chars().take(2).collect::<String>().to_uppercase()
    }
}

/// One stored entry representing ingested content and its transcript
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UploadRecord {
    pub name: String,
    pub date: String,
    pub time: String,
    pub transcript: String,
}

impl UploadRecord {
    /// Build a record stamped with the current local date and time
    pub fn now(name: &str, transcript: &str) -> Self {
        Self::at(name, transcript, chrono::Local::now())
    }

    fn at(name: &str, transcript: &str, when: chrono::DateTime<chrono::Local>) -> Self {
        Self {
            name: if name.is_empty() {
                "Untitled Upload".to_string()
            } else {
                name.to_string()
            },
            date: when.format("%d %b %y").to_string(),
            time: when.format("%H:%M").to_string(),
            transcript: transcript.to_string(),
        }
    }
}

/// Which source card opened the upload dialog
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SourceKind {
    Rss,
    Youtube,
    File,
}

impl SourceKind {
    /// Heading shown on the source card
    pub fn card_title(&self) -> &'static str {
        match self {
            SourceKind::Rss => "RSS Feed",
            SourceKind::Youtube => "Youtube Video",
            SourceKind::File => "Upload Files",
        }
    }

    /// Title of the upload dialog
    pub fn dialog_title(&self) -> &'static str {
        match self {
            SourceKind::Rss => "Upload from RSS Feed",
            SourceKind::Youtube => "Upload from Youtube",
            SourceKind::File => "Upload Files",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SourceKind::Rss => "📡",
            SourceKind::Youtube => "▶️",
            SourceKind::File => "⬆️",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            SourceKind::Rss => "text-orange-500",
            SourceKind::Youtube => "text-red-600",
            SourceKind::File => "text-purple-500",
        }
    }
}

/// Trim a prospective project name, rejecting empty or whitespace-only input
pub fn validate_project_name(name: &str) -> Option<&str> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let (records, load_error) = match storage::load_records() {
        Ok(records) => (records, None),
        Err(e) => (Vec::new(), Some(e)),
    };

    let state = GlobalState {
        projects: create_rw_signal(Vec::new()),
        uploads: create_rw_signal(records),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    if let Some(e) = load_error {
        state.show_error(&e);
    }

    provide_context(state);
}

impl GlobalState {
    /// Append a project created from an already-validated name
    pub fn create_project(&self, name: &str) -> Project {
        let project = Project::new(name);
        self.projects.update(|projects| projects.push(project.clone()));
        project
    }

    /// Look up a project by its id
    pub fn project_by_id(&self, id: i64) -> Option<Project> {
        self.projects.get().into_iter().find(|p| p.id == id)
    }

    /// Append an upload record
    pub fn add_upload(&self, record: UploadRecord) {
        self.uploads.update(|uploads| uploads.push(record));
    }

    /// Remove exactly the record at `index`
    pub fn delete_upload(&self, index: usize) {
        self.uploads.update(|uploads| {
            if index < uploads.len() {
                uploads.remove(index);
            }
        });
    }

    /// Replace the transcript of the record at `index`
    pub fn set_transcript(&self, index: usize, transcript: String) {
        self.uploads.update(|uploads| {
            if let Some(record) = uploads.get_mut(index) {
                record.transcript = transcript;
            }
        });
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_project_initials() {
        assert_eq!(Project::new("ep recap").initials(), "EP");
        assert_eq!(Project::new("x").initials(), "X");
        assert_eq!(Project::new("").initials(), "");
    }

    #[test]
    fn test_upload_record_name_fallback() {
        let when = chrono::Local.with_ymd_and_hms(2026, 8, 29, 14, 5, 0).unwrap();
        let record = UploadRecord::at("", "hello", when);
        assert_eq!(record.name, "Untitled Upload");
        assert_eq!(record.transcript, "hello");
    }

    #[test]
    fn test_upload_record_timestamp_format() {
        let when = chrono::Local.with_ymd_and_hms(2026, 8, 29, 9, 7, 0).unwrap();
        let record = UploadRecord::at("Episode 1", "", when);
        assert_eq!(record.date, "29 Aug 26");
        assert_eq!(record.time, "09:07");
    }

    #[test]
    fn test_validate_project_name() {
        assert_eq!(validate_project_name("My Show"), Some("My Show"));
        assert_eq!(validate_project_name("  My Show  "), Some("My Show"));
        assert_eq!(validate_project_name(""), None);
        assert_eq!(validate_project_name("   "), None);
    }

    #[test]
    fn test_create_project_appends_validated_name() {
        let runtime = create_runtime();

        let state = GlobalState {
            projects: create_rw_signal(Vec::new()),
            uploads: create_rw_signal(Vec::new()),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
        };

        let name = validate_project_name(" My Show ").unwrap();
        let created = state.create_project(name);

        let projects = state.projects.get_untracked();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "My Show");
        assert!(projects[0].files.is_empty());
        assert_eq!(projects[0].id, created.id);

        runtime.dispose();
    }

    #[test]
    fn test_delete_upload_removes_exact_index() {
        let runtime = create_runtime();

        let state = GlobalState {
            projects: create_rw_signal(Vec::new()),
            uploads: create_rw_signal(vec![
                UploadRecord::now("a", ""),
                UploadRecord::now("b", ""),
                UploadRecord::now("c", ""),
            ]),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
        };

        state.delete_upload(1);
        let names: Vec<String> = state.uploads.get_untracked().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["a", "c"]);

        // Out-of-range index is a no-op
        state.delete_upload(10);
        assert_eq!(state.uploads.get_untracked().len(), 2);

        runtime.dispose();
    }

    #[test]
    fn test_set_transcript_touches_one_record() {
        let runtime = create_runtime();

        let state = GlobalState {
            projects: create_rw_signal(Vec::new()),
            uploads: create_rw_signal(vec![
                UploadRecord::now("a", "one"),
                UploadRecord::now("b", "two"),
            ]),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
        };

        state.set_transcript(1, "edited".to_string());
        let uploads = state.uploads.get_untracked();
        assert_eq!(uploads[0].transcript, "one");
        assert_eq!(uploads[1].transcript, "edited");

        runtime.dispose();
    }
}
