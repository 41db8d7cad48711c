//! Upload Record Storage
//!
//! Mirrors upload records to a single browser localStorage key as a JSON
//! array of `{name, date, time, transcript}` objects.

use crate::state::global::UploadRecord;

/// The localStorage key holding the serialized upload records
pub const STORAGE_KEY: &str = "uploadedFiles";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Read all records from storage.
///
/// A missing key or unavailable storage yields an empty list; only malformed
/// JSON is an error.
pub fn load_records() -> Result<Vec<UploadRecord>, String> {
    let Some(storage) = local_storage() else {
        return Ok(Vec::new());
    };

    match storage.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => parse_records(&raw),
        _ => Ok(Vec::new()),
    }
}

/// Write the full record list back to storage
pub fn save_records(records: &[UploadRecord]) -> Result<(), String> {
    let Some(storage) = local_storage() else {
        return Ok(());
    };

    let raw = serialize_records(records)?;
    storage
        .set_item(STORAGE_KEY, &raw)
        .map_err(|_| "Browser storage rejected the write".to_string())
}

/// Decode a stored JSON array of records
pub fn parse_records(raw: &str) -> Result<Vec<UploadRecord>, String> {
    serde_json::from_str(raw).map_err(|e| format!("Stored uploads are corrupted: {}", e))
}

/// Encode records as the stored JSON array
pub fn serialize_records(records: &[UploadRecord]) -> Result<String, String> {
    serde_json::to_string(records).map_err(|e| format!("Failed to serialize uploads: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_records_shape() {
        let raw = r#"[{"name":"Episode 1","date":"29 Aug 26","time":"14:05","transcript":"hello"}]"#;
        let records = parse_records(raw).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Episode 1");
        assert_eq!(records[0].date, "29 Aug 26");
        assert_eq!(records[0].time, "14:05");
        assert_eq!(records[0].transcript, "hello");
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_records("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(parse_records("not json").is_err());
        assert!(parse_records(r#"{"name":"no array"}"#).is_err());
    }

    #[test]
    fn test_serialized_fields_match_storage_format() {
        let record = UploadRecord {
            name: "Episode 1".to_string(),
            date: "29 Aug 26".to_string(),
            time: "14:05".to_string(),
            transcript: String::new(),
        };
        let raw = serialize_records(&[record]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["name"], "Episode 1");
        assert_eq!(value[0]["date"], "29 Aug 26");
        assert_eq!(value[0]["time"], "14:05");
        assert_eq!(value[0]["transcript"], "");
    }
}
