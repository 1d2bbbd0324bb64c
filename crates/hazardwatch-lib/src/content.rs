//! Emergency safety messages, loaded once and queried in memory.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Conventional file name for the emergency messages content file.
pub const EMERGENCY_MESSAGES_FILE: &str = "emergency_messages.json";

/// One piece of static safety guidance for a disaster type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyMessage {
    /// Disaster this message applies to, e.g. "Earthquake".
    pub disaster: String,
    /// The guidance text shown to users.
    pub message: String,
}

/// In-memory store of emergency messages.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    messages: Vec<EmergencyMessage>,
}

impl ContentStore {
    /// Load messages from a JSON array file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let messages = serde_json::from_str(&raw).map_err(|source| Error::MalformedContent {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { messages })
    }

    /// Build a store from already-loaded messages (used by tests).
    pub fn from_messages(messages: Vec<EmergencyMessage>) -> Self {
        Self { messages }
    }

    /// Messages for one disaster (case-insensitive), or all of them.
    pub fn messages(&self, disaster: Option<&str>) -> Vec<&EmergencyMessage> {
        match disaster {
            None => self.messages.iter().collect(),
            Some(filter) => self
                .messages
                .iter()
                .filter(|m| m.disaster.eq_ignore_ascii_case(filter))
                .collect(),
        }
    }

    /// Number of loaded messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the store holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn store() -> ContentStore {
        ContentStore::from_messages(vec![
            EmergencyMessage {
                disaster: "Earthquake".to_string(),
                message: "Drop, cover, and hold on.".to_string(),
            },
            EmergencyMessage {
                disaster: "Flood".to_string(),
                message: "Move to higher ground.".to_string(),
            },
            EmergencyMessage {
                disaster: "earthquake".to_string(),
                message: "Stay away from windows.".to_string(),
            },
        ])
    }

    #[test]
    fn no_filter_returns_everything() {
        assert_eq!(store().messages(None).len(), 3);
    }

    #[test]
    fn disaster_filter_is_case_insensitive() {
        let store = store();
        let quakes = store.messages(Some("EARTHQUAKE"));
        assert_eq!(quakes.len(), 2);
        assert!(quakes.iter().all(|m| m.disaster.eq_ignore_ascii_case("earthquake")));
    }

    #[test]
    fn unknown_disaster_yields_empty() {
        assert!(store().messages(Some("volcano")).is_empty());
    }

    #[test]
    fn load_reads_a_json_array_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"disaster": "Cyclone", "message": "Secure loose objects."}}]"#
        )
        .unwrap();

        let store = ContentStore::load(file.path()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.messages(Some("cyclone")).len(), 1);
    }

    #[test]
    fn load_reports_missing_and_malformed_files() {
        let err = ContentStore::load(Path::new("/nonexistent/messages.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        let err = ContentStore::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::MalformedContent { .. }));
    }
}
