//! JSON file carrying created resource ids between invocations, so a
//! `generate collection` run can pick up the spec created by the previous
//! `specs create` without retyping the id.

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedId {
    pub id: String,

    #[serde(rename = "savedAt")]
    pub saved_at: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct IdStore {
    #[serde(default)]
    ids: BTreeMap<String, SavedId>,
}

impl IdStore {
    /// A missing file is an empty store, not an error.
    pub fn load(path: &Path) -> io::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, json)
    }

    pub fn remember(&mut self, key: &str, id: &str) {
        self.ids.insert(
            key.to_string(),
            SavedId {
                id: id.to_string(),
                saved_at: chrono::Utc::now().to_rfc3339(),
            },
        );
    }

    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.ids.get(key).map(|saved| saved.id.as_str())
    }
}
