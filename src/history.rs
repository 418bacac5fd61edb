use std::io::ErrorKind;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Identifiers of tips that have already been published, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShownHistory {
    ids: Vec<String>,
}

impl ShownHistory {
    /// A missing file is an empty history.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no history file, starting empty");
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read history {}", path.display()))
            }
        };

        let history: Self = serde_json::from_str(&raw)
            .with_context(|| format!("history {} is not a JSON list of ids", path.display()))?;
        debug!(count = history.len(), "history loaded");
        Ok(history)
    }

    /// Overwrites the whole file.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write history {}", path.display()))?;
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|shown| shown == id)
    }

    /// Returns false if the id was already present.
    pub fn record(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ShownHistory {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut history = Self::default();
        for id in iter {
            let id = id.into();
            history.record(&id);
        }
        history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let history = ShownHistory::load(&dir.path().join("shown.json")).unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn saves_and_reloads_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("shown.json");
        let history: ShownHistory = ["T3", "T1"].into_iter().collect();
        history.save(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let ids: Vec<String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(ids, vec!["T3", "T1"]);
        assert_eq!(ShownHistory::load(&path).unwrap(), history);
    }

    #[test]
    fn record_ignores_duplicates() {
        let mut history = ShownHistory::default();
        assert!(history.record("T1"));
        assert!(!history.record("T1"));
        assert_eq!(history.len(), 1);
        assert!(history.contains("T1"));
        assert!(!history.contains("T2"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shown.json");
        std::fs::write(&path, "{\"ids\": 3}").unwrap();
        let err = ShownHistory::load(&path).unwrap_err();
        assert!(err.to_string().contains("not a JSON list"));
    }
}
