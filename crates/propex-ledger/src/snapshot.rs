//! Ledger snapshot persistence
//!
//! Serializes the whole in-memory ledger (both registries plus the event
//! outbox) to a JSON file so the CLI keeps state between invocations. This is
//! collaborator-side plumbing; the workflow core never sees it.

use std::fs;
use std::path::Path;

use propex_core::errors::{PropexError, Result};

use crate::memory::MemoryLedger;

/// Load a ledger snapshot from the given path
///
/// # Errors
///
/// Returns `Persistence` if the file cannot be read or does not contain a
/// valid snapshot.
pub fn load_ledger(path: &Path) -> Result<MemoryLedger> {
    let bytes = fs::read(path).map_err(|e| PropexError::Persistence {
        op: "load_ledger".to_string(),
        reason: format!("{}: {}", path.display(), e),
    })?;

    serde_json::from_slice(&bytes).map_err(|e| PropexError::Persistence {
        op: "load_ledger".to_string(),
        reason: format!("{}: {}", path.display(), e),
    })
}

/// Save a ledger snapshot to the given path, creating parent directories
///
/// # Errors
///
/// Returns `Persistence` if the snapshot cannot be serialized or written.
pub fn save_ledger(ledger: &MemoryLedger, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| PropexError::Persistence {
            op: "save_ledger".to_string(),
            reason: format!("{}: {}", parent.display(), e),
        })?;
    }

    let bytes = serde_json::to_vec_pretty(ledger).map_err(|e| PropexError::Persistence {
        op: "save_ledger".to_string(),
        reason: e.to_string(),
    })?;

    fs::write(path, bytes).map_err(|e| PropexError::Persistence {
        op: "save_ledger".to_string(),
        reason: format!("{}: {}", path.display(), e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_demo;
    use propex_core::ledger::LedgerGateway;
    use propex_core_types::{MemberId, TitleId};

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("ledger.json");

        let mut ledger = MemoryLedger::new();
        seed_demo(&mut ledger).unwrap();
        save_ledger(&ledger, &path).unwrap();

        let loaded = load_ledger(&path).unwrap();
        assert_eq!(loaded.list_members().len(), 3);
        let property = loaded.get_property(&TitleId::new("dp_00001")).unwrap();
        assert_eq!(property.owner, Some(MemberId::new("member1")));
    }

    #[test]
    fn test_load_missing_file_is_persistence_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_ledger(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(PropexError::Persistence { .. })));
    }

    #[test]
    fn test_load_corrupt_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        std::fs::write(&path, b"not json").unwrap();

        let result = load_ledger(&path);
        assert!(matches!(result, Err(PropexError::Persistence { .. })));
    }
}
