//! CLI command modules
//!
//! Each subcommand loads the ledger snapshot, runs one transaction through
//! the engine, and saves the snapshot back on success.

use std::path::PathBuf;

pub mod check_owner;
pub mod listing;
pub mod seed;
pub mod show;
pub mod transfer;

/// Default location of the ledger snapshot
const DEFAULT_LEDGER_PATH: &str = ".propex/ledger.json";

/// Resolve the ledger snapshot path
///
/// Precedence: explicit `--ledger` flag, then the `PROPEX_LEDGER` environment
/// variable, then the default dot-directory path.
pub fn ledger_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os("PROPEX_LEDGER").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LEDGER_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_takes_precedence() {
        let path = ledger_path(Some(PathBuf::from("/tmp/custom.json")));
        assert_eq!(path, PathBuf::from("/tmp/custom.json"));
    }

    #[test]
    fn test_default_path() {
        // Only meaningful when PROPEX_LEDGER is unset in the test environment
        if std::env::var_os("PROPEX_LEDGER").is_none() {
            assert_eq!(ledger_path(None), PathBuf::from(DEFAULT_LEDGER_PATH));
        }
    }
}
