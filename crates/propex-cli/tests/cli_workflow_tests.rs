//! CLI workflow integration tests
//!
//! These tests drive the full two-phase transfer through the compiled binary
//! and verify the persisted ledger snapshot between invocations.

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

use propex_core::ledger::LedgerGateway;
use propex_core_types::{MemberId, TitleId};
use propex_ledger::snapshot;

fn ledger_file(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("ledger.json")
}

fn run_cli(ledger: &Path, args: &[&str]) -> std::process::Output {
    let cli_bin = env!("CARGO_BIN_EXE_propex");
    let mut full_args = args.to_vec();
    let ledger_flag = ledger.to_str().unwrap();
    full_args.extend(["--ledger", ledger_flag]);

    Command::new(cli_bin)
        .args(full_args)
        .output()
        .expect("Failed to execute CLI")
}

#[test]
fn test_cli_two_phase_transfer() {
    let temp_dir = TempDir::new().unwrap();
    let ledger_path = ledger_file(&temp_dir);

    // Seed
    let output = run_cli(&ledger_path, &["seed"]);
    assert!(
        output.status.success(),
        "seed should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    // Transfer before listing is rejected with the submitter-facing reason
    let output = run_cli(&ledger_path, &["transfer", "dp_00001", "member2"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Property not for transfer."),
        "Expected rejection reason, got: {}",
        stderr
    );

    // List, then transfer
    let output = run_cli(&ledger_path, &["list-for-transfer", "dp_00001"]);
    assert!(output.status.success());

    let output = run_cli(&ledger_path, &["transfer", "dp_00001", "member2"]);
    assert!(
        output.status.success(),
        "transfer should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    // The persisted snapshot reflects the transfer and carries one event
    let ledger = snapshot::load_ledger(&ledger_path).unwrap();
    let property = ledger.get_property(&TitleId::new("dp_00001")).unwrap();
    assert_eq!(property.owner, Some(MemberId::new("member2")));
    assert!(property.for_transfer);
    assert_eq!(ledger.events().len(), 1);
}

#[test]
fn test_cli_rejects_unknown_participant() {
    let temp_dir = TempDir::new().unwrap();
    let ledger_path = ledger_file(&temp_dir);

    assert!(run_cli(&ledger_path, &["seed"]).status.success());
    assert!(run_cli(&ledger_path, &["list-for-transfer", "dp_00001"])
        .status
        .success());

    let output = run_cli(&ledger_path, &["transfer", "dp_00001", "unknown_member"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid participant. Use a predefined participant."));

    // Owner unchanged in the persisted snapshot
    let ledger = snapshot::load_ledger(&ledger_path).unwrap();
    let property = ledger.get_property(&TitleId::new("dp_00001")).unwrap();
    assert_eq!(property.owner, Some(MemberId::new("member1")));
}

#[test]
fn test_cli_check_owner() {
    let temp_dir = TempDir::new().unwrap();
    let ledger_path = ledger_file(&temp_dir);

    assert!(run_cli(&ledger_path, &["seed"]).status.success());

    let output = run_cli(&ledger_path, &["check-owner", "dp_00001", "member1"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("dp_00001 is owned by member1"));

    let output = run_cli(&ledger_path, &["check-owner", "dp_00001", "member2"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("dp_00001 is not owned by member2"));
}

#[test]
fn test_cli_seed_refuses_overwrite_without_force() {
    let temp_dir = TempDir::new().unwrap();
    let ledger_path = ledger_file(&temp_dir);

    assert!(run_cli(&ledger_path, &["seed"]).status.success());

    let output = run_cli(&ledger_path, &["seed"]);
    assert!(!output.status.success());

    let output = run_cli(&ledger_path, &["seed", "--force"]);
    assert!(output.status.success());
}
