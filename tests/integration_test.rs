use std::io::Write;

use assert_cmd::Command;
use predicates as pred;
use tempfile::NamedTempFile;

#[test]
fn end_to_end_outputs_final_balances() {
    // Test User: 1000.0 + 562.0 - 100.0, the overdraw is rejected
    // User C: opened empty, never funded
    let mut file = NamedTempFile::new().expect("create temp file");
    writeln!(
        file,
        "type, owner, amount\n\
    open, Test User, 1000.0\n\
    open, User B, 100000.0\n\
    open, User C,\n\
    deposit, Test User, 562.0\n\
    withdrawal, Test User, 100.0\n\
    withdrawal, Test User, 5000\n\
    deposit, User B, -3\n\
    deposit, Nobody, 10\n\
    bogus, User B, 1\n\
    withdrawal, User B, 0.5"
    )
    .unwrap();

    let exe = env!("CARGO_BIN_EXE_bank_account");
    let mut cmd = Command::new(exe);
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(pred::str::contains("owner,balance,has_funds"))
        .stdout(pred::str::contains("Test User,1462.0,true"))
        .stdout(pred::str::contains("User B,99999.5,true"))
        .stdout(pred::str::contains("User C,0.0,false"))
        .stderr(pred::str::contains("Insufficient funds"));
}

#[test]
fn missing_argument_fails() {
    let exe = env!("CARGO_BIN_EXE_bank_account");
    Command::new(exe)
        .assert()
        .failure()
        .stderr(pred::str::contains("usage: bank_account"));
}

#[test]
fn unreadable_file_fails() {
    let exe = env!("CARGO_BIN_EXE_bank_account");
    Command::new(exe)
        .arg("/definitely/not/here.csv")
        .assert()
        .failure();
}
