use std::path::PathBuf;
use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

fn path_as_str(path: &Path) -> &str {
    path.to_str().expect("path should be valid utf-8")
}

#[test]
fn vips_exports_only_the_vip_block() {
    let dir = tempdir().expect("tempdir");
    let output = dir.path().join("vips.csv");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fg2csv"));
    cmd.arg("vips")
        .arg(fixture("fixtures/fgfw.cfg"))
        .arg("--output")
        .arg(path_as_str(&output))
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote 2 records"));

    let table = fs::read_to_string(&output).expect("output file");
    assert_eq!(
        table.lines().next(),
        Some("name;extip;extintf;portforward;mappedip;extport;mappedport")
    );
    assert!(table.contains("VIP-WEB;203.0.113.10;wan1;enable;10.0.0.80;443;8443"));
    // Sparse columns for the record without port forwarding.
    assert!(table.contains("VIP-MAIL;203.0.113.25;wan1;;10.0.0.25;;"));
    // Address objects belong to the other converter.
    assert!(!table.contains("SRV1"));
}

#[test]
fn vips_ignores_address_only_configs() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("fw.cfg");
    let output = dir.path().join("vips.csv");

    fs::write(
        &input,
        "config firewall address\n\
         edit \"SRV1\"\n\
         set subnet 10.0.0.1 255.255.255.0\n\
         next\n\
         end\n",
    )
    .expect("write input");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fg2csv"));
    cmd.arg("vips")
        .arg(path_as_str(&input))
        .arg("--output")
        .arg(path_as_str(&output))
        .assert()
        .success()
        .stdout(predicate::str::contains("not written"));

    assert!(!output.exists());
}

#[test]
fn vips_requires_an_input_path() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fg2csv"));
    cmd.arg("vips").assert().failure();
}
