use std::{
    path::Path,
    process::{Command, Output},
};

use num_bigint::BigUint;
use seti_core::{MessageBuilder, ScalarSlot};
use tempfile::tempdir;

const BIN: &str = env!("CARGO_BIN_EXE_seti-cli");

fn run_in(
    dir: &Path,
    args: &[&str],
) -> Output {
    Command::new(BIN)
        .current_dir(dir)
        .args(["--no-display"])
        .args(args)
        .output()
        .unwrap()
}

/// s1 = 100, s2 = 50: сигнал шёл t/2 секунд.
fn write_small_message(dir: &Path) {
    let mut b = MessageBuilder::new();
    b.set_scalar(ScalarSlot::S1, &BigUint::from(100u32)).unwrap();
    b.set_scalar(ScalarSlot::S2, &BigUint::from(50u32)).unwrap();
    b.set_scalar(ScalarSlot::A1, &BigUint::from(300u32)).unwrap();
    b.write_file(&dir.join("SETI_message.txt"), Some(359)).unwrap();
}

#[test]
fn test_missing_file_exits_with_message() {
    let dir = tempdir().unwrap();
    let out = run_in(dir.path(), &[]);

    assert!(!out.status.success());
    assert!(out.stdout.is_empty(), "никаких результатов при ошибке");
    assert_eq!(
        String::from_utf8_lossy(&out.stderr).trim_end(),
        "Couldn't find SETI_message.txt, is it in the same directory as the script?"
    );
}

#[test]
fn test_incomplete_file_exits_with_message() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("SETI_message.txt"), "0101\n").unwrap();

    let out = run_in(dir.path(), &[]);

    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert_eq!(
        String::from_utf8_lossy(&out.stderr).trim_end(),
        "SETI_message.txt isn't complete..."
    );
}

#[test]
fn test_prints_seven_lines() {
    let dir = tempdir().unwrap();
    write_small_message(dir.path());

    let out = run_in(dir.path(), &["--quiet"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "time for signal to reach earth: 3.5043e-17 yrs");
    assert_eq!(lines[1], "alien height: 1.9892 m");
    assert_eq!(lines[2], "alien lifetime: 0 yrs");
    assert_eq!(lines[6], "age of their stellar system: 0 yrs");
}

#[test]
fn test_zero_reference_scale_fails() {
    let dir = tempdir().unwrap();
    MessageBuilder::new()
        .write_file(&dir.path().join("SETI_message.txt"), None)
        .unwrap();

    let out = run_in(dir.path(), &["--quiet"]);

    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Reference scale s1 is zero"));
}

#[test]
fn test_json_and_png_output() {
    let dir = tempdir().unwrap();
    write_small_message(dir.path());

    let out = run_in(
        dir.path(),
        &["--quiet", "--json", "--output", "montage.png", "--gap", "2"],
    );
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["scalars"]["s1"], "100");
    assert_eq!(json["scalars"]["s2"], "50");
    assert_eq!(json["quantities"].as_array().unwrap().len(), 7);

    let png = std::fs::read(dir.path().join("montage.png")).unwrap();
    assert_eq!(&png[1..4], b"PNG");
}

#[test]
fn test_strict_rejects_trailing_bits() {
    let dir = tempdir().unwrap();
    write_small_message(dir.path());

    let path = dir.path().join("SETI_message.txt");
    let mut text = std::fs::read_to_string(&path).unwrap();
    text.push_str("1\n");
    std::fs::write(&path, text).unwrap();

    let relaxed = run_in(dir.path(), &["--quiet"]);
    assert!(relaxed.status.success());

    let strict = run_in(dir.path(), &["--quiet", "--strict"]);
    assert!(!strict.status.success());
    assert!(String::from_utf8_lossy(&strict.stderr).contains("1 trailing bits"));
}

#[test]
fn test_frequency_override() {
    let dir = tempdir().unwrap();
    write_small_message(dir.path());

    // 1 ГГц: l = 0.29979 м, a1/s1 = 3
    let out = run_in(dir.path(), &["--quiet", "--frequency", "1GHz"]);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().nth(1), Some("alien height: 0.89938 m"));

    let bad = run_in(dir.path(), &["--quiet", "--frequency", "fast"]);
    assert!(!bad.status.success());
}

#[test]
fn test_gap_out_of_range_rejected() {
    let dir = tempdir().unwrap();
    write_small_message(dir.path());

    let out = run_in(dir.path(), &["--quiet", "--gap", "4000000000"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("--gap"));

    let widest = run_in(dir.path(), &["--quiet", "--gap", "256"]);
    assert!(widest.status.success());
}
