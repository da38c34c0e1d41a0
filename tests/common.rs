#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn hr() -> Command {
    cargo_bin_cmd!("acmehr")
}

/// Create a unique data file path inside the system temp dir and remove any
/// leftovers (data file and its operation log) from earlier runs
pub fn setup_test_data(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_acmehr.data.csv", name));
    fs::remove_file(&path).ok();
    fs::remove_file(format!("{}.log", path.display())).ok();
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_acmehr_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the data file and add one employee of each kind used by most
/// tests: a Manager (ID 1), a Salaried (ID 2) and an Hourly (ID 3)
pub fn init_data_with_employees(data_path: &str) {
    hr().args(["--data", data_path, "--test", "init"])
        .assert()
        .success();

    hr().args([
        "--data",
        data_path,
        "add",
        "Manager",
        "--name",
        "Julian",
        "--email",
        "julian@acme-machining.com",
        "--pay",
        "50001.0",
        "--department",
        "MACHINING",
    ])
    .assert()
    .success();

    hr().args([
        "--data",
        data_path,
        "add",
        "Salaried",
        "--name",
        "Bob",
        "--email",
        "bob@acme-machining.com",
        "--pay",
        "52000",
    ])
    .assert()
    .success();

    hr().args([
        "--data",
        data_path,
        "add",
        "hourly",
        "--name",
        "Randy",
        "--email",
        "randy@acme-machining.com",
        "--pay",
        "20",
    ])
    .assert()
    .success();
}
