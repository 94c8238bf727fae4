#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary in test mode, with colors off.
pub fn cal() -> Command {
    let mut cmd = cargo_bin_cmd!("calendario");
    cmd.args(["--test", "--no-color"]);
    cmd
}

pub const SAMPLE_2026: &str = r#"{
  "year": 2026,
  "months": [
    {"id": 1, "name": "Enero", "image": "img/enero.webp", "events": [
      {"date": "2026-01-05", "title": "A", "tag": "cumple"},
      {"date": "2026-01-05", "title": "B", "tag": "feriado"}
    ]},
    {"id": 2, "name": "Febrero", "events": [
      {"date": "2026-02-20", "title": "Carnaval", "tag": "feriado"},
      {"date": "2026-02-03", "title": "Carrera 10K", "tag": "carrera"}
    ]},
    {"id": 3, "name": "Marzo", "events": []}
  ]
}"#;

/// Write a dataset into the temp dir and return its path.
pub fn write_dataset(name: &str, json: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_calendario.json", name));
    fs::write(&path, json).expect("write dataset");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}
