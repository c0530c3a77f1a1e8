//! Integration tests for the `create-upload-zip` binary.

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn run_packer(root: &Path) -> Output {
    let bin = env!("CARGO_BIN_EXE_create-upload-zip");
    Command::new(bin)
        .current_dir(root)
        .env_remove("UPLOAD_ZIP_ROOT")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run create-upload-zip binary")
}

fn write(root: &Path, relative: &str, content: &[u8]) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn project_tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "rope-optimus-simulator/scripts/validate-ssot.py", b"#!/usr/bin/env python3\n");
    write(root, "rope-optimus-simulator/src/App.jsx", b"export default function App() {}\n");
    write(root, "assets/logo.bin", &[0, 159, 146, 150, 255]);
    write(root, "build/output.log", b"log");
    write(root, "node_modules/react/index.js", b"module.exports = {};");
    write(root, ".git/HEAD", b"ref: refs/heads/main");
    write(root, "assets/.DS_Store", b"junk");
    dir
}

fn archives(root: &Path) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = fs::read_dir(root.join("upload"))
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "zip"))
        .collect();
    found.sort();
    found
}

fn entries(archive: &Path) -> Vec<(String, Vec<u8>)> {
    let mut zip = zip::ZipArchive::new(File::open(archive).unwrap()).unwrap();
    let mut out = Vec::new();
    for i in 0..zip.len() {
        let mut file = zip.by_index(i).unwrap();
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).unwrap();
        out.push((file.name().to_string(), bytes));
    }
    out.sort();
    out
}

#[test]
fn archives_included_files_byte_for_byte() {
    let tree = project_tree();
    let output = run_packer(tree.path());
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let written = archives(tree.path());
    assert_eq!(written.len(), 1);
    let name = written[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("rope-optimus-simulator_"));
    assert_eq!(name.len(), "rope-optimus-simulator_YYYYMMDD_HHMMSS.zip".len());

    let stored = entries(&written[0]);
    let names: Vec<&str> = stored.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "assets/logo.bin",
            "rope-optimus-simulator/scripts/validate-ssot.py",
            "rope-optimus-simulator/src/App.jsx",
        ]
    );
    for (name, bytes) in &stored {
        assert_eq!(bytes, &fs::read(tree.path().join(name)).unwrap(), "{name} differs");
    }
}

#[test]
fn prints_summary() {
    let tree = project_tree();
    let output = run_packer(tree.path());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("Creating upload folder..."));
    assert!(stdout.contains("Collecting files..."));
    assert!(stdout.contains("Done!"));
    assert!(stdout.contains("File count: 3"));
    assert!(stdout.contains("Size: "));
    assert!(stdout.contains("  - Extensions: .log, .tmp, .zip"));
}

#[test]
fn repeated_runs_store_identical_entries() {
    let tree = project_tree();
    assert!(run_packer(tree.path()).status.success());
    // Archive names have one-second resolution.
    std::thread::sleep(std::time::Duration::from_millis(1100));
    let second = run_packer(tree.path());
    assert!(second.status.success());
    assert!(!String::from_utf8_lossy(&second.stdout).contains("Creating upload folder"));

    let written = archives(tree.path());
    assert_eq!(written.len(), 2);
    assert_ne!(written[0], written[1]);
    assert_eq!(entries(&written[0]), entries(&written[1]));
}

#[test]
fn root_override_is_honoured() {
    let tree = project_tree();
    let elsewhere = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_create-upload-zip"))
        .current_dir(elsewhere.path())
        .env("UPLOAD_ZIP_ROOT", tree.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(archives(tree.path()).len(), 1);
    assert!(!elsewhere.path().join("upload").exists());
}

#[test]
fn unusable_root_fails() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("plain-file");
    fs::write(&file, "").unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_create-upload-zip"))
        .env("UPLOAD_ZIP_ROOT", &file)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to create output directory"));
}
