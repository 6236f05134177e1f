//! File-level tests for shell reading, writing and caching.

#![allow(clippy::unwrap_used)]

use std::fs::{self, File};
use std::path::Path;
use std::time::{Duration, SystemTime};

use approx::assert_relative_eq;
use shell_io::{
    cache_path, load_shell, load_shell_with, parse_shell, save_shell, IoError, ShellIoParams,
};
use shell_types::{box_shell, drop_duplicates, ShellMesh};
use tempfile::tempdir;

fn set_mtime(path: &Path, time: SystemTime) {
    File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(time)
        .unwrap();
}

/// Box whose six faces each carry their own copy of the corner points.
fn split_box() -> ShellMesh {
    let cube = box_shell(1.0, 2.0, 0.5);
    let mut points = Vec::new();
    let mut facets = Vec::new();
    for facet in &cube.facets {
        let start = points.len() as u32;
        points.extend(facet.iter().map(|&i| cube.points[i as usize]));
        facets.push((start..start + facet.len() as u32).collect());
    }
    ShellMesh::from_parts(points, facets)
}

#[test]
fn read_after_write_equals_dedup() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("split.shl");
    let shell = split_box();

    save_shell(&shell, &path, 0.001).unwrap();
    let loaded = load_shell_with(&path, &ShellIoParams::new().use_cache(false)).unwrap();

    assert_eq!(loaded, drop_duplicates(shell).unwrap());
    assert_eq!(loaded.point_count(), 8);
    assert_relative_eq!(loaded.volume(), 1.0, epsilon = 1e-12);
}

#[test]
fn scale_survives_text_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scaled.shl");
    save_shell(&box_shell(1.0, 1.0, 1.0), &path, 25.4).unwrap();

    let parsed = parse_shell(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_relative_eq!(parsed.scale, 25.4);
}

#[test]
fn load_writes_cache() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cube.shl");
    save_shell(&box_shell(1.0, 1.0, 1.0), &path, 1.0).unwrap();

    load_shell(&path).unwrap();
    assert!(cache_path(&path, "bshl").exists());
}

#[test]
fn write_cache_can_be_disabled() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cube.shl");
    save_shell(&box_shell(1.0, 1.0, 1.0), &path, 1.0).unwrap();

    load_shell_with(&path, &ShellIoParams::new().write_cache(false)).unwrap();
    assert!(!cache_path(&path, "bshl").exists());
}

#[test]
fn fresh_cache_is_reused() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("part.shl");
    let cache = cache_path(&path, "bshl");
    let now = SystemTime::now();

    save_shell(&box_shell(1.0, 1.0, 1.0), &path, 1.0).unwrap();
    load_shell(&path).unwrap();

    // Replace the text but keep it older than the cache.
    save_shell(&box_shell(3.0, 1.0, 1.0), &path, 1.0).unwrap();
    set_mtime(&path, now - Duration::from_secs(60));
    set_mtime(&cache, now);

    let loaded = load_shell(&path).unwrap();
    assert_relative_eq!(loaded.volume(), 1.0, epsilon = 1e-12);
}

#[test]
fn stale_cache_is_regenerated() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("part.shl");
    let cache = cache_path(&path, "bshl");
    let now = SystemTime::now();

    save_shell(&box_shell(1.0, 1.0, 1.0), &path, 1.0).unwrap();
    load_shell(&path).unwrap();

    save_shell(&box_shell(3.0, 1.0, 1.0), &path, 1.0).unwrap();
    set_mtime(&cache, now - Duration::from_secs(60));
    set_mtime(&path, now);

    let loaded = load_shell(&path).unwrap();
    assert_relative_eq!(loaded.volume(), 3.0, epsilon = 1e-12);

    // The regenerated cache now holds the new geometry.
    set_mtime(&path, now - Duration::from_secs(120));
    let cached = load_shell(&path).unwrap();
    assert_relative_eq!(cached.volume(), 3.0, epsilon = 1e-12);
}

#[test]
fn disabled_cache_is_ignored() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("part.shl");
    let cache = cache_path(&path, "bshl");
    let now = SystemTime::now();

    save_shell(&box_shell(1.0, 1.0, 1.0), &path, 1.0).unwrap();
    load_shell(&path).unwrap();
    save_shell(&box_shell(2.0, 1.0, 1.0), &path, 1.0).unwrap();
    set_mtime(&path, now - Duration::from_secs(60));
    set_mtime(&cache, now);

    let loaded = load_shell_with(&path, &ShellIoParams::new().use_cache(false)).unwrap();
    assert_relative_eq!(loaded.volume(), 2.0, epsilon = 1e-12);
}

#[test]
fn corrupt_cache_falls_back_to_text() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("part.shl");
    let cache = cache_path(&path, "bshl");
    let now = SystemTime::now();

    save_shell(&box_shell(1.0, 1.0, 1.0), &path, 1.0).unwrap();
    fs::write(&cache, b"garbage").unwrap();
    set_mtime(&path, now - Duration::from_secs(60));
    set_mtime(&cache, now);

    let loaded = load_shell(&path).unwrap();
    assert_eq!(loaded.point_count(), 8);
}

#[test]
fn custom_cache_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("part.shl");
    save_shell(&box_shell(1.0, 1.0, 1.0), &path, 1.0).unwrap();

    load_shell_with(&path, &ShellIoParams::new().cache_extension("shlcache")).unwrap();
    assert!(dir.path().join("part.shlcache").exists());
}

#[test]
fn annotated_file_loads() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("annotated.shl");
    fs::write(
        &path,
        "3 1 1.000000\n\
         0.0 0.0 0.0\n\
         1.0 0.0 0.0\n\
         0.0 1.0 0.0 apex\n\
         0.0 1.0 0.0\n\
         3 1 2 3\n",
    )
    .unwrap();

    let shell = load_shell_with(&path, &ShellIoParams::new().write_cache(false)).unwrap();
    assert_eq!(shell.point_count(), 3);
    assert_eq!(shell.facets, vec![vec![0, 1, 2]]);
}

#[test]
fn garbage_file_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.shl");
    fs::write(&path, "this is not\na shell file\n").unwrap();

    let err = load_shell_with(&path, &ShellIoParams::new().write_cache(false)).unwrap_err();
    assert!(matches!(err, IoError::Unparseable { .. }));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempdir().unwrap();
    let err = load_shell(dir.path().join("absent.shl")).unwrap_err();
    assert!(matches!(err, IoError::FileNotFound { .. }));
}
