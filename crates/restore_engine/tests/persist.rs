use std::fs;

use restore_core::{ImageAsset, DOWNLOAD_FILENAME};
use restore_engine::{ensure_output_dir, save_download, AtomicFileWriter, PersistError};
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("out");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn download_writes_raw_bytes_under_fixed_name() {
    let temp = TempDir::new().unwrap();
    let image = ImageAsset::new(vec![0x89, b'P', b'N', b'G', 0, 1], "image/png");

    let path = save_download(temp.path(), DOWNLOAD_FILENAME, &image).unwrap();

    assert_eq!(path.file_name().unwrap(), "IMGRestore-Result.png");
    assert_eq!(fs::read(&path).unwrap(), image.bytes());
}

#[test]
fn second_download_replaces_first() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write(DOWNLOAD_FILENAME, b"first").unwrap();
    let second = writer.write(DOWNLOAD_FILENAME, b"second").unwrap();

    assert_eq!(first, second);
    assert_eq!(fs::read(&second).unwrap(), b"second");
}

#[test]
fn rejects_names_with_directories() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let err = writer.write("../escape.png", b"x").unwrap_err();
    assert!(matches!(err, PersistError::InvalidFileName(_)));
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    let result = writer.write(DOWNLOAD_FILENAME, b"data");
    assert!(result.is_err());
    assert!(!file_path.with_file_name(DOWNLOAD_FILENAME).exists());
}
