use std::fs::{self, File};

use restore_core::MAX_UPLOAD_BYTES;
use restore_engine::{load_image_file, LoadError};
use tempfile::TempDir;

#[test]
fn loads_bytes_and_guesses_media_type() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("grandma.jpg");
    fs::write(&path, [0xFF, 0xD8, 0xFF]).unwrap();

    let asset = load_image_file(&path).unwrap();

    assert_eq!(asset.media_type(), "image/jpeg");
    assert_eq!(asset.bytes(), &[0xFF, 0xD8, 0xFF]);
}

#[test]
fn rejects_non_image_files() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("notes.txt");
    fs::write(&path, "hello").unwrap();

    let err = load_image_file(&path).unwrap_err();
    assert!(matches!(err, LoadError::NotAnImage { .. }), "{err}");
}

#[test]
fn missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let err = load_image_file(&temp.path().join("gone.png")).unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}

#[test]
fn oversized_file_is_rejected_before_reading() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("big.jpg");
    File::create(&path)
        .unwrap()
        .set_len(MAX_UPLOAD_BYTES + 1024 * 1024)
        .unwrap();

    let err = load_image_file(&path).unwrap_err();
    match err {
        LoadError::TooLarge { size, max, .. } => {
            assert_eq!(size, MAX_UPLOAD_BYTES + 1024 * 1024);
            assert_eq!(max, MAX_UPLOAD_BYTES);
        }
        other => panic!("unexpected {other}"),
    }
}

#[test]
fn file_at_exact_limit_loads() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("edge.png");
    File::create(&path).unwrap().set_len(MAX_UPLOAD_BYTES).unwrap();

    let asset = load_image_file(&path).unwrap();
    assert_eq!(asset.byte_len(), MAX_UPLOAD_BYTES);
}
