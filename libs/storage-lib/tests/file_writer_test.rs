use std::io::ErrorKind;

use storage_lib::{FileWriter, StorageError, StorageWriter, WriteTarget};
use tempfile::tempdir;

fn writer_in(dir: &tempfile::TempDir, name: &str) -> FileWriter {
    FileWriter::new(WriteTarget::new(dir.path().join(name)))
}

// ==================== WRITE TESTS ====================

#[tokio::test]
async fn test_write_then_read_returns_same_content() {
    let dir = tempdir().unwrap();
    let writer = writer_in(&dir, "output.txt");

    writer.write("hello world").await.unwrap();

    let data = tokio::fs::read_to_string(writer.target().path()).await.unwrap();
    assert_eq!(data, "hello world");
}

#[tokio::test]
async fn test_write_keeps_utf8_bytes_untouched() {
    let dir = tempdir().unwrap();
    let writer = writer_in(&dir, "output.txt");
    let msg = "héllo wörld 🚀\nsecond line\ttab";

    writer.write(msg).await.unwrap();

    let data = tokio::fs::read(writer.target().path()).await.unwrap();
    assert_eq!(data, msg.as_bytes());
}

#[tokio::test]
async fn test_second_write_overwrites_first() {
    let dir = tempdir().unwrap();
    let writer = writer_in(&dir, "output.txt");

    writer.write("a much longer first message").await.unwrap();
    writer.write("short").await.unwrap();

    let data = tokio::fs::read_to_string(writer.target().path()).await.unwrap();
    assert_eq!(data, "short");
}

#[tokio::test]
async fn test_write_empty_content_truncates_file() {
    let dir = tempdir().unwrap();
    let writer = writer_in(&dir, "output.txt");

    writer.write("previous").await.unwrap();
    writer.write("").await.unwrap();

    let data = tokio::fs::read(writer.target().path()).await.unwrap();
    assert!(data.is_empty());
}

#[tokio::test]
async fn test_write_overwrites_file_created_elsewhere() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("existing.txt");
    std::fs::write(&path, "created by someone else").unwrap();

    let writer = FileWriter::new(WriteTarget::new(&path));
    writer.write("ours").await.unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "ours");
}

// ==================== FAILURE TESTS ====================

#[tokio::test]
async fn test_write_to_missing_parent_fails_and_creates_nothing() {
    let dir = tempdir().unwrap();
    let missing_parent = dir.path().join("nonexistent");
    let path = missing_parent.join("output.txt");
    let writer = FileWriter::new(WriteTarget::new(&path));

    let err = writer.write("test message").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.path(), path.as_path());
    assert!(!path.exists());
    assert!(!missing_parent.exists());
}

#[tokio::test]
async fn test_write_to_directory_fails() {
    let dir = tempdir().unwrap();
    let writer = FileWriter::new(WriteTarget::new(dir.path()));

    let result = writer.write("test message").await;

    assert!(matches!(result, Err(StorageError::Write { .. })));
    assert!(dir.path().is_dir());
}

#[tokio::test]
async fn test_error_message_names_the_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope").join("output.txt");
    let writer = FileWriter::new(WriteTarget::new(&path));

    let err = writer.write("x").await.unwrap_err();

    assert!(err.to_string().contains(&path.display().to_string()));
    assert!(std::error::Error::source(&err).is_some());
}

// ==================== PERMISSION TESTS ====================

#[cfg(unix)]
#[tokio::test]
async fn test_created_file_has_no_bits_beyond_0644() {
    use std::os::unix::fs::PermissionsExt;
    use storage_lib::DEFAULT_FILE_MODE;

    let dir = tempdir().unwrap();
    let writer = writer_in(&dir, "output.txt");

    writer.write("mode check").await.unwrap();

    let mode = std::fs::metadata(writer.target().path())
        .unwrap()
        .permissions()
        .mode()
        & 0o777;
    assert_eq!(mode & !DEFAULT_FILE_MODE, 0);
    assert_eq!(mode & 0o600, 0o600);
}

// ==================== TARGET TESTS ====================

#[test]
fn test_write_target_display_is_path() {
    let target = WriteTarget::new("/data/output.txt");

    assert_eq!(target.to_string(), "/data/output.txt");
    assert_eq!(target.path(), std::path::Path::new("/data/output.txt"));
}

#[test]
fn test_writer_exposes_its_target() {
    let target = WriteTarget::new("/data/output.txt");
    let writer = FileWriter::new(target.clone());

    assert_eq!(writer.target(), &target);
}
