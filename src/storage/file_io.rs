//! File I/O utilities
//!
//! Reads and writes indented JSON files. Writes go to a sibling temp file that
//! is then renamed over the target.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::AcctreeError;

/// Read JSON from a file
///
/// A missing file is `NotFound`; content that fails to parse is `Parse`.
pub fn read_json<T, P>(path: P) -> Result<T, AcctreeError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(AcctreeError::file_not_found(path.display().to_string()));
    }

    let file = File::open(path)
        .map_err(|e| AcctreeError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| AcctreeError::Parse(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Serialize a value as JSON indented by `indent` spaces
pub fn to_json_pretty<T: Serialize>(data: &T, indent: usize) -> Result<Vec<u8>, AcctreeError> {
    let indent = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    data.serialize(&mut serializer)
        .map_err(|e| AcctreeError::Json(format!("Failed to serialize data: {}", e)))?;
    Ok(buf)
}

/// Write JSON to a file, replacing it
///
/// The data is written to `<file>.tmp` and renamed over the target, so a
/// failed write leaves the previous file in place.
pub fn write_json<T, P>(path: P, data: &T, indent: usize) -> Result<(), AcctreeError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let bytes = to_json_pretty(data, indent)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            AcctreeError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = Path::new(&temp_name);

    let file = File::create(temp_path)
        .map_err(|e| AcctreeError::Io(format!("Failed to create temp file: {}", e)))?;

    if let Err(e) = write_synced(file, &bytes) {
        let _ = fs::remove_file(temp_path);
        return Err(e);
    }

    fs::rename(temp_path, path).map_err(|e| {
        let _ = fs::remove_file(temp_path);
        AcctreeError::Io(format!("Failed to replace {}: {}", path.display(), e))
    })?;

    Ok(())
}

/// Write the bytes plus a trailing newline and sync them to disk
fn write_synced(file: File, bytes: &[u8]) -> Result<(), AcctreeError> {
    let mut writer = BufWriter::new(file);
    writer
        .write_all(bytes)
        .and_then(|_| writer.write_all(b"\n"))
        .map_err(|e| AcctreeError::Io(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| AcctreeError::Io(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| AcctreeError::Io(format!("Failed to sync data: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_read_nonexistent_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let err = read_json::<TestData, _>(&path).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_read_invalid_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "not json at all").unwrap();

        let err = read_json::<TestData, _>(&path).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };

        write_json(&path, &data, 4).unwrap();
        let loaded: TestData = read_json(&path).unwrap();
        assert_eq!(data, loaded);
    }

    #[test]
    fn test_indent_width() {
        let data = TestData {
            name: "x".to_string(),
            value: 1,
        };
        let text = String::from_utf8(to_json_pretty(&data, 4).unwrap()).unwrap();
        assert_eq!(text, "{\n    \"name\": \"x\",\n    \"value\": 1\n}");
    }

    #[test]
    fn test_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        write_json(&path, &TestData::default(), 2).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("test.json.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.json");

        write_json(&path, &TestData::default(), 4).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");
        fs::write(&path, "garbage").unwrap();

        write_json(&path, &TestData::default(), 4).unwrap();
        let loaded: TestData = read_json(&path).unwrap();
        assert_eq!(loaded, TestData::default());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_failed_write_removes_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        let temp_path = temp_dir.path().join("data.json.tmp");
        fs::write(&path, "{}").unwrap();
        std::os::unix::fs::symlink("/dev/full", &temp_path).unwrap();

        let data = TestData {
            name: "test".to_string(),
            value: 1,
        };
        let err = write_json(&path, &data, 4).unwrap_err();

        assert!(matches!(err, AcctreeError::Io(_)));
        assert!(fs::symlink_metadata(&temp_path).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }
}
