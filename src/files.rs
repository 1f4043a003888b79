use crate::error::{TourError, TourResult};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::warn;

/// Plain-text writer/reader. Every handle lives only inside the call that
/// opened it.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileManager;

impl FileManager {
    pub fn new() -> Self {
        FileManager
    }

    /// Creates or truncates `path` and writes `content` verbatim.
    pub fn write_to_file(&self, path: &Path, content: &str) -> TourResult<()> {
        let file = File::create(path).map_err(|err| TourError::write(path, err))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(content.as_bytes())
            .map_err(|err| TourError::write(path, err))?;
        writer.flush().map_err(|err| TourError::write(path, err))?;
        Ok(())
    }

    pub fn read_lines(&self, path: &Path) -> TourResult<Vec<String>> {
        let file = File::open(path).map_err(|err| TourError::read(path, err))?;
        BufReader::new(file)
            .lines()
            .map(|line| line.map_err(|err| TourError::read(path, err)))
            .collect()
    }
}

/// Writes then reads back, printing each line. Failures are printed, never
/// returned.
pub fn run_file_round_trip(path: &Path, content: &str) -> Option<Vec<String>> {
    let manager = FileManager::new();

    if let Err(err) = manager.write_to_file(path, content) {
        warn!(error = %err, "file write failed");
        println!("{}", err);
    }

    match manager.read_lines(path) {
        Ok(lines) => {
            for line in &lines {
                println!("From file: {}", line);
            }
            Some(lines)
        }
        Err(err) => {
            warn!(error = %err, "file read failed");
            println!("{}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::DEFAULT_FILE_CONTENT;
    use tempfile::tempdir;

    #[test]
    fn test_round_trip_preserves_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.txt");
        let manager = FileManager::new();

        manager.write_to_file(&path, DEFAULT_FILE_CONTENT).unwrap();
        let lines = manager.read_lines(&path).unwrap();

        assert_eq!(lines.concat(), DEFAULT_FILE_CONTENT);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_FILE_CONTENT);
    }

    #[test]
    fn test_write_truncates_previous_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.txt");
        let manager = FileManager::new();

        manager.write_to_file(&path, "first\nsecond\nthird").unwrap();
        manager.write_to_file(&path, "only").unwrap();

        assert_eq!(manager.read_lines(&path).unwrap(), vec!["only"]);
    }

    #[test]
    fn test_multiline_content_is_split() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lines.txt");
        let manager = FileManager::new();

        manager.write_to_file(&path, "one\ntwo\n").unwrap();
        assert_eq!(manager.read_lines(&path).unwrap(), vec!["one", "two"]);
    }

    #[test]
    fn test_read_missing_file_is_read_error() {
        let dir = tempdir().unwrap();
        let result = FileManager::new().read_lines(&dir.path().join("missing.txt"));
        assert!(matches!(result, Err(TourError::Read { .. })));
    }

    #[test]
    fn test_write_into_missing_directory_is_write_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("output.txt");
        let result = FileManager::new().write_to_file(&path, "x");
        assert!(matches!(result, Err(TourError::Write { .. })));
    }

    #[test]
    fn test_demo_survives_failures() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("output.txt");
        assert_eq!(run_file_round_trip(&path, "x"), None);
    }
}
