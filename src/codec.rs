//! Flat-file persistence for record stores.
//!
//! One record per line, fields joined by `DELIMITER`, no header. Files are
//! always rewritten whole; record counts are small.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info};

use crate::config::DELIMITER;
use crate::error::CodecError;
use crate::record::Record;

/// Read every record from `path`.
///
/// A missing file is created empty and yields no records. Any line that does
/// not parse into a valid record is a `Malformed` error; nothing is dropped.
/// Blank lines carry no record and are ignored.
pub fn load<R: Record>(path: &Path) -> Result<Vec<R>, CodecError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            create_empty(path)?;
            info!(kind = R::KIND, path = %path.display(), "created empty data file");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(CodecError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let mut records = Vec::new();
    for (i, line) in contents.lines().enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(DELIMITER).collect();
        let malformed = |reason: String| CodecError::Malformed {
            path: path.to_path_buf(),
            line: i + 1,
            reason,
        };
        if fields.len() != R::FIELD_COUNT {
            return Err(malformed(format!(
                "expected {} fields, found {}",
                R::FIELD_COUNT,
                fields.len()
            )));
        }
        records.push(R::from_fields(&fields).map_err(malformed)?);
    }

    info!(kind = R::KIND, count = records.len(), path = %path.display(), "loaded records");
    Ok(records)
}

/// Overwrite `path` with `records`, one line each, in the given order.
pub fn save<R: Record>(path: &Path, records: &[R]) -> Result<(), CodecError> {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.to_fields().join(&DELIMITER.to_string()));
        out.push('\n');
    }

    fs::write(path, out).map_err(|source| CodecError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(kind = R::KIND, count = records.len(), path = %path.display(), "saved records");
    Ok(())
}

fn create_empty(path: &Path) -> Result<(), CodecError> {
    let io_err = |source| CodecError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }
    fs::write(path, "").map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{LocationRecord, TransportRecord};
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_created_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("TransportData.txt");

        let records: Vec<TransportRecord> = load(&path).unwrap();
        assert!(records.is_empty());
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn save_writes_one_line_per_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("TransportData.txt");
        let records = vec![
            TransportRecord::new("Walk", 5.0).unwrap(),
            TransportRecord::new("Car", 80.5).unwrap(),
        ];
        save(&path, &records).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Walk?5\nCar?80.5\n");
    }

    #[test]
    fn save_replaces_previous_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("TransportData.txt");
        fs::write(&path, "Old?1\nOlder?2\n").unwrap();
        save(&path, &[TransportRecord::new("New", 3.0).unwrap()]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "New?3\n");
    }

    #[test]
    fn load_reads_signed_coordinates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("LocationData.txt");
        fs::write(&path, "Sydney?-33.8688?151.2093\r\n\nLima?-12.0464?-77.0428\n").unwrap();

        let records: Vec<LocationRecord> = load(&path).unwrap();
        assert_eq!(
            records,
            vec![
                LocationRecord::new("Sydney", -33.8688, 151.2093).unwrap(),
                LocationRecord::new("Lima", -12.0464, -77.0428).unwrap(),
            ]
        );
    }

    #[test]
    fn wrong_field_count_is_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("TransportData.txt");
        fs::write(&path, "Car?80\nBus?50?extra\n").unwrap();

        let err = load::<TransportRecord>(&path).unwrap_err();
        match err {
            CodecError::Malformed { line, reason, .. } => {
                assert_eq!(line, 2);
                assert_eq!(reason, "expected 2 fields, found 3");
            }
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_field_is_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("LocationData.txt");
        fs::write(&path, "Paris?48.85?east\n").unwrap();

        let err = load::<LocationRecord>(&path).unwrap_err();
        assert!(matches!(err, CodecError::Malformed { line: 1, .. }));
        assert!(err.to_string().contains("longitude 'east' is not a number"));
    }

    #[test]
    fn out_of_range_value_is_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("TransportData.txt");
        fs::write(&path, "Anchor?-1\n").unwrap();
        assert!(matches!(
            load::<TransportRecord>(&path),
            Err(CodecError::Malformed { line: 1, .. })
        ));
    }
}
