use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::data::parser;
use crate::error::{LoadError, ParseError};
use crate::state::number_store::Number;

/// What a (possibly interrupted) file load produced.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub added: usize,
    pub rejected: Vec<ParseError>,
    /// Set when reading stopped early. Numbers read before the failure are
    /// still reported through `added`.
    pub failure: Option<LoadError>,
}

impl LoadOutcome {
    /// A load that stopped before reading anything.
    pub fn failed(e: LoadError) -> Self {
        Self {
            failure: Some(e),
            ..Default::default()
        }
    }
}

/// Open `path` for line-by-line reading.
pub fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| LoadError::read(path, e))
}

/// Read whitespace-separated numbers from `reader`, handing each line's
/// numbers to `sink` as soon as the line is parsed.
pub fn load_reader<R, F>(reader: R, source: &Path, mut sink: F) -> LoadOutcome
where
    R: BufRead,
    F: FnMut(Vec<Number>),
{
    let mut outcome = LoadOutcome::default();
    for line in reader.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                outcome.failure = Some(LoadError::read(source, e));
                break;
            }
        };
        let (numbers, errors) = parser::parse_batch(&line);
        outcome.added += numbers.len();
        outcome.rejected.extend(errors);
        if !numbers.is_empty() {
            sink(numbers);
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::io::Write;

    #[test]
    fn test_reader_multiline() {
        let mut got = Vec::new();
        let outcome = load_reader(
            Cursor::new("1 2\n\n  3.5\t4\n"),
            Path::new("mem"),
            |ns| got.extend(ns),
        );
        assert_eq!(outcome.added, 4);
        assert!(outcome.rejected.is_empty());
        assert!(outcome.failure.is_none());
        assert_eq!(
            got,
            vec![
                Number::Int(1),
                Number::Int(2),
                Number::Real(3.5),
                Number::Int(4)
            ]
        );
    }

    #[test]
    fn test_reader_invalid_utf8_keeps_earlier_lines() {
        let bytes: Vec<u8> = b"1 2\n\xff\xfe\n3\n".to_vec();
        let mut got = Vec::new();
        let outcome = load_reader(Cursor::new(bytes), Path::new("mem"), |ns| got.extend(ns));
        assert_eq!(got, vec![Number::Int(1), Number::Int(2)]);
        assert!(matches!(outcome.failure, Some(LoadError::Read { .. })));
    }

    #[test]
    fn test_missing_file_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let err = open(&path).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Failed to read file: "));
        assert!(message.contains("nope.txt"));
    }

    #[test]
    fn test_file_with_bad_token() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "5 abc 7").unwrap();
        let reader = open(file.path()).unwrap();
        let mut got = Vec::new();
        let outcome = load_reader(reader, file.path(), |ns| got.extend(ns));
        assert_eq!(got, vec![Number::Int(5), Number::Int(7)]);
        assert_eq!(outcome.rejected, vec![ParseError::new("abc")]);
    }
}
