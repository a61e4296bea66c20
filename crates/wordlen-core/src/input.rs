//! URL list input: one URL per line until a line that is exactly `-`.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Line that ends the URL list.
pub const SENTINEL: &str = "-";

/// Prompt shown when URLs are typed interactively.
pub const PROMPT: &str = "add url list. to finish press -";

/// The URL stream could not be read. Fatal: no fetch starts.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("line {line} of the URL list is not valid UTF-8")]
    NotUtf8 { line: usize },
    #[error("read URL list: {0}")]
    Io(#[from] io::Error),
    #[error("open URL list {path}: {source}")]
    Open { path: String, source: io::Error },
}

/// Read URLs until the sentinel line or end of input, whichever comes first.
///
/// Lines are used verbatim apart from the line terminator.
pub fn read_url_list<R: BufRead>(reader: R) -> Result<Vec<String>, InputError> {
    let mut urls = Vec::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => InputError::NotUtf8 { line: n + 1 },
            _ => InputError::Io(e),
        })?;
        if line == SENTINEL {
            return Ok(urls);
        }
        urls.push(line);
    }
    tracing::debug!(count = urls.len(), "URL list ended without sentinel");
    Ok(urls)
}

/// Read a URL list from a file, same rules as [`read_url_list`].
pub fn read_url_file(path: &Path) -> Result<Vec<String>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.display().to_string(),
        source,
    })?;
    read_url_list(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn stops_at_sentinel() {
        let input = "https://a.example/\nhttps://b.example/\n-\nhttps://ignored.example/\n";
        let urls = read_url_list(Cursor::new(input)).unwrap();
        assert_eq!(urls, vec!["https://a.example/", "https://b.example/"]);
    }

    #[test]
    fn sentinel_first_means_empty() {
        let urls = read_url_list(Cursor::new("-\n")).unwrap();
        assert!(urls.is_empty());
    }

    #[test]
    fn end_of_input_ends_list() {
        let urls = read_url_list(Cursor::new("one\ntwo")).unwrap();
        assert_eq!(urls, vec!["one", "two"]);
        assert!(read_url_list(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn lines_are_verbatim() {
        let urls = read_url_list(Cursor::new("  spaced  \n\n -\n-\r\n")).unwrap();
        assert_eq!(urls, vec!["  spaced  ", "", " -"]);
    }

    #[test]
    fn crlf_sentinel_recognised() {
        let urls = read_url_list(Cursor::new("a\r\n-\r\nb\r\n")).unwrap();
        assert_eq!(urls, vec!["a"]);
    }

    #[test]
    fn invalid_utf8_is_fatal() {
        let bytes: &[u8] = b"ok\n\xff\xfe\n-\n";
        match read_url_list(Cursor::new(bytes)) {
            Err(InputError::NotUtf8 { line }) => assert_eq!(line, 2),
            other => panic!("expected NotUtf8, got {other:?}"),
        }
    }

    #[test]
    fn reads_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "http://x.example/\n-\n").unwrap();
        let urls = read_url_file(f.path()).unwrap();
        assert_eq!(urls, vec!["http://x.example/"]);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_url_file(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}
