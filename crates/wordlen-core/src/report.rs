//! Result rendering: `length <L>: <WORD>` lines or JSON.

use serde::Serialize;
use std::io::{self, Write};

use crate::aggregate::LengthResult;

/// One row of the JSON report.
#[derive(Debug, Serialize)]
pub struct ReportRow<'a> {
    pub length: usize,
    pub word: &'a str,
    pub count: u64,
}

pub fn rows(result: &LengthResult) -> Vec<ReportRow<'_>> {
    result
        .iter()
        .map(|(length, winner)| ReportRow {
            length,
            word: &winner.word,
            count: winner.count,
        })
        .collect()
}

/// Text lines, ascending by length.
pub fn render_lines(result: &LengthResult) -> Vec<String> {
    result
        .iter()
        .map(|(length, winner)| format!("length {}: {}", length, winner.word))
        .collect()
}

pub fn write_table<W: Write>(result: &LengthResult, mut out: W) -> io::Result<()> {
    for line in render_lines(result) {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

/// Pretty JSON array of `{length, word, count}` objects.
pub fn to_json(result: &LengthResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&rows(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::tokenize::tokenize;

    #[test]
    fn lines_ascending() {
        let result = aggregate(tokenize("a bb ccc dd"));
        assert_eq!(render_lines(&result), vec!["length 2: BB", "length 3: CCC"]);
    }

    #[test]
    fn empty_result_writes_nothing() {
        let mut buf = Vec::new();
        write_table(&LengthResult::default(), &mut buf).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn table_has_one_line_per_length() {
        let result = aggregate(tokenize("Cat cat dog hello"));
        let mut buf = Vec::new();
        write_table(&result, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "length 3: CAT\nlength 5: HELLO\n"
        );
    }

    #[test]
    fn json_rows() {
        let result = aggregate(tokenize("Cat cat dog"));
        let json = to_json(&result).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([{ "length": 3, "word": "CAT", "count": 2 }])
        );
    }
}
