use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::error::LoadError;
use super::types::NumberSequence;

/// Opens `path` and parses every whitespace-separated token as a base-10 `i64`.
///
/// Values are kept in source order; nothing is sorted or checked for order.
pub fn load_numbers(path: impl AsRef<Path>) -> Result<NumberSequence, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    parse_numbers(BufReader::new(file))
}

/// Parses an already-open source. Any malformed token or I/O error discards
/// everything read so far.
///
/// Lines are read as raw bytes, so a token that is not valid UTF-8 is reported
/// as malformed rather than as a read failure.
pub fn parse_numbers<R: BufRead>(reader: R) -> Result<NumberSequence, LoadError> {
    let mut numbers = Vec::new();

    for (line_no, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        let tokens = line
            .split(|b| b.is_ascii_whitespace())
            .filter(|token| !token.is_empty());

        for token in tokens {
            let number = std::str::from_utf8(token)
                .ok()
                .and_then(|text| text.parse::<i64>().ok())
                .ok_or_else(|| LoadError::MalformedNumber {
                    token: String::from_utf8_lossy(token).into_owned(),
                    line: line_no + 1,
                })?;
            numbers.push(number);
        }
    }

    Ok(NumberSequence::from(numbers))
}
