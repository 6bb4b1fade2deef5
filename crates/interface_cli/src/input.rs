//! Claim text readers

use std::fs;
use std::io::{self, BufRead, Read};
use std::path::Path;

/// Line that ends a pasted claim
pub const END_MARKER: &str = "///END";

/// Reads pasted lines until a line equal to [`END_MARKER`] (ignoring
/// surrounding whitespace) or end of input
///
/// The marker line itself is not part of the result; the joined text is
/// trimmed.
pub fn read_until_marker<R: BufRead>(reader: R) -> io::Result<String> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim() == END_MARKER {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n").trim().to_string())
}

/// Reads a whole UTF-8 text file
pub fn read_text_file(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Reads claim text from a path, or from stdin when the path is `-`
pub fn read_source(source: &str) -> io::Result<String> {
    if source == "-" {
        let mut text = String::new();
        io::stdin().lock().read_to_string(&mut text)?;
        Ok(text)
    } else {
        read_text_file(Path::new(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_stops_at_marker() {
        let input = Cursor::new("line one\n\nline three\n  ///END  \nignored\n");
        assert_eq!(read_until_marker(input).unwrap(), "line one\n\nline three");
    }

    #[test]
    fn test_eof_without_marker() {
        let input = Cursor::new("only line");
        assert_eq!(read_until_marker(input).unwrap(), "only line");
    }

    #[test]
    fn test_marker_only_is_empty() {
        let input = Cursor::new("///END\n");
        assert_eq!(read_until_marker(input).unwrap(), "");
    }
}
