//! Reading and writing line files.

use crate::error::FileError;
use std::path::Path;

/// Split `text` into lines, trimming whitespace on both sides of each.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A trailing terminator does
/// not produce an extra empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let (line, tail) = match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(at) => {
                let width = if rest[at..].starts_with("\r\n") { 2 } else { 1 };
                (&rest[..at], &rest[at + width..])
            }
            None => (rest, ""),
        };
        lines.push(line.trim().to_string());
        rest = tail;
    }
    lines
}

/// Join lines with `\n` and terminate with a single trailing newline.
pub fn render_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.as_ref().len() + 1).sum());
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(line.as_ref());
    }
    out.push('\n');
    out
}

pub fn read_lines(path: &Path) -> Result<Vec<String>, FileError> {
    let text = std::fs::read_to_string(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(split_lines(&text))
}

pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<(), FileError> {
    std::fs::write(path, render_lines(lines)).map_err(|source| FileError::Write {
        path: path.to_path_buf(),
        source,
    })
}
