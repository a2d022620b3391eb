use std::{io::{self, Read}, fs::File, path::Path};

use log::{debug, info};

/// Opens `file_path` and reads it as a list of words, one per line.
///
/// The file handle is dropped before returning, on success or on error.
pub fn load_words(file_path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let file_path = file_path.as_ref();
    let file_handle = File::open(file_path)?;
    info!("reading words from {:?}", file_path);
    let words = reader_to_words(file_handle)?;
    info!("{} words loaded from {:?}", words.len(), file_path);
    Ok(words)
}

/// Reads line-delimited words from `reader`, keeping input order and duplicates.
///
/// Lines may end in `\n`, `\r\n` or a lone `\r`. Blank lines are skipped.
/// Content that is not valid UTF8 results in an `io::Error` of kind `InvalidData`.
pub fn reader_to_words(mut reader: impl Read) -> io::Result<Vec<String>> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;

    let mut words = vec![];
    let mut blank_lines = 0;
    // `\r\n` yields an extra empty piece, dropped with the blank lines
    for line in content.split(['\r', '\n']) {
        match normalize_line(line) {
            Some(word) => words.push(word),
            None => blank_lines += 1,
        }
    }
    debug!("{} words read, {} empty pieces skipped", words.len(), blank_lines);
    Ok(words)
}

/// Trims and lowercases `line`; `None` if nothing is left.
pub fn normalize_line(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    match word.is_empty() {
        true => None,
        false => Some(word),
    }
}
