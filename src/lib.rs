use std::{io::{self, Write}, path::Path};

use log::info;

use crate::group_output::OutputFormat;

pub mod word_loading;
pub mod anagram_groups;
pub mod group_output;

/// Loads the words in `file_path` and writes their anagram groups to `out`.
///
/// Nothing is written if the file cannot be read.
pub fn list_anagrams(file_path: impl AsRef<Path>, out: &mut impl Write) -> io::Result<()> {
    let words = word_loading::load_words(file_path)?;
    let table = anagram_groups::group_words(words);
    info!("{} distinct signatures found", table.len());
    group_output::write_groups(&table, out, OutputFormat::Plain)
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;

    use super::*;

    #[test]
    fn test_list_anagrams() {
        struct ListAnagramsTestCase<'a> {
            content: &'a str,
            output: &'a str,
        }

        let test_cases = vec![
            ListAnagramsTestCase {
                content: "listen\nsilent\nenlist\nbanana\nhello\n",
                output: "enlist listen silent\n",
            },
            ListAnagramsTestCase {
                content: "Cat\r\nact\r\ncAT\r\n",
                output: "act cat cat\n",
            },
            ListAnagramsTestCase {
                content: "listen\rsilent\rhello\r",
                output: "listen silent\n",
            },
            ListAnagramsTestCase {
                content: "",
                output: "",
            },
        ];

        let file_path = std::env::temp_dir()
            .join(format!("anagrams-list-anagrams-{}.txt", std::process::id()));
        for case in test_cases {
            std::fs::write(&file_path, case.content).unwrap();
            let mut out = vec![];
            let result = list_anagrams(&file_path, &mut out);
            assert!(result.is_ok(), "Result is not OK; case: {:?}", case.content);
            assert_eq!(String::from_utf8(out).unwrap(), case.output, "case: {:?}", case.content);
        }
        std::fs::remove_file(&file_path).unwrap();
    }

    #[test]
    fn test_list_anagrams_unreadable_input_writes_nothing() {
        let missing = std::env::temp_dir().join("anagrams-this-file-does-not-exist.txt");
        let mut out = vec![];
        let err = list_anagrams(&missing, &mut out).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(out.is_empty());

        let file_path = std::env::temp_dir()
            .join(format!("anagrams-invalid-utf8-{}.txt", std::process::id()));
        std::fs::write(&file_path, b"cat\nact\n\xff\n").unwrap();
        let mut out = vec![];
        let err = list_anagrams(&file_path, &mut out).unwrap_err();
        std::fs::remove_file(&file_path).unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert!(out.is_empty());
    }
}
