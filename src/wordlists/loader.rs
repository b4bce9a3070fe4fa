//! Word list loading utilities
//!
//! Reads word lists from files or embedded constants. One word per line; blank lines are
//! skipped. An invalid word fails the whole load with its line number instead of being
//! silently dropped.

use crate::core::{Word, WordError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for word list loading
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid word on line {line}: {source}")]
    InvalidWord {
        line: usize,
        #[source]
        source: WordError,
    },
}

/// Load words from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or `LoadError::InvalidWord` for the
/// first line that is not a valid word.
///
/// # Examples
/// ```no_run
/// use alphametics::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_words(&content)
}

/// Parse newline-separated words
///
/// # Errors
///
/// Returns `LoadError::InvalidWord` with the 1-based line number of the first bad word.
pub fn parse_words(content: &str) -> Result<Vec<Word>, LoadError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            Word::new(line.trim()).map_err(|source| LoadError::InvalidWord {
                line: i + 1,
                source,
            })
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Errors
///
/// Returns `LoadError::InvalidWord` numbering entries from 1.
///
/// # Examples
/// ```
/// use alphametics::wordlists::loader::words_from_slice;
/// use alphametics::wordlists::CLASSIC;
///
/// let words = words_from_slice(CLASSIC).unwrap();
/// assert_eq!(words.len(), CLASSIC.len());
/// ```
pub fn words_from_slice<S: AsRef<str>>(slice: &[S]) -> Result<Vec<Word>, LoadError> {
    slice
        .iter()
        .enumerate()
        .map(|(i, s)| {
            Word::new(s).map_err(|source| LoadError::InvalidWord {
                line: i + 1,
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["send", "more", "money"]).unwrap();

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "SEND");
        assert_eq!(words[1].text(), "MORE");
        assert_eq!(words[2].text(), "MONEY");
    }

    #[test]
    fn words_from_slice_reports_position() {
        let err = words_from_slice(&["send", "m0re", "money"]).unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidWord {
                line: 2,
                source: WordError::InvalidCharacter { .. }
            }
        ));
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).unwrap().is_empty());
    }

    #[test]
    fn parse_skips_blank_lines() {
        let words = parse_words("SEND\n\n  \nMORE\r\n\tMONEY\n").unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["SEND", "MORE", "MONEY"]);
    }

    #[test]
    fn parse_counts_lines_including_blanks() {
        let err = parse_words("SEND\n\nTWO WORDS\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidWord { line: 3, .. }));
        assert!(err.to_string().starts_with("Invalid word on line 3"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_from_file("/nonexistent/alphametics/words.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
