//! Word lists for the puzzle finder
//!
//! Provides an embedded list of classic alphametic words and a loader for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{CLASSIC, CLASSIC_COUNT};
pub use loader::LoadError;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn classic_count_matches_const() {
        assert_eq!(CLASSIC.len(), CLASSIC_COUNT);
    }

    #[test]
    fn classic_words_are_valid() {
        for &word in CLASSIC {
            let parsed = Word::new(word);
            assert!(parsed.is_ok(), "Word '{word}' is not a valid puzzle word");
            assert_eq!(parsed.unwrap().text(), word, "Word '{word}' is not uppercase");
        }
    }

    #[test]
    fn classic_has_send_more_money() {
        for word in ["SEND", "MORE", "MONEY"] {
            assert!(CLASSIC.contains(&word), "missing {word}");
        }
    }

    #[test]
    fn classic_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = CLASSIC.iter().collect();
        assert_eq!(unique.len(), CLASSIC.len());
    }
}
