//! Splitting text into words and counting how often each word occurs.

use crate::map::Map;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Splits `text` into maximal runs of alphabetic characters and lowercases each run.
///
/// # Examples
///
/// ```
/// use balanced_trees::words;
///
/// assert_eq!(
///     words::tokenize("It is a truth, universally acknowledged"),
///     vec!["it", "is", "a", "truth", "universally", "acknowledged"],
/// );
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_lowercase())
        .collect()
}

/// Reads the file at `path` and returns its words as produced by `tokenize`.
pub fn read_words<P>(path: P) -> io::Result<Vec<String>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let words = tokenize(&text);
    debug!("read {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Counts the occurrences of every word in `words`, adding them to the counts already in `map`.
///
/// # Examples
///
/// ```
/// use balanced_trees::avl_tree::AvlMap;
/// use balanced_trees::words;
///
/// let mut map = AvlMap::new();
/// words::count_words(&mut map, words::tokenize("the cat and the hat"));
///
/// assert_eq!(map.get("the"), Some(&2));
/// assert_eq!(map.get("cat"), Some(&1));
/// assert_eq!(map.len(), 4);
/// ```
pub fn count_words<M, I>(map: &mut M, words: I)
where
    M: Map<String, usize>,
    I: IntoIterator<Item = String>,
{
    for word in words {
        if let Some(count) = map.get_mut(word.as_str()) {
            *count += 1;
            continue;
        }
        map.insert(word, 1);
    }
}

#[cfg(test)]
mod tests {
    use super::{count_words, tokenize};
    use crate::avl_tree::AvlMap;
    use crate::red_black_tree::RedBlackMap;

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" ,.;-- 12 ").is_empty());
    }

    #[test]
    fn test_tokenize_punctuation() {
        assert_eq!(
            tokenize("Mr. Darcy's pride--and HER prejudice!"),
            vec!["mr", "darcy", "s", "pride", "and", "her", "prejudice"],
        );
    }

    #[test]
    fn test_count_words() {
        let words = tokenize("a b a c b a");

        let mut avl = AvlMap::new();
        count_words(&mut avl, words.clone());
        let mut red_black = RedBlackMap::new();
        count_words(&mut red_black, words);

        for map_counts in &[
            avl.iter().map(|(key, value)| (key.as_str(), *value)).collect::<Vec<_>>(),
            red_black.iter().map(|(key, value)| (key.as_str(), *value)).collect::<Vec<_>>(),
        ] {
            assert_eq!(map_counts, &vec![("a", 3), ("b", 2), ("c", 1)]);
        }
    }
}
