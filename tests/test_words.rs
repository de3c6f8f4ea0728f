use balanced_trees::avl_tree::AvlMap;
use balanced_trees::red_black_tree::RedBlackMap;
use balanced_trees::{words, Map};
use std::collections::HashSet;
use std::env;
use std::fs;

const TEXT: &str = "\
It is a truth universally acknowledged, that a single man in possession of a good fortune,
must be in want of a wife. Pride relates more to our opinion of ourselves, vanity to what we
would have others think of us. PRIDE and PREJUDICE; pride, and prejudice! Prejudice-free? No.";

fn check_counts<M>(mut map: M, tokens: &[String])
where
    M: Map<String, usize>,
{
    words::count_words(&mut map, tokens.iter().cloned());

    let pride = tokens.iter().filter(|word| *word == "pride").count();
    let prejudice = tokens.iter().filter(|word| *word == "prejudice").count();
    let distinct = tokens.iter().collect::<HashSet<_>>().len();

    assert_eq!(map.get("pride"), Some(&pride));
    assert_eq!(map.get("prejudice"), Some(&prejudice));
    assert_eq!(map.get("darcy"), None);
    assert_eq!(map.len(), distinct);
    assert!(map.is_bst());
    assert!(map.is_balanced());

    for word in tokens {
        map.remove(word.as_str());
        assert!(map.is_bst());
        assert!(map.is_balanced());
    }
    assert!(map.is_empty());
}

#[test]
fn test_word_frequencies() {
    let tokens = words::tokenize(TEXT);
    assert_eq!(tokens.iter().filter(|word| *word == "pride").count(), 3);
    assert_eq!(tokens.iter().filter(|word| *word == "prejudice").count(), 3);

    check_counts(AvlMap::new(), &tokens);
    check_counts(RedBlackMap::new(), &tokens);
}

#[test]
fn test_read_words() {
    let path = env::temp_dir().join(format!("balanced-trees-words-{}.txt", std::process::id()));
    fs::write(&path, TEXT).unwrap();
    let tokens = words::read_words(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(tokens, words::tokenize(TEXT));
    assert_eq!(tokens[0], "it");
}

#[test]
fn test_read_words_missing_file() {
    let path = env::temp_dir().join("balanced-trees-missing-file.txt");
    assert!(words::read_words(&path).is_err());
}
