#[macro_use]
extern crate assert_matches;

use hangman::*;

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Cursor};
use std::result::Result;

#[test]
fn word_bank_from_reader_succeeds() -> Result<(), HangmanError> {
    let word_bank = WordBank::from_reader(Cursor::new("\n\nworda\n Wordb\n"))?;

    assert_eq!(word_bank.len(), 2);
    assert_eq!(word_bank[0].to_string(), "worda");
    assert_eq!(word_bank[1].to_string(), "wordb");
    Ok(())
}

#[test]
fn word_bank_from_iterator_succeeds() -> Result<(), HangmanError> {
    let word_bank = WordBank::from_iterator(vec!["".to_string(), "Cat ".to_string()])?;

    assert_eq!(word_bank.len(), 1);
    assert_eq!(word_bank[0].to_string(), "cat");
    Ok(())
}

#[test]
fn word_bank_empty_fails() {
    assert_matches!(
        WordBank::from_reader(Cursor::new("\n  \n")),
        Err(HangmanError::EmptyWordBank)
    );
    assert_matches!(
        WordBank::from_iterator(Vec::<&str>::new()),
        Err(HangmanError::EmptyWordBank)
    );
}

#[test]
fn word_bank_invalid_word_fails() {
    assert_matches!(
        WordBank::from_iterator(["cat", "c4t"]),
        Err(HangmanError::InvalidWord(word)) if word == "c4t"
    );
}

#[test]
fn word_bank_from_data_file() -> Result<(), HangmanError> {
    let words_reader = io::BufReader::new(File::open("../data/words.txt")?);

    let bank = WordBank::from_reader(words_reader)?;

    assert!(!bank.is_empty());
    assert!(bank
        .iter()
        .all(|word| word.letters().iter().all(|l| l.as_char().is_ascii_lowercase())));
    Ok(())
}

#[test]
fn choose_word_covers_bank() -> Result<(), HangmanError> {
    let bank = WordBank::from_iterator(["cat", "dog", "owl"])?;
    let mut rng = StdRng::seed_from_u64(42);

    let chosen: HashSet<String> = (0..200)
        .map(|_| bank.choose_word(&mut rng).to_string())
        .collect();

    assert_eq!(chosen.len(), 3);
    Ok(())
}
