use crate::results::HangmanError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::io::BufRead;
use std::ops::Deref;
use std::result::Result;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single guessable letter, always in `a..=z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "char", into = "char")
)]
pub struct Letter(char);

impl Letter {
    /// Every guessable letter, in alphabetical order.
    pub const ALPHABET: [Letter; 26] = {
        let mut letters = [Letter('a'); 26];
        let mut index = 0;
        while index < 26 {
            letters[index] = Letter((b'a' + index as u8) as char);
            index += 1;
        }
        letters
    };

    /// Constructs a letter, failing if `letter` is not in `a..=z`.
    pub fn new(letter: char) -> Result<Letter, HangmanError> {
        if letter.is_ascii_lowercase() {
            Ok(Letter(letter))
        } else {
            Err(HangmanError::UnsupportedCharacter(letter))
        }
    }

    /// Iterates over every guessable letter, in alphabetical order.
    pub fn all() -> impl Iterator<Item = Letter> {
        Letter::ALPHABET.into_iter()
    }

    pub fn as_char(&self) -> char {
        self.0
    }
}

impl TryFrom<char> for Letter {
    type Error = HangmanError;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        Letter::new(letter)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A word to be guessed. Words are never empty, and only contain the letters `a` to `z`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Word {
    letters: Box<[Letter]>,
}

impl Word {
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Returns the number of letters in the word, counting repeats.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always `false`, since words cannot be empty.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Returns `true` iff the letter appears at least once in this word.
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }
}

impl FromStr for Word {
    type Err = HangmanError;

    /// Parses a word, trimming surrounding whitespace and converting it to lower case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(HangmanError::EmptyWord);
        }
        let letters = normalized
            .chars()
            .map(Letter::new)
            .collect::<Result<Box<[Letter]>, HangmanError>>()
            .map_err(|_| HangmanError::InvalidWord(normalized.clone()))?;
        Ok(Word { letters })
    }
}

impl TryFrom<&str> for Word {
    type Error = HangmanError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Word::from_str(value)
    }
}

impl TryFrom<String> for Word {
    type Error = HangmanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Word::from_str(&value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> String {
        word.to_string()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters.iter() {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

/// Contains all the words that a game may choose from. A `WordBank` always holds at least one
/// word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<Word>,
}

impl WordBank {
    /// Constructs a new `WordBank` by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Blank lines are skipped, and each word is
    /// trimmed and converted to lower case. Fails if any word contains something other than
    /// the letters `a` to `z`, or if there are no words at all.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, HangmanError> {
        let mut words = Vec::new();
        for maybe_line in word_reader.lines() {
            let line = maybe_line?;
            if line.trim().is_empty() {
                continue;
            }
            words.push(Word::from_str(&line)?);
        }
        WordBank::from_words(words)
    }

    /// Constructs a new `WordBank` using the words from the given iterator.
    ///
    /// This follows the same rules as [`WordBank::from_reader`].
    pub fn from_iterator<S, I>(words: I) -> Result<Self, HangmanError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        WordBank::from_words(
            words
                .into_iter()
                .filter(|word| !word.as_ref().trim().is_empty())
                .map(|word| Word::from_str(word.as_ref()))
                .collect::<Result<Vec<Word>, HangmanError>>()?,
        )
    }

    fn from_words(words: Vec<Word>) -> Result<Self, HangmanError> {
        if words.is_empty() {
            return Err(HangmanError::EmptyWordBank);
        }
        Ok(WordBank { words })
    }

    /// Returns the number of words in the bank.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`, since construction fails for an empty bank.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Chooses a word uniformly at random.
    pub fn choose_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        self.words
            .choose(rng)
            .expect("word banks are never empty")
            .clone()
    }
}

impl Deref for WordBank {
    type Target = [Word];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}
