use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::data::Letter;

/// Indicates that an error occurred while loading words or letters.
///
/// Gameplay itself never fails: repeated guesses and guesses after the game has ended are
/// ignored rather than rejected.
#[derive(Debug, Error)]
pub enum HangmanError {
    /// Indicates that the word bank contained no words, so no game can be started.
    #[error("the word bank must contain at least one word")]
    EmptyWordBank,
    /// Indicates that a word was empty.
    #[error("words must contain at least one letter")]
    EmptyWord,
    /// Indicates that a word contained characters other than `a` to `z`.
    #[error("word `{0}` must only contain the letters a to z")]
    InvalidWord(String),
    /// Indicates that the given character is not a guessable letter.
    #[error("`{0}` is not a letter from a to z")]
    UnsupportedCharacter(char),
    /// Indicates that a restored game listed the same guessed letter more than once.
    #[error("letter `{0}` was guessed more than once")]
    DuplicateGuess(Letter),
    /// Indicates that the word list could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Whether the game is still being played, or has been won or lost.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// At least one letter of the word is still hidden, and the guesser has not run out of
    /// guesses.
    InProgress,
    /// Every letter in the word has been guessed.
    Won,
    /// The guesser made the maximum number of incorrect guesses.
    Lost,
}

impl GameStatus {
    /// Returns `true` iff no further guesses will be recorded.
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

/// How a single position of the word should be shown.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RevealedLetter {
    /// The letter at this position has been guessed.
    Guessed(Letter),
    /// The game was lost without this letter being guessed, so it is revealed.
    Missed(Letter),
    /// The letter is still unknown to the guesser.
    Hidden,
}

impl RevealedLetter {
    /// Returns the letter, if it should be visible.
    pub fn letter(&self) -> Option<Letter> {
        match self {
            RevealedLetter::Guessed(letter) | RevealedLetter::Missed(letter) => Some(*letter),
            RevealedLetter::Hidden => None,
        }
    }
}

/// The state of a single key on the keyboard.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KeyState {
    /// The letter was guessed and is in the word.
    Active,
    /// The letter was guessed and is not in the word.
    Inactive,
    /// The letter has not been guessed yet, and can still be.
    Available,
    /// The letter has not been guessed, but the game is over.
    Disabled,
}
