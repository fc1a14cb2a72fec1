use crate::data::*;
use crate::results::*;
use rand::Rng;
use tracing::{debug, info, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of incorrect guesses after which the game is lost.
pub const MAX_INCORRECT_GUESSES: usize = 6;

/// An input to [`GameState::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Guess the given letter.
    Guess(Letter),
    /// Discard the current game and start again with a new word.
    Reset,
}

/// The state of a single game: the word to guess, and the letters guessed so far.
///
/// Whether the game has been won or lost is never stored. It is derived from the guessed
/// letters whenever it is needed, so any word and set of guesses forms a valid state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "GameStateRecord")
)]
pub struct GameState {
    word: Word,
    guessed: Vec<Letter>,
}

/// The unchecked form of a [`GameState`], as read by serde.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct GameStateRecord {
    word: Word,
    guessed: Vec<Letter>,
}

#[cfg(feature = "serde")]
impl TryFrom<GameStateRecord> for GameState {
    type Error = HangmanError;

    fn try_from(record: GameStateRecord) -> Result<Self, Self::Error> {
        GameState::from_guesses(record.word, record.guessed)
    }
}

impl GameState {
    /// Starts a game for the given word, with no letters guessed yet.
    pub fn new(word: Word) -> GameState {
        GameState {
            word,
            guessed: Vec::new(),
        }
    }

    /// Restores a game for the given word, with the given letters already guessed in order.
    ///
    /// Fails with [`HangmanError::DuplicateGuess`] if any letter appears more than once.
    pub fn from_guesses(word: Word, guessed: Vec<Letter>) -> Result<GameState, HangmanError> {
        for (index, letter) in guessed.iter().enumerate() {
            if guessed[..index].contains(letter) {
                return Err(HangmanError::DuplicateGuess(*letter));
            }
        }
        Ok(GameState { word, guessed })
    }

    /// Starts a game with a word chosen at random from the bank.
    pub fn initialize<R: Rng + ?Sized>(bank: &WordBank, rng: &mut R) -> GameState {
        let word = bank.choose_word(rng);
        debug!(word_len = word.len(), "chose a new word");
        trace!(%word);
        GameState::new(word)
    }

    /// Discards this game, and starts a new one with a word chosen at random from the bank.
    pub fn reset<R: Rng + ?Sized>(self, bank: &WordBank, rng: &mut R) -> GameState {
        debug!(
            num_guessed = self.guessed.len(),
            status = ?self.status(),
            "resetting game"
        );
        GameState::initialize(bank, rng)
    }

    /// Records a guess of the given letter.
    ///
    /// If the letter was already guessed, or if the game has already been won or lost, this
    /// returns the state unchanged.
    pub fn guess_letter(mut self, letter: Letter) -> GameState {
        if self.guessed.contains(&letter) {
            trace!(%letter, "ignoring repeated guess");
            return self;
        }
        if self.is_over() {
            trace!(%letter, "ignoring guess after the game ended");
            return self;
        }

        self.guessed.push(letter);
        debug!(
            %letter,
            correct = self.word.contains(letter),
            num_incorrect = self.num_incorrect(),
            "recorded guess"
        );
        match self.status() {
            GameStatus::Won => info!(num_guessed = self.guessed.len(), "game won"),
            GameStatus::Lost => info!(num_guessed = self.guessed.len(), "game lost"),
            GameStatus::InProgress => {}
        }
        self
    }

    /// Applies the event to this state, returning the resulting state.
    pub fn apply<R: Rng + ?Sized>(self, event: Event, bank: &WordBank, rng: &mut R) -> GameState {
        match event {
            Event::Guess(letter) => self.guess_letter(letter),
            Event::Reset => self.reset(bank, rng),
        }
    }

    /// The word to be guessed.
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// All guessed letters, in the order they were guessed.
    pub fn guessed_letters(&self) -> &[Letter] {
        &self.guessed
    }

    /// The guessed letters that are not in the word, in the order they were guessed.
    pub fn incorrect_letters(&self) -> Vec<Letter> {
        self.guessed
            .iter()
            .copied()
            .filter(|letter| !self.word.contains(*letter))
            .collect()
    }

    /// The guessed letters that are in the word, in the order they were guessed.
    pub fn active_letters(&self) -> Vec<Letter> {
        self.guessed
            .iter()
            .copied()
            .filter(|letter| self.word.contains(*letter))
            .collect()
    }

    fn num_incorrect(&self) -> usize {
        self.guessed
            .iter()
            .filter(|letter| !self.word.contains(**letter))
            .count()
    }

    /// Returns `true` iff the guesser has made too many incorrect guesses.
    pub fn is_loser(&self) -> bool {
        self.num_incorrect() >= MAX_INCORRECT_GUESSES
    }

    /// Returns `true` iff every letter in the word has been guessed.
    pub fn is_winner(&self) -> bool {
        self.word
            .letters()
            .iter()
            .all(|letter| self.guessed.contains(letter))
    }

    /// Returns `true` iff the game has been won or lost.
    pub fn is_over(&self) -> bool {
        self.is_winner() || self.is_loser()
    }

    /// Summarizes the game's progress. `Won` takes precedence if both predicates hold.
    pub fn status(&self) -> GameStatus {
        if self.is_winner() {
            GameStatus::Won
        } else if self.is_loser() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// The number of incorrect guesses that may still be made before the game is lost.
    pub fn remaining_guesses(&self) -> usize {
        MAX_INCORRECT_GUESSES.saturating_sub(self.num_incorrect())
    }

    /// The number of parts of the hangman that should be drawn, from `0` up to
    /// [`MAX_INCORRECT_GUESSES`].
    pub fn drawing_stage(&self) -> usize {
        self.num_incorrect().min(MAX_INCORRECT_GUESSES)
    }

    /// Describes how each letter of the word should be shown.
    ///
    /// Letters that were never guessed are revealed as [`RevealedLetter::Missed`] once the game
    /// is lost.
    pub fn revealed_word(&self) -> Vec<RevealedLetter> {
        let reveal = self.is_loser();
        self.word
            .letters()
            .iter()
            .map(|letter| {
                if self.guessed.contains(letter) {
                    RevealedLetter::Guessed(*letter)
                } else if reveal {
                    RevealedLetter::Missed(*letter)
                } else {
                    RevealedLetter::Hidden
                }
            })
            .collect()
    }

    /// Returns the state of the keyboard key for the given letter.
    pub fn key_state(&self, letter: Letter) -> KeyState {
        if self.guessed.contains(&letter) {
            if self.word.contains(letter) {
                KeyState::Active
            } else {
                KeyState::Inactive
            }
        } else if self.is_over() {
            KeyState::Disabled
        } else {
            KeyState::Available
        }
    }

    /// Returns the state of every key on the keyboard, in alphabetical order.
    pub fn keyboard(&self) -> Vec<(Letter, KeyState)> {
        Letter::all()
            .map(|letter| (letter, self.key_state(letter)))
            .collect()
    }
}
