#[cfg(test)]
mod tests {

    use std::error::Error;
    use std::str::FromStr;

    use hangman::*;
    use ron;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn game_state_serde() -> Result<(), Box<dyn Error>> {
        let state = GameState::new(Word::from_str("groan")?)
            .guess_letter(letter('o'))
            .guess_letter(letter('x'));

        let ser = ron::to_string(&state)?;
        let deser = ron::from_str::<GameState>(&ser)?;

        assert_eq!(deser, state);
        assert_eq!(deser.incorrect_letters(), vec![letter('x')]);
        assert_eq!(deser.revealed_word(), state.revealed_word());
        Ok(())
    }

    #[test]
    fn word_serializes_as_string() -> Result<(), Box<dyn Error>> {
        let word = Word::from_str("groan")?;

        assert_eq!(ron::to_string(&word)?, "\"groan\"");
        Ok(())
    }

    #[test]
    fn invalid_word_fails_to_deserialize() {
        assert!(ron::from_str::<Word>("\"gr0an\"").is_err());
        assert!(ron::from_str::<Word>("\"\"").is_err());
    }

    #[test]
    fn duplicate_guesses_fail_to_deserialize() {
        let repeated_miss =
            ron::from_str::<GameState>("(word:\"dog\",guessed:['q','q','q','q','q','q'])");
        let repeated_hit = ron::from_str::<GameState>("(word:\"dog\",guessed:['d','d'])");

        assert!(repeated_miss.is_err());
        assert!(repeated_hit.is_err());
    }

    #[test]
    fn distinct_guesses_deserialize_in_order() -> Result<(), Box<dyn Error>> {
        let state = ron::from_str::<GameState>("(word:\"dog\",guessed:['q','d','w'])")?;

        assert_eq!(
            state.guessed_letters(),
            &[letter('q'), letter('d'), letter('w')][..]
        );
        assert_eq!(state.incorrect_letters().len(), 2);
        assert_eq!(state.status(), GameStatus::InProgress);
        Ok(())
    }

    #[test]
    fn invalid_letter_fails_to_deserialize() {
        assert!(ron::from_str::<Letter>("'Q'").is_err());
        assert_eq!(ron::from_str::<Letter>("'q'").ok(), Some(letter('q')));
    }

    #[test]
    fn views_serde() -> Result<(), Box<dyn Error>> {
        let state = GameState::new(Word::from_str("ab")?).guess_letter(letter('a'));
        let keyboard = state.keyboard();

        let ser = ron::to_string(&keyboard)?;
        let deser = ron::from_str::<Vec<(Letter, KeyState)>>(&ser)?;

        assert_eq!(deser, keyboard);
        assert_eq!(
            ron::from_str::<GameStatus>(&ron::to_string(&state.status())?)?,
            GameStatus::InProgress
        );
        Ok(())
    }
}
