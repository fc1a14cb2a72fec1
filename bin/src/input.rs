use hangman::{Event, Letter};

/// A single line of player input, after filtering.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    /// Input that should be applied to the game.
    Event(Event),
    /// The player wants to stop playing.
    Quit,
    /// Input that isn't a guess or a command. This is ignored, as with stray key presses.
    Ignored,
}

/// Converts a key into a guessable letter. Only `a` to `z` are accepted; uppercase letters and
/// anything else are ignored.
pub fn parse_key(key: char) -> Option<Letter> {
    Letter::new(key).ok()
}

/// Interprets one line of input.
///
/// A blank line (just pressing Enter) restarts the game, and a line with a single letter
/// guesses that letter.
pub fn parse_line(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Event(Event::Reset);
    }
    if line == "quit" || line == "exit" {
        return Input::Quit;
    }

    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some(key), None) => parse_key(key)
            .map(|letter| Input::Event(Event::Guess(letter)))
            .unwrap_or(Input::Ignored),
        _ => Input::Ignored,
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn parse_line_single_letter_guesses() {
        assert_eq!(
            parse_line("k\n"),
            Input::Event(Event::Guess(Letter::new('k').unwrap()))
        );
    }

    #[test]
    fn parse_line_blank_resets() {
        assert_eq!(parse_line(""), Input::Event(Event::Reset));
        assert_eq!(parse_line("  "), Input::Event(Event::Reset));
    }

    #[test]
    fn parse_line_quit() {
        assert_eq!(parse_line("quit"), Input::Quit);
        assert_eq!(parse_line(" exit "), Input::Quit);
    }

    #[test]
    fn parse_line_ignores_everything_else() {
        assert_eq!(parse_line("K"), Input::Ignored);
        assert_eq!(parse_line("7"), Input::Ignored);
        assert_eq!(parse_line("ab"), Input::Ignored);
        assert_eq!(parse_line("ü"), Input::Ignored);
    }

    #[test]
    fn parse_key_filters() {
        assert!(parse_key('a').is_some());
        assert!(parse_key('Z').is_none());
        assert!(parse_key(' ').is_none());
    }
}
