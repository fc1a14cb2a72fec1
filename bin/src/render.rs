use hangman::*;

/// Printed when a line of input couldn't be understood.
pub const HINT: &str = "Enter a single letter from a to z to guess it, \
                        press Enter to restart, or type \"quit\" to stop.";

const KEYS_PER_ROW: usize = 13;

/// Draws the gallows with the first `stage` body parts, in the order head, body, right arm,
/// left arm, right leg, left leg.
pub fn render_gallows(stage: usize) -> String {
    let part = |index: usize, drawn: &'static str| if stage > index { drawn } else { " " };
    [
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  {}   |", part(0, "O")),
        format!(" {}{}{}  |", part(3, "/"), part(1, "|"), part(2, "\\")),
        format!(" {} {}  |", part(5, "/"), part(4, "\\")),
        "      |".to_string(),
        "=======".to_string(),
    ]
    .join("\n")
}

/// Shows the word with `_` for each hidden letter. Letters revealed after a loss are shown in
/// upper case.
pub fn render_word(revealed: &[RevealedLetter]) -> String {
    revealed
        .iter()
        .map(|position| match position {
            RevealedLetter::Missed(letter) => letter.as_char().to_ascii_uppercase(),
            _ => position.letter().map_or('_', |letter| letter.as_char()),
        })
        .map(String::from)
        .collect::<Vec<String>>()
        .join(" ")
}

fn render_key(letter: Letter, state: KeyState) -> String {
    match state {
        KeyState::Active => format!("[{}]", letter),
        KeyState::Inactive => format!("-{}-", letter),
        KeyState::Available => format!(" {} ", letter),
        KeyState::Disabled => " . ".to_string(),
    }
}

/// Lays out the keyboard in alphabetical rows.
pub fn render_keyboard(keys: &[(Letter, KeyState)]) -> String {
    keys.chunks(KEYS_PER_ROW)
        .map(|row| {
            row.iter()
                .map(|(letter, state)| render_key(*letter, *state))
                .collect::<Vec<String>>()
                .join("")
        })
        .collect::<Vec<String>>()
        .join("\n")
}

/// The message shown once the game is over, if it is.
pub fn render_panel(state: &GameState) -> Option<String> {
    let status = state.status();
    if !status.is_over() {
        return None;
    }
    let word = state.word().to_string().to_uppercase();
    if status == GameStatus::Won {
        Some(format!(
            "Yes the word was {}\nYay! you won. Press Enter to play again.",
            word
        ))
    } else {
        Some(format!(
            "Word was {}\nValiant Effort! Better Luck Next Time. Press Enter to play again.",
            word
        ))
    }
}

/// Renders the whole screen for the given state.
pub fn render_game(state: &GameState) -> String {
    let incorrect = state
        .incorrect_letters()
        .iter()
        .map(|letter| letter.to_string())
        .collect::<Vec<String>>()
        .join(", ");
    let mut sections = vec![
        render_gallows(state.drawing_stage()),
        render_word(&state.revealed_word()),
        format!(
            "Incorrect guesses: [{}] ({} left)",
            incorrect,
            state.remaining_guesses()
        ),
        render_keyboard(&state.keyboard()),
    ];
    if let Some(panel) = render_panel(state) {
        sections.push(panel);
    }
    sections.join("\n\n")
}
