use crate::game::{GameConfig, GuessOutcome, GuessingSession, SessionResult};

pub fn greeting() -> &'static str {
    "Hello! What is your name?"
}

pub fn intro(name: &str, config: &GameConfig) -> String {
    format!(
        "Well, {}, I am thinking of a number between {} and {}.",
        name, config.min_secret, config.max_secret
    )
}

pub fn round_prompt() -> &'static str {
    "Take a guess."
}

pub fn invalid_input(raw: &str) -> String {
    format!("That is not a whole number: '{}'.", raw)
}

/// Text printed after an accepted guess
///
/// A correct guess is announced with the win message; the other outcomes only
/// say which way the guess was off.
pub fn outcome(session: &GuessingSession, outcome: GuessOutcome) -> String {
    match outcome {
        GuessOutcome::TooLow => "Your guess is too low.".to_string(),
        GuessOutcome::TooHigh => "Your guess is too high.".to_string(),
        GuessOutcome::Correct => won(session.player_name(), session.attempts()),
    }
}

pub fn won(name: &str, attempts: u32) -> String {
    format!(
        "Good job, {}! You guessed my number in {} guesses!",
        name, attempts
    )
}

pub fn lost(secret: i64) -> String {
    format!("Nope. The number I was thinking of was {}.", secret)
}

/// Closing line for a finished session, if one is still owed
///
/// Wins are already announced by [`outcome`], so only a loss needs a line.
pub fn closing(result: SessionResult) -> Option<String> {
    match result {
        SessionResult::Won(_) => None,
        SessionResult::Lost(secret) => Some(lost(secret)),
    }
}
