use std::cmp::Ordering;

/// Classification of a single accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuessOutcome {
    TooLow,
    TooHigh,
    Correct,
}

impl GuessOutcome {
    /// Compare a guess against the secret
    pub fn classify(guess: i64, secret: i64) -> Self {
        match guess.cmp(&secret) {
            Ordering::Less => GuessOutcome::TooLow,
            Ordering::Greater => GuessOutcome::TooHigh,
            Ordering::Equal => GuessOutcome::Correct,
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, GuessOutcome::Correct)
    }
}

/// Terminal value of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionResult {
    /// Secret found after this many accepted guesses
    Won(u32),
    /// Attempt budget exhausted; carries the secret that was never found
    Lost(i64),
}
