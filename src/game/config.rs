use std::ops::RangeInclusive;

/// Rule constants for a guessing session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Smallest value the secret can take
    pub min_secret: i64,
    /// Largest value the secret can take
    pub max_secret: i64,
    /// Number of accepted guesses before the session is lost
    pub max_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_secret: 1,
            max_secret: 20,
            max_attempts: 6,
        }
    }
}

impl GameConfig {
    /// Closed range the secret is drawn from
    pub fn secret_range(&self) -> RangeInclusive<i64> {
        self.min_secret..=self.max_secret
    }

    pub fn contains(&self, value: i64) -> bool {
        self.secret_range().contains(&value)
    }
}
