use super::{
    config::GameConfig,
    outcome::{GuessOutcome, SessionResult},
    random::SecretSource,
};
use crate::error::{GameError, GameResult};
use tracing::{debug, info};

/// One play-through: a secret, an attempt counter and the latest outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessingSession {
    player_name: String,
    secret: i64,
    attempts: u32,
    last_outcome: Option<GuessOutcome>,
    config: GameConfig,
}

impl GuessingSession {
    /// Start a session, drawing the secret from `source`
    ///
    /// Fails only if the source hands back a value outside the secret range.
    pub fn start(player_name: impl Into<String>, source: &mut impl SecretSource) -> GameResult<Self> {
        let config = GameConfig::default();
        let secret = source.draw(config.secret_range());
        Self::with_config(player_name.into(), secret, config)
    }

    /// Start a session around a known secret
    pub fn with_secret(player_name: impl Into<String>, secret: i64) -> GameResult<Self> {
        Self::with_config(player_name.into(), secret, GameConfig::default())
    }

    fn with_config(player_name: String, secret: i64, config: GameConfig) -> GameResult<Self> {
        if !config.contains(secret) {
            return Err(GameError::SecretOutOfRange {
                secret,
                min: config.min_secret,
                max: config.max_secret,
            });
        }

        info!(player = %player_name, "session started");

        Ok(Self {
            player_name,
            secret,
            attempts: 0,
            last_outcome: None,
            config,
        })
    }

    /// Parse and classify one guess
    ///
    /// A malformed guess is reported as [`GameError::InvalidInput`] and leaves
    /// the attempt counter untouched.
    pub fn submit_guess(&mut self, raw: &str) -> GameResult<GuessOutcome> {
        if self.is_terminal() {
            return Err(GameError::SessionFinished);
        }

        let trimmed = raw.trim();
        let guess: i64 = trimmed.parse().map_err(|source| GameError::InvalidInput {
            input: trimmed.to_string(),
            source,
        })?;

        self.attempts += 1;
        let outcome = GuessOutcome::classify(guess, self.secret);
        self.last_outcome = Some(outcome);

        debug!(attempt = self.attempts, guess, ?outcome, "guess classified");

        if let Some(result) = self.result() {
            info!(?result, "session finished");
        }

        Ok(outcome)
    }

    /// True after a correct guess or once the attempt budget is spent
    pub fn is_terminal(&self) -> bool {
        self.last_outcome.is_some_and(|outcome| outcome.is_correct())
            || self.attempts >= self.config.max_attempts
    }

    /// Final result, available only once the session is terminal
    pub fn result(&self) -> Option<SessionResult> {
        if !self.is_terminal() {
            return None;
        }

        match self.last_outcome {
            Some(GuessOutcome::Correct) => Some(SessionResult::Won(self.attempts)),
            _ => Some(SessionResult::Lost(self.secret)),
        }
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.config.max_attempts.saturating_sub(self.attempts)
    }

    pub fn last_outcome(&self) -> Option<GuessOutcome> {
        self.last_outcome
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
