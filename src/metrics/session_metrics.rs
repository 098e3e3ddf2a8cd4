use std::time::{Duration, Instant};

use crate::game::SessionResult;

/// Per-guess timing and rejected-input counts for one console session
pub struct SessionMetrics {
    prompted_at: Option<Instant>,
    pub guess_latencies: Vec<Duration>,
    pub rejected_inputs: u32,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            prompted_at: None,
            guess_latencies: Vec::new(),
            rejected_inputs: 0,
        }
    }

    /// Mark the moment the player was asked for a guess
    pub fn on_prompt(&mut self) {
        self.prompted_at = Some(Instant::now());
    }

    /// Record how long the player took since the last prompt
    pub fn on_guess_accepted(&mut self) {
        if let Some(prompted_at) = self.prompted_at.take() {
            self.guess_latencies.push(prompted_at.elapsed());
        }
    }

    pub fn on_rejected_input(&mut self) {
        self.rejected_inputs += 1;
        self.prompted_at = None;
    }

    pub fn average_latency(&self) -> Option<Duration> {
        let count = u32::try_from(self.guess_latencies.len()).ok()?;
        if count == 0 {
            return None;
        }
        Some(self.guess_latencies.iter().sum::<Duration>() / count)
    }

    pub fn slowest_guess(&self) -> Option<Duration> {
        self.guess_latencies.iter().max().copied()
    }

    pub fn on_session_end(&self, result: Option<SessionResult>) {
        tracing::info!(
            ?result,
            guesses = self.guess_latencies.len(),
            average_latency = ?self.average_latency(),
            slowest_guess = ?self.slowest_guess(),
            rejected_inputs = self.rejected_inputs,
            "session summary"
        );
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latency_summary() {
        let mut metrics = SessionMetrics::new();
        assert_eq!(metrics.average_latency(), None);
        assert_eq!(metrics.slowest_guess(), None);

        metrics.guess_latencies = vec![
            Duration::from_millis(400),
            Duration::from_millis(1_600),
            Duration::from_millis(1_000),
        ];
        assert_eq!(metrics.average_latency(), Some(Duration::from_secs(1)));
        assert_eq!(metrics.slowest_guess(), Some(Duration::from_millis(1_600)));
    }

    #[test]
    fn test_guess_recorded_only_after_prompt() {
        let mut metrics = SessionMetrics::new();
        metrics.on_guess_accepted();
        assert!(metrics.guess_latencies.is_empty());

        metrics.on_prompt();
        metrics.on_guess_accepted();
        assert_eq!(metrics.guess_latencies.len(), 1);

        // A guess without a fresh prompt is not timed twice
        metrics.on_guess_accepted();
        assert_eq!(metrics.guess_latencies.len(), 1);
    }

    #[test]
    fn test_rejected_input_discards_pending_prompt() {
        let mut metrics = SessionMetrics::new();
        metrics.on_prompt();
        metrics.on_rejected_input();
        metrics.on_guess_accepted();

        assert_eq!(metrics.rejected_inputs, 1);
        assert!(metrics.guess_latencies.is_empty());
    }
}
