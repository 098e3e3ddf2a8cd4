use anyhow::{Context, Result};
use std::future::Future;
use std::pin::Pin;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::game::{GuessingSession, SecretSource, SessionResult};
use crate::metrics::SessionMetrics;
use crate::render::messages;

/// Line-oriented console driver for a single guessing session
pub struct ConsoleMode<R, W, S> {
    reader: R,
    writer: W,
    source: S,
    metrics: SessionMetrics,
}

impl<R, W, S> ConsoleMode<R, W, S>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    S: SecretSource,
{
    pub fn new(reader: R, writer: W, source: S) -> Self {
        Self {
            reader,
            writer,
            source,
            metrics: SessionMetrics::new(),
        }
    }

    /// Play one session to completion, stopping early on Ctrl+C
    ///
    /// Returns `None` when input ends or Ctrl+C arrives before the session
    /// reaches a terminal state.
    pub async fn run(&mut self) -> Result<Option<SessionResult>> {
        self.run_until(tokio::signal::ctrl_c()).await
    }

    /// Play one session, abandoning it once `interrupt` resolves
    ///
    /// The interrupt is polled for the whole session, so one that fires while
    /// output is being written is seen at the next read.
    pub async fn run_until<F: Future>(&mut self, interrupt: F) -> Result<Option<SessionResult>> {
        tokio::pin!(interrupt);

        self.write_line(messages::greeting()).await?;
        let Some(name) = self.read_line(interrupt.as_mut()).await? else {
            return Ok(self.finish(None));
        };

        let mut session = GuessingSession::start(name, &mut self.source)
            .context("Failed to start session")?;
        self.write_line(&messages::intro(session.player_name(), session.config()))
            .await?;

        while !session.is_terminal() {
            self.write_line(messages::round_prompt()).await?;
            self.metrics.on_prompt();
            let Some(line) = self.read_line(interrupt.as_mut()).await? else {
                return Ok(self.finish(None));
            };

            match session.submit_guess(&line) {
                Ok(outcome) => {
                    self.metrics.on_guess_accepted();
                    self.write_line(&messages::outcome(&session, outcome))
                        .await?;
                }
                Err(err) if err.is_recoverable() => {
                    debug!(%err, "rejected guess");
                    self.metrics.on_rejected_input();
                    self.write_line(&messages::invalid_input(line.trim()))
                        .await?;
                }
                Err(err) => return Err(err).context("Failed to submit guess"),
            }
        }

        let result = session.result();
        if let Some(closing) = result.and_then(messages::closing) {
            self.write_line(&closing).await?;
        }

        Ok(self.finish(result))
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn finish(&mut self, result: Option<SessionResult>) -> Option<SessionResult> {
        if result.is_none() {
            info!("session abandoned");
        }
        self.metrics.on_session_end(result);
        result
    }

    /// Read one line, or `None` on end of input or interrupt
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected, so a
    /// garbled guess reaches the session and is re-prompted like any other
    /// malformed guess.
    async fn read_line<F: Future>(&mut self, interrupt: Pin<&mut F>) -> Result<Option<String>> {
        let mut bytes = Vec::new();

        tokio::select! {
            biased;

            _ = interrupt => {
                return Ok(None);
            }

            read = self.reader.read_until(b'\n', &mut bytes) => {
                let count = read.context("Failed to read from console")?;
                if count == 0 {
                    return Ok(None);
                }
            }
        }

        let line = String::from_utf8_lossy(&bytes);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    async fn write_line(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_all(format!("{}\n", text).as_bytes())
            .await
            .context("Failed to write to console")?;
        self.writer
            .flush()
            .await
            .context("Failed to flush console")?;
        Ok(())
    }
}
