use anyhow::{Context, Result};
use clap::Parser;
use number_guess::game::SessionResult;
use number_guess::modes::ConsoleMode;
use rand::{SeedableRng, rngs::StdRng};
use tokio::io::{BufReader, stdin, stdout};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "number_guess")]
#[command(version, about = "Guess a number between 1 and 20 in six tries")]
struct Cli {
    /// Seed for the secret number (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Tracing filter directive, e.g. "number_guess=debug"
    #[arg(long, default_value = "number_guess=warn")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the game text
    let filter = log_filter(std::env::var("RUST_LOG").ok().as_deref(), &cli.log_level)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let reader = BufReader::new(stdin());
    let result = match cli.seed {
        Some(seed) => {
            tracing::debug!(seed, "using seeded secret source");
            ConsoleMode::new(reader, stdout(), StdRng::seed_from_u64(seed))
                .run()
                .await?
        }
        None => {
            ConsoleMode::new(reader, stdout(), rand::thread_rng())
                .run()
                .await?
        }
    };

    match result {
        Some(SessionResult::Won(attempts)) => tracing::info!(attempts, "player won"),
        Some(SessionResult::Lost(secret)) => tracing::info!(secret, "player lost"),
        None => tracing::info!("no result"),
    }

    Ok(())
}

/// Build the log filter, preferring `RUST_LOG` over `--log-level`
fn log_filter(rust_log: Option<&str>, log_level: &str) -> Result<EnvFilter> {
    match rust_log {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("Invalid RUST_LOG directive '{}'", directives)),
        None => EnvFilter::try_new(log_level)
            .with_context(|| format!("Invalid --log-level directive '{}'", log_level)),
    }
}
