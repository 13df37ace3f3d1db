//! Console front end for the pipeline.
//!
//! Reads lines from stdin and runs them through a real [`Pipeline`] with
//! the Mistral backend and a logging transport. Slash commands work as in
//! chat; a line like `lang_fr` simulates pressing a language button.
//!
//! Requires `MISTRAL_API_KEY` (a `.env` file is honored).
//!
//! ```sh
//! cargo run --example console_bot
//! ```

use std::io::{self, BufRead, Write};

use database::Database;
use mistral_brain::MistralBrain;
use orchestrator::{Command, LoggingTransport, Pipeline};

const USER_ID: i64 = 1;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let db = Database::connect("sqlite:marhaba.db?mode=rwc").await?;
    db.migrate().await?;

    let backend = MistralBrain::from_env()?;
    let pipeline = Pipeline::new(db.clone(), backend, LoggingTransport);

    println!("Marhaba console bot. Type messages, /help for commands, Ctrl-D to quit.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with("lang_") {
            pipeline.handle_callback(USER_ID, 0, line).await?;
        } else if let Some(command) = Command::parse(line) {
            pipeline.handle_command(USER_ID, command).await?;
        } else {
            pipeline.handle_message(USER_ID, line).await?;
        }
    }

    db.close().await;
    Ok(())
}
