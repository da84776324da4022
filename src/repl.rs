//! Read-dispatch-print loop
//!
//! Reads one line at a time, splits it into words and hands them to the command
//! registry. Command failures are reported and the loop carries on; only failing
//! to read input or write output ends it with an error.

use std::io::{self, Write};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::app::App;
use crate::commands::{CommandError, CommandRegistry, Flow};

/// Printed before every input line
pub const PROMPT: &str = "Pokedex > ";

/// Errors that end the REPL
#[derive(Debug, Error)]
pub enum ReplError {
    #[error("Failed to read input: {0}")]
    Input(#[source] io::Error),

    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
}

/// Splits a line into whitespace-separated words. Case is preserved.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Runs the REPL until `exit` or end of input
///
/// # Arguments
/// * `registry` - Commands to dispatch to
/// * `app` - Session state shared by all commands
/// * `input` - Line source (stdin in the binary)
/// * `out` - Where prompts and command output are written
pub async fn run<R, W>(
    registry: &CommandRegistry,
    app: &mut App,
    input: R,
    out: &mut W,
) -> Result<(), ReplError>
where
    R: AsyncBufRead + Unpin,
    W: Write + Send,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT).map_err(ReplError::Output)?;
        out.flush().map_err(ReplError::Output)?;

        let Some(line) = lines.next_line().await.map_err(ReplError::Input)? else {
            // End of input: leave the terminal on a fresh line
            writeln!(out).map_err(ReplError::Output)?;
            return Ok(());
        };

        let words = clean_input(&line);
        if words.is_empty() {
            continue;
        }

        match registry.dispatch(app, &words, &mut *out).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => return Ok(()),
            Err(CommandError::UnknownCommand(_)) => {
                writeln!(out, "Unknown command").map_err(ReplError::Output)?;
            }
            Err(CommandError::Io(e)) => return Err(ReplError::Output(e)),
            Err(e) => {
                tracing::warn!(command = words[0].as_str(), error = %e, "command failed");
                writeln!(out, "Error: {}", e).map_err(ReplError::Output)?;
            }
        }
    }
}
