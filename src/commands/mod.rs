//! REPL commands
//!
//! Each command is a value implementing [`Command`]. A [`CommandRegistry`] is built
//! once at startup and handed to the REPL, which looks commands up by the first
//! word of each input line.

mod explore;
mod general;
mod map;
mod pokemon;

pub use explore::ExploreCommand;
pub use general::{ExitCommand, HelpCommand};
pub use map::{MapBackCommand, MapCommand};
pub use pokemon::{CatchCommand, InspectCommand, PokedexCommand};

use async_trait::async_trait;
use std::io::Write;
use thiserror::Error;

use crate::app::App;
use crate::data::ApiError;

/// Errors a command can report back to the REPL
#[derive(Debug, Error)]
pub enum CommandError {
    /// No command is registered under this name
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A required argument was not given
    #[error("Missing argument. Usage: {usage}")]
    MissingArgument { usage: &'static str },

    /// Fetching from the API failed
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Writing to the output failed
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// What the REPL should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Everything a command may touch while it runs
pub struct CommandContext<'a> {
    /// Words after the command name
    pub args: &'a [String],
    /// Session state
    pub app: &'a mut App,
    /// The registry the command was dispatched from
    pub registry: &'a CommandRegistry,
    /// Where user-facing output goes
    pub out: &'a mut (dyn Write + Send),
}

impl<'a> CommandContext<'a> {
    /// The first argument, if any. Further arguments are ignored.
    pub fn arg(&self) -> Option<&'a str> {
        self.args.first().map(String::as_str)
    }

    /// The first argument, or a `MissingArgument` error carrying `usage`
    pub fn required_arg(&self, usage: &'static str) -> Result<&'a str, CommandError> {
        self.arg().ok_or(CommandError::MissingArgument { usage })
    }
}

/// A REPL command
#[async_trait]
pub trait Command: Send + Sync {
    /// The word that invokes the command
    fn name(&self) -> &'static str;

    /// One-line description shown by `help`
    fn description(&self) -> &'static str;

    /// How to invoke the command, reported when a required argument is missing
    fn usage(&self) -> &'static str {
        self.name()
    }

    /// Runs the command
    async fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError>;
}

/// Commands available to the REPL, in registration order
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in command
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(HelpCommand);
        registry.register(ExitCommand);
        registry.register(MapCommand);
        registry.register(MapBackCommand);
        registry.register(ExploreCommand);
        registry.register(CatchCommand);
        registry.register(InspectCommand);
        registry.register(PokedexCommand);
        registry
    }

    /// Adds a command, replacing any command already registered under its name
    pub fn register(&mut self, command: impl Command + 'static) {
        let command: Box<dyn Command> = Box::new(command);
        match self.commands.iter_mut().find(|c| c.name() == command.name()) {
            Some(existing) => *existing = command,
            None => self.commands.push(command),
        }
    }

    /// Looks up a command by exact name
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
    }

    /// Registered commands in registration order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.iter().map(|c| c.as_ref())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Runs the command named by `words[0]` with the remaining words as arguments
    ///
    /// # Returns
    /// * `Ok(Flow)` - What the REPL should do next
    /// * `Err(CommandError::UnknownCommand)` - If no command has that name
    /// * `Err(CommandError)` - Any error reported by the command itself
    pub async fn dispatch(
        &self,
        app: &mut App,
        words: &[String],
        out: &mut (dyn Write + Send),
    ) -> Result<Flow, CommandError> {
        let Some((name, args)) = words.split_first() else {
            return Ok(Flow::Continue);
        };
        let command = self
            .get(name)
            .ok_or_else(|| CommandError::UnknownCommand(name.clone()))?;

        tracing::debug!(command = name.as_str(), ?args, "dispatching");
        let mut ctx = CommandContext {
            args,
            app,
            registry: self,
            out,
        };
        command.execute(&mut ctx).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Helpers for driving commands without a network

    use super::*;
    use crate::cache::Cache;
    use crate::data::PokeApiClient;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    /// Base URL nothing listens on; tests must serve every request from the cache
    pub const OFFLINE_BASE_URL: &str = "http://127.0.0.1:1/api/v2";

    pub fn offline_app() -> App {
        let cache = Cache::new(Duration::from_secs(60)).expect("Failed to create cache");
        let client = PokeApiClient::with_base_url(cache, OFFLINE_BASE_URL);
        App::with_rng(client, StdRng::seed_from_u64(42))
    }

    /// Splits `line` into words and dispatches it, returning the flow and the output
    pub async fn run_line(
        registry: &CommandRegistry,
        app: &mut App,
        line: &str,
    ) -> (Result<Flow, CommandError>, String) {
        let words = crate::repl::clean_input(line);
        let mut out = Vec::new();
        let result = registry.dispatch(app, &words, &mut out).await;
        (result, String::from_utf8(out).expect("output should be UTF-8"))
    }

    pub fn pokemon_json(name: &str, base_experience: u32) -> String {
        serde_json::json!({
            "name": name,
            "base_experience": base_experience,
            "height": 3,
            "weight": 18,
            "stats": [
                {"base_stat": 40, "stat": {"name": "hp", "url": ""}},
                {"base_stat": 45, "stat": {"name": "attack", "url": ""}}
            ],
            "types": [{"slot": 1, "type": {"name": "normal", "url": ""}}]
        })
        .to_string()
    }
}
