//! `help` and `exit`

use async_trait::async_trait;
use std::io::Write;

use super::{Command, CommandContext, CommandError, Flow};

/// Lists every registered command
pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "Displays a help message"
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        let registry = ctx.registry;
        writeln!(ctx.out, "Welcome to the Pokedex!")?;
        writeln!(ctx.out, "Usage:")?;
        writeln!(ctx.out)?;
        for command in registry.iter() {
            writeln!(ctx.out, "{}: {}", command.name(), command.description())?;
        }
        Ok(Flow::Continue)
    }
}

/// Ends the session
pub struct ExitCommand;

#[async_trait]
impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn description(&self) -> &'static str {
        "Exit the Pokedex"
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        writeln!(ctx.out, "Closing the Pokedex... Goodbye!")?;
        Ok(Flow::Exit)
    }
}
