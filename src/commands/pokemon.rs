//! `catch`, `inspect` and `pokedex`

use async_trait::async_trait;
use std::io::Write;

use super::{Command, CommandContext, CommandError, Flow};
use crate::data::ApiError;
use crate::pokedex::{catch_succeeds, roll_catch};

/// Throws a Pokeball; stronger pokemon escape more often
pub struct CatchCommand;

#[async_trait]
impl Command for CatchCommand {
    fn name(&self) -> &'static str {
        "catch"
    }

    fn description(&self) -> &'static str {
        "Attempts to catch a pokemon. Usage: catch <pokemon>"
    }

    fn usage(&self) -> &'static str {
        "catch <pokemon>"
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        let name = ctx.required_arg(self.usage())?;
        writeln!(ctx.out, "Throwing a Pokeball at {}...", name)?;

        let pokemon = match ctx.app.client.get_pokemon(name).await {
            Ok(pokemon) => pokemon,
            Err(ApiError::NotFound { .. }) => {
                writeln!(ctx.out, "{} is not a known pokemon", name)?;
                return Ok(Flow::Continue);
            }
            Err(e) => return Err(e.into()),
        };

        let roll = roll_catch(&mut ctx.app.rng);
        tracing::debug!(
            pokemon = pokemon.name.as_str(),
            base_experience = pokemon.base_experience,
            roll,
            "catch attempt"
        );

        if catch_succeeds(pokemon.base_experience, roll) {
            writeln!(ctx.out, "{} was caught!", pokemon.name)?;
            writeln!(ctx.out, "You may now inspect it with the inspect command.")?;
            ctx.app.pokedex.add(pokemon);
        } else {
            writeln!(ctx.out, "{} escaped!", pokemon.name)?;
        }
        Ok(Flow::Continue)
    }
}

/// Shows details of a caught pokemon
pub struct InspectCommand;

#[async_trait]
impl Command for InspectCommand {
    fn name(&self) -> &'static str {
        "inspect"
    }

    fn description(&self) -> &'static str {
        "Shows details of a caught pokemon. Usage: inspect <pokemon>"
    }

    fn usage(&self) -> &'static str {
        "inspect <pokemon>"
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        let name = ctx.required_arg(self.usage())?;
        let Some(pokemon) = ctx.app.pokedex.get(name) else {
            writeln!(ctx.out, "you have not caught that pokemon")?;
            return Ok(Flow::Continue);
        };

        writeln!(ctx.out, "Name: {}", pokemon.name)?;
        writeln!(ctx.out, "Height: {}", pokemon.height)?;
        writeln!(ctx.out, "Weight: {}", pokemon.weight)?;
        writeln!(ctx.out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(ctx.out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(ctx.out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(ctx.out, "  - {}", kind.kind.name)?;
        }
        Ok(Flow::Continue)
    }
}

/// Lists every caught pokemon
pub struct PokedexCommand;

#[async_trait]
impl Command for PokedexCommand {
    fn name(&self) -> &'static str {
        "pokedex"
    }

    fn description(&self) -> &'static str {
        "Lists the pokemon you have caught"
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        if ctx.app.pokedex.is_empty() {
            writeln!(ctx.out, "You haven't caught any Pokemon yet.")?;
            return Ok(Flow::Continue);
        }

        writeln!(ctx.out, "Your Pokedex:")?;
        for pokemon in ctx.app.pokedex.iter() {
            writeln!(ctx.out, " - {}", pokemon.name)?;
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::super::CommandRegistry;
    use super::*;
    use crate::app::App;

    fn seed_pokemon(app: &App, name: &str, base_experience: u32) {
        let url = app.client.pokemon_url(name);
        app.client.cache().add(url, pokemon_json(name, base_experience));
    }

    #[tokio::test]
    async fn test_catch_weak_pokemon_always_succeeds() {
        let registry = CommandRegistry::with_defaults();
        let mut app = offline_app();
        seed_pokemon(&app, "magikarp", 0);

        let (result, output) = run_line(&registry, &mut app, "catch magikarp").await;

        assert_eq!(result.unwrap(), Flow::Continue);
        assert!(output.starts_with("Throwing a Pokeball at magikarp...\n"));
        assert!(output.contains("magikarp was caught!"));
        assert!(app.pokedex.contains("magikarp"));
    }

    #[tokio::test]
    async fn test_catch_strong_pokemon_always_escapes() {
        let registry = CommandRegistry::with_defaults();
        let mut app = offline_app();
        seed_pokemon(&app, "mewtwo", 400);

        let (result, output) = run_line(&registry, &mut app, "catch mewtwo").await;

        assert_eq!(result.unwrap(), Flow::Continue);
        assert!(output.contains("mewtwo escaped!"));
        assert!(app.pokedex.is_empty());
    }

    #[tokio::test]
    async fn test_catch_without_argument() {
        let registry = CommandRegistry::with_defaults();
        let mut app = offline_app();

        let (result, _) = run_line(&registry, &mut app, "catch").await;

        assert!(matches!(result, Err(CommandError::MissingArgument { .. })));
    }

    #[tokio::test]
    async fn test_catch_network_failure_is_error() {
        let registry = CommandRegistry::with_defaults();
        let mut app = offline_app();

        let (result, output) = run_line(&registry, &mut app, "catch pidgey").await;

        assert!(matches!(result, Err(CommandError::Api(_))));
        assert_eq!(output, "Throwing a Pokeball at pidgey...\n");
    }

    #[tokio::test]
    async fn test_inspect_uncaught_pokemon() {
        let registry = CommandRegistry::with_defaults();
        let mut app = offline_app();

        let (result, output) = run_line(&registry, &mut app, "inspect pidgey").await;

        assert_eq!(result.unwrap(), Flow::Continue);
        assert_eq!(output, "you have not caught that pokemon\n");
    }

    #[tokio::test]
    async fn test_inspect_caught_pokemon() {
        let registry = CommandRegistry::with_defaults();
        let mut app = offline_app();
        seed_pokemon(&app, "pidgey", 0);
        run_line(&registry, &mut app, "catch pidgey").await.0.unwrap();

        let (result, output) = run_line(&registry, &mut app, "inspect pidgey").await;

        assert_eq!(result.unwrap(), Flow::Continue);
        assert_eq!(
            output,
            "Name: pidgey\nHeight: 3\nWeight: 18\nStats:\n  -hp: 40\n  -attack: 45\nTypes:\n  - normal\n"
        );
    }

    #[tokio::test]
    async fn test_pokedex_empty_and_filled() {
        let registry = CommandRegistry::with_defaults();
        let mut app = offline_app();

        let (_, output) = run_line(&registry, &mut app, "pokedex").await;
        assert_eq!(output, "You haven't caught any Pokemon yet.\n");

        seed_pokemon(&app, "pidgey", 0);
        seed_pokemon(&app, "caterpie", 0);
        run_line(&registry, &mut app, "catch pidgey").await.0.unwrap();
        run_line(&registry, &mut app, "catch caterpie").await.0.unwrap();

        let (_, output) = run_line(&registry, &mut app, "pokedex").await;
        assert_eq!(output, "Your Pokedex:\n - caterpie\n - pidgey\n");
    }
}
