//! `explore`: list the pokemon found in a location area

use async_trait::async_trait;
use std::io::Write;

use super::{Command, CommandContext, CommandError, Flow};
use crate::data::ApiError;

pub struct ExploreCommand;

#[async_trait]
impl Command for ExploreCommand {
    fn name(&self) -> &'static str {
        "explore"
    }

    fn description(&self) -> &'static str {
        "Lists the pokemon in a location area. Usage: explore <location_area>"
    }

    fn usage(&self) -> &'static str {
        "explore <location_area>"
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        let area_name = ctx.required_arg(self.usage())?;
        writeln!(ctx.out, "Exploring {}...", area_name)?;

        let area = match ctx.app.client.get_location_area(area_name).await {
            Ok(area) => area,
            Err(ApiError::NotFound { .. }) => {
                writeln!(ctx.out, "{} is not a known location area", area_name)?;
                return Ok(Flow::Continue);
            }
            Err(e) => return Err(e.into()),
        };

        writeln!(ctx.out, "Found Pokemon:")?;
        for encounter in &area.pokemon_encounters {
            writeln!(ctx.out, " - {}", encounter.pokemon.name)?;
        }
        Ok(Flow::Continue)
    }
}
