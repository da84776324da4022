//! `map` and `mapb`: paging through location areas

use async_trait::async_trait;
use std::io::Write;

use super::{Command, CommandContext, CommandError, Flow};
use crate::data::LocationAreaPage;

/// Shows the next page of location areas
pub struct MapCommand;

#[async_trait]
impl Command for MapCommand {
    fn name(&self) -> &'static str {
        "map"
    }

    fn description(&self) -> &'static str {
        "Shows the next 20 location areas. Repeat to keep paging forward."
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        if ctx.app.pagination.at_last_page() {
            writeln!(ctx.out, "you're on the last page")?;
            return Ok(Flow::Continue);
        }

        let next = ctx.app.pagination.next.clone();
        let page = ctx.app.client.list_location_areas(next.as_deref()).await?;
        show_page(ctx, &page)
    }
}

/// Shows the previous page of location areas
pub struct MapBackCommand;

#[async_trait]
impl Command for MapBackCommand {
    fn name(&self) -> &'static str {
        "mapb"
    }

    fn description(&self) -> &'static str {
        "Shows the previous 20 location areas."
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        let Some(previous) = ctx.app.pagination.previous.clone() else {
            writeln!(ctx.out, "you're on the first page")?;
            return Ok(Flow::Continue);
        };

        let page = ctx.app.client.list_location_areas(Some(&previous)).await?;
        show_page(ctx, &page)
    }
}

fn show_page(ctx: &mut CommandContext<'_>, page: &LocationAreaPage) -> Result<Flow, CommandError> {
    ctx.app.pagination.update(page);
    for area in &page.results {
        writeln!(ctx.out, "{}", area.name)?;
    }
    Ok(Flow::Continue)
}
