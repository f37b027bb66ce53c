use crate::demo;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_demo(ctx: CommandContext) -> Result<()> {
    let results = tokio::runtime::Runtime::new()?.block_on(demo::run(&ctx.schema));

    for (name, response) in results {
        tracing::debug!(operation = name, errors = response.errors.len(), "Demo operation finished");
        for error in &response.errors {
            eprintln!("{} {}: {}", "error:".red().bold(), name, error.message);
        }
        println!("{}", serde_json::to_string_pretty(&response.data)?);
    }
    Ok(())
}
