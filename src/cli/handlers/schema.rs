use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use super::CommandContext;

pub fn handle_schema(ctx: CommandContext, output: Option<PathBuf>) -> Result<()> {
    let sdl = ctx.schema.sdl();

    match output {
        Some(path) => {
            std::fs::write(&path, &sdl)
                .with_context(|| format!("Failed to write schema to {}", path.display()))?;
            println!(
                "{} schema to {} ({} bytes)",
                "Exported".green(),
                path.display(),
                sdl.len()
            );
        }
        None => print!("{}", sdl),
    }
    Ok(())
}
