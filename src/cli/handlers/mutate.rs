use anyhow::Result;

use super::{CommandContext, run_and_print};

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
    anonymous: bool,
) -> Result<()> {
    // Auto-wrap in mutation { }
    let query = format!("mutation {{ {} }}", mutation);
    run_and_print(&ctx, &query, variables, anonymous)
}
