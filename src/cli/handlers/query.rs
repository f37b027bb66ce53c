use anyhow::Result;

use super::{CommandContext, run_and_print};

pub fn handle_query(
    ctx: CommandContext,
    query: String,
    variables: Option<String>,
    anonymous: bool,
) -> Result<()> {
    run_and_print(&ctx, &query, variables, anonymous)
}
