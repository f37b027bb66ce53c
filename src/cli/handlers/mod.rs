mod demo;
mod init;
mod mutate;
mod query;
mod schema;

pub use demo::handle_demo;
pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;

use crate::config::RosterConfig;
use crate::graphql::{RosterSchema, build_schema};
use anyhow::Result;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: RosterConfig,
    pub schema: RosterSchema,
}

impl CommandContext {
    pub fn new(config: RosterConfig) -> Self {
        let schema = build_schema(&config.schema);
        Self { config, schema }
    }
}

/// Executes one operation and prints the full JSON response.
fn run_and_print(
    ctx: &CommandContext,
    query: &str,
    variables: Option<String>,
    anonymous: bool,
) -> Result<()> {
    use colored::Colorize;

    let vars = crate::graphql::parse_variables(variables.as_deref())?;
    let context = ctx.config.request_context(anonymous);
    let response = tokio::runtime::Runtime::new()?.block_on(crate::graphql::execute(
        &ctx.schema,
        query,
        vars,
        context,
    ));

    for error in &response.errors {
        eprintln!("{} {}", "error:".red().bold(), error.message);
    }
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
