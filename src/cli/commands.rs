use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rosterql")]
#[command(
    author,
    version,
    about = "Run GraphQL operations against an in-memory players and tweets schema"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .rosterql.yml by default)
    #[arg(long, global = true, env = "ROSTERQL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default .rosterql.yml in the current directory
    Init,

    /// Execute a GraphQL query
    #[command(visible_alias = "q")]
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,

        /// Execute as an anonymous caller
        #[arg(long)]
        anonymous: bool,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    #[command(visible_alias = "m")]
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,

        /// Execute as an anonymous caller
        #[arg(long)]
        anonymous: bool,
    },

    /// Run the bundled example operations and print their results
    Demo,

    /// Print the schema in SDL form
    Schema {
        /// Write the SDL to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
