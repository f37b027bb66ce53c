//! GraphQL schema and resolvers for rosterql.
//!
//! ## Usage
//!
//! ```bash
//! # Execute a query
//! rosterql query '{ isAdmin players(limit: 2) { jerseyname number } }'
//!
//! # Execute a mutation (wrapped in `mutation { }`)
//! rosterql mutate 'createPlayer(jerseyname: "Hunter") { player { id } }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `players`, `isAdmin`
//! - **Mutations**: `createPlayer`, `createTweet`

mod schema;
mod types;

pub use crate::roster::RequestContext;
pub use schema::{MutationRoot, QueryRoot, RosterSchema, build_schema, execute, parse_variables};
pub use types::*;
