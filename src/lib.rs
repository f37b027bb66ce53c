//! # rosterql - an in-memory GraphQL schema for players and tweets
//!
//! rosterql declares two object types (`Player`, `Tweet`), a query root with
//! `players` and `isAdmin`, and a mutation root with `createPlayer` and
//! `createTweet`. Everything is built per request; nothing is stored.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the bundled example operations
//! rosterql demo
//!
//! # Query the roster
//! rosterql query '{ players(limit: 2) { jerseyname number } }'
//!
//! # Anonymous callers cannot tweet
//! rosterql mutate --anonymous 'createTweet(title: "Hi", content: "There") { tweet { title } }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Optional `.rosterql.yml` configuration
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: async-graphql schema and request execution
//! - [`model`]: Plain data records (`Player`, `Tweet`)
//! - [`roster`]: Resolver core and the request context

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles `.rosterql.yml` discovery and defaults.
pub mod config;

/// The bundled example operations.
pub mod demo;

/// Error types and result aliases.
///
/// Defines `RosterError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
pub mod graphql;

pub mod logging;

/// Data models: `Player` and `Tweet`.
pub mod model;

pub mod roster;
