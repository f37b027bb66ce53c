//! Data models for rosterql.
//!
//! - [`Player`]: a hockey player with a generated id and creation timestamp
//! - [`Tweet`]: a short titled post
//!
//! Both are plain values; nothing here is persisted.

mod player;
mod tweet;

pub use player::{PLAYER_ID_LENGTH, Player, generate_id};
pub use tweet::Tweet;
