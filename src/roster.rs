//! Resolver core: the fixed roster and the four schema operations as plain
//! functions. The GraphQL layer only adapts these to async-graphql.

use crate::error::{Result, RosterError};
use crate::model::{Player, Tweet};

/// The predefined players returned by `players`, in order.
pub const ROSTER: [(&str, i32); 3] = [("Gretzky", 99), ("Kane", 9), ("Niemi", 31)];

/// Per-request ambient data handed to every resolver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub is_anonymous: bool,
}

impl RequestContext {
    pub fn anonymous() -> Self {
        Self { is_anonymous: true }
    }

    pub fn authenticated() -> Self {
        Self {
            is_anonymous: false,
        }
    }
}

pub fn is_admin(_ctx: &RequestContext) -> bool {
    true
}

/// Returns the roster, truncated to `limit` entries when given.
pub fn players(limit: Option<usize>) -> Vec<Player> {
    let limit = limit.unwrap_or(ROSTER.len());
    tracing::debug!(limit, "Resolving players");
    ROSTER
        .iter()
        .take(limit)
        .map(|(name, number)| Player::new(Some((*name).to_string())).with_number(*number))
        .collect()
}

pub fn create_player(jerseyname: Option<String>) -> Player {
    let player = Player::new(jerseyname);
    tracing::info!(id = %player.id, jerseyname = ?player.jerseyname, "Creating player");
    player
}

/// Builds a tweet unless the request is anonymous.
pub fn create_tweet(ctx: &RequestContext, title: String, content: String) -> Result<Tweet> {
    if ctx.is_anonymous {
        tracing::warn!(title = %title, "Rejecting tweet from anonymous caller");
        return Err(RosterError::AuthenticationRequired);
    }
    tracing::info!(title = %title, "Creating tweet");
    Ok(Tweet::new(title, content))
}
