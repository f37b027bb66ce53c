use crate::model::{Player as ModelPlayer, Tweet as ModelTweet};
use async_graphql::{ID, SimpleObject};

#[derive(SimpleObject, Clone)]
pub struct Player {
    pub id: ID,
    pub number: Option<i32>,
    pub jerseyname: Option<String>,
    pub created_at: String,
}

impl From<ModelPlayer> for Player {
    fn from(p: ModelPlayer) -> Self {
        Self {
            id: ID(p.id),
            number: p.number,
            jerseyname: p.jerseyname,
            created_at: p.created_at.to_rfc3339(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct Tweet {
    pub title: String,
    pub content: String,
}

impl From<ModelTweet> for Tweet {
    fn from(t: ModelTweet) -> Self {
        Self {
            title: t.title,
            content: t.content,
        }
    }
}

/// Payload of the `createPlayer` mutation.
#[derive(SimpleObject)]
pub struct CreatePlayer {
    pub player: Player,
}

/// Payload of the `createTweet` mutation.
#[derive(SimpleObject)]
pub struct CreateTweet {
    pub tweet: Tweet,
}
