//! The three canonical operations: a limited players query, a player
//! creation, and a tweet attempt from an anonymous caller.

use async_graphql::{Response, Variables};
use serde_json::json;

use crate::graphql::{RosterSchema, execute};
use crate::roster::RequestContext;

pub const PLAYERS_QUERY: &str = r#"
query ($limit: Int) {
    isAdmin
    players(limit: $limit) {
        id
        number
        jerseyname
        createdAt
    }
}
"#;

pub const CREATE_PLAYER_MUTATION: &str = r#"
mutation ($jerseyname: String) {
    createPlayer(jerseyname: $jerseyname) {
        player {
            id
            number
            jerseyname
            createdAt
        }
    }
}
"#;

pub const CREATE_TWEET_MUTATION: &str = r#"
mutation {
    createTweet(title: "Hello", content: "World") {
        tweet {
            title
            content
        }
    }
}
"#;

pub struct DemoOperation {
    pub name: &'static str,
    pub query: &'static str,
    pub variables: serde_json::Value,
    pub context: RequestContext,
}

pub fn operations() -> Vec<DemoOperation> {
    vec![
        DemoOperation {
            name: "players",
            query: PLAYERS_QUERY,
            variables: json!({ "limit": 2 }),
            context: RequestContext::default(),
        },
        DemoOperation {
            name: "createPlayer",
            query: CREATE_PLAYER_MUTATION,
            variables: json!({ "jerseyname": "Hunter" }),
            context: RequestContext::default(),
        },
        DemoOperation {
            name: "createTweet",
            query: CREATE_TWEET_MUTATION,
            variables: json!({}),
            context: RequestContext::anonymous(),
        },
    ]
}

/// Runs every demo operation in order and returns `(name, response)` pairs.
pub async fn run(schema: &RosterSchema) -> Vec<(&'static str, Response)> {
    let mut results = Vec::new();
    for op in operations() {
        let response = execute(
            schema,
            op.query,
            Variables::from_json(op.variables),
            op.context,
        )
        .await;
        results.push((op.name, response));
    }
    results
}
