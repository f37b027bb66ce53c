use async_graphql::{
    Context, EmptySubscription, ErrorExtensions, Object, Request, Response, Schema, Variables,
};

use crate::config::SchemaSettings;
use crate::error::{Result, RosterError};
use crate::roster::{self, RequestContext};

use super::types::*;

pub type RosterSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(settings: &SchemaSettings) -> RosterSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .limit_depth(settings.limit_depth)
        .limit_complexity(settings.limit_complexity)
        .finish()
}

/// Parses a JSON object of variables; `None` yields no variables.
pub fn parse_variables(variables: Option<&str>) -> Result<Variables> {
    match variables {
        Some(v) => {
            serde_json::from_str(v).map_err(|e| RosterError::InvalidVariables(e.to_string()))
        }
        None => Ok(Variables::default()),
    }
}

/// Executes one operation with the given request context attached.
pub async fn execute(
    schema: &RosterSchema,
    query: &str,
    variables: Variables,
    context: RequestContext,
) -> Response {
    tracing::debug!(is_anonymous = context.is_anonymous, "Executing GraphQL request");
    let request = Request::new(query).variables(variables).data(context);
    let response = schema.execute(request).await;
    if !response.errors.is_empty() {
        tracing::debug!(errors = response.errors.len(), "GraphQL request returned errors");
    }
    response
}

fn request_context(ctx: &Context<'_>) -> RequestContext {
    ctx.data_opt::<RequestContext>().copied().unwrap_or_default()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// List the predefined players, optionally truncated to `limit`
    async fn players(&self, limit: Option<usize>) -> Vec<Player> {
        roster::players(limit).into_iter().map(Into::into).collect()
    }

    /// Whether the caller is an administrator (always true)
    async fn is_admin(&self, ctx: &Context<'_>) -> bool {
        roster::is_admin(&request_context(ctx))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a new in-memory player
    async fn create_player(&self, jerseyname: Option<String>) -> CreatePlayer {
        CreatePlayer {
            player: roster::create_player(jerseyname).into(),
        }
    }

    /// Create a new in-memory tweet; anonymous callers are rejected
    async fn create_tweet(
        &self,
        ctx: &Context<'_>,
        title: String,
        content: String,
    ) -> async_graphql::Result<Option<CreateTweet>> {
        let tweet = roster::create_tweet(&request_context(ctx), title, content)
            .map_err(|e| e.extend())?;
        Ok(Some(CreateTweet {
            tweet: tweet.into(),
        }))
    }
}
