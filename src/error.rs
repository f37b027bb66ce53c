use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Not Authenticated")]
    AuthenticationRequired,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid variables: {0}")]
    InvalidVariables(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Log file error: {0}")]
    LogFile(#[from] tracing_appender::rolling::InitError),
}

impl RosterError {
    /// Machine-readable code attached to GraphQL errors under `extensions.code`.
    pub fn code(&self) -> &'static str {
        match self {
            RosterError::AuthenticationRequired => "UNAUTHENTICATED",
            RosterError::InvalidVariables(_) => "BAD_USER_INPUT",
            _ => "INTERNAL",
        }
    }
}

impl ErrorExtensions for RosterError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
