use crate::domain::ValidationError;

pub const REJECTION_FALLBACK: &str = "Failed to update password.";
pub const TRANSPORT_MESSAGE: &str = "Connection error while updating password.";

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Message(String),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Tera(#[from] tera::Error),

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}

impl Error {
    pub fn string(s: &str) -> Self {
        Self::Message(s.to_string())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("password update rejected with status {status}")]
    RemoteRejection {
        status: u16,
        message: Option<String>,
    },

    #[error("failed to reach the password update endpoint")]
    Transport(#[source] BoxError),
}

impl SubmitError {
    pub fn transport<E>(e: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Transport(e.into())
    }

    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Validation(e) => e.to_string(),
            SubmitError::RemoteRejection { message, .. } => message
                .clone()
                .unwrap_or_else(|| REJECTION_FALLBACK.to_string()),
            SubmitError::Transport(_) => TRANSPORT_MESSAGE.to_string(),
        }
    }
}
