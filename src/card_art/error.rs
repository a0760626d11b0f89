pub type ArtResult<T> = Result<T, ArtError>;

#[derive(thiserror::Error, Debug)]
pub enum ArtError {
    #[error("config error: {0}")]
    Config(String),

    #[error("unknown card: {0}")]
    UnknownCard(String),

    #[error("serialization error: {0}")]
    Serde(String),
}

impl ArtError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn unknown_card(id: impl Into<String>) -> Self {
        Self::UnknownCard(id.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ArtError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}
