use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreetError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GreetError>;
