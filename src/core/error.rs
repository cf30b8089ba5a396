use thiserror::Error;

#[derive(Error, Debug)]
pub enum PosterError {
    #[error("No API key selected: {0}")]
    MissingKey(String),

    #[error("Image API error: {0}")]
    Generation(String),

    #[error("No images returned")]
    NoImages,

    #[error("Image decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PosterError>;
