use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Scroll target not found: {0}")]
    TargetNotFound(String),

    #[error("Scroll container not found: {0}")]
    ContainerNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
