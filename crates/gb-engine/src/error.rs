use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("engine initialization failed: {0}")]
    Init(String),
    #[error("operation '{request}' failed: {message}")]
    Operation { request: String, message: String },
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
