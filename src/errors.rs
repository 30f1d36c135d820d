// errors.rs
use crate::engine::EngineError;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, bad input) or the engine underneath.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("Internal Server Error")]
    InternalError,
}
