use crate::types::EntityId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Attribution undefined: weighted reach total is {total} across {channels} channels")]
    DegenerateAttribution { channels: usize, total: f64 },

    #[error("Entity {id} not found")]
    EntityNotFound { id: EntityId },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

pub type CoreResult<T> = Result<T, CoreError>;
