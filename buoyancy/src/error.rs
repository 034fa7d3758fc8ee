use thiserror::Error;

/// Errors produced while partitioning a mesh against the water surface.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BuoyancyError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Submerged vertex count {0} is outside 0..=3")]
    InternalInvariant(usize),

    #[error("Partition read before the first update")]
    NotReady,

    #[error("No rapier context to cast water rays against")]
    MissingPhysicsContext,
}

pub type Result<T> = std::result::Result<T, BuoyancyError>;
