use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Construction with a capacity below one. Never clamped.
    #[error("invalid capacity {0}: must be at least 1")]
    InvalidCapacity(i64),

    /// Positive capacity whose slots cannot be allocated.
    #[error("capacity {0} is too large to allocate")]
    CapacityTooLarge(usize),
}
