//! # Store Errors
//!
//! Common error type shared by every store and client. Record-specific failures travel inside
//! [`StoreError::RecordError`] so the store itself stays generic.

/// Errors that can occur within the record store runtime itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Record already exists: {0}")]
    Conflict(String),
    #[error("Record error: {0}")]
    RecordError(Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Recovers the record's own error type from a [`StoreError::RecordError`].
    ///
    /// Any other variant (or a record error of a different type) is handed back unchanged.
    pub fn into_record_error<E>(self) -> Result<E, StoreError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            StoreError::RecordError(inner) => match inner.downcast::<E>() {
                Ok(e) => Ok(*e),
                Err(other) => Err(StoreError::RecordError(other)),
            },
            other => Err(other),
        }
    }
}
