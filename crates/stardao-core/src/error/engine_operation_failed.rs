use super::Error;

/// Error when the mapping engine's backing store fails to execute an
/// operation.
///
/// This wraps whatever the store reports:
/// - Constraint violations (unique, foreign key, not null)
/// - Connectivity loss
/// - SQL errors and type mismatches raised by the store
///
/// The original error is kept as the source so diagnostics reach the caller
/// unchanged.
#[derive(Debug)]
pub(super) struct EngineOperationFailed {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for EngineOperationFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for EngineOperationFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        // Display the error and walk its source chain
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a failure reported by the backing store.
    ///
    /// Drivers use this to convert store-specific errors (rusqlite, ...)
    /// into stardao errors.
    pub fn engine_operation_failed(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::EngineOperationFailed(
            EngineOperationFailed {
                inner: Box::new(err),
            },
        ))
    }

    /// Returns `true` if this error is a failure reported by the backing store.
    pub fn is_engine_operation_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::EngineOperationFailed(_))
    }
}
