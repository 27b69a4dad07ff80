use super::Error;

/// Error when mapping metadata is missing or inconsistent.
///
/// This occurs when:
/// - A mapping name or result map cannot be found
/// - A mapping has no `tableName` fragment
/// - A mapped property is not declared by the entity type
/// - A keyed operation targets a mapping without identity columns
/// - A statement id is not registered with the engine
///
/// These errors are fatal and are not retried.
#[derive(Debug)]
pub(super) struct InvalidConfiguration {
    message: Box<str>,
}

impl std::error::Error for InvalidConfiguration {}

impl core::fmt::Display for InvalidConfiguration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid configuration: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid configuration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConfiguration(InvalidConfiguration {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid configuration error.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidConfiguration(_))
    }
}
