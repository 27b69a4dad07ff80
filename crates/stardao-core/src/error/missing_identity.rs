use super::Error;

/// Error when an update or delete is issued for an entity whose identity is
/// not set.
///
/// Only raised when the engine is configured with
/// `IdentityPolicy::Reject`. Otherwise such statements match zero rows.
#[derive(Debug)]
pub(super) struct MissingIdentity {
    mapping: Box<str>,
    property: Box<str>,
}

impl std::error::Error for MissingIdentity {}

impl core::fmt::Display for MissingIdentity {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "missing identity: mapping `{}` has no value for identity property `{}`",
            self.mapping, self.property
        )
    }
}

impl Error {
    /// Creates a missing identity error for the given mapping and property.
    pub fn missing_identity(mapping: impl Into<String>, property: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingIdentity(MissingIdentity {
            mapping: mapping.into().into(),
            property: property.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing identity error.
    pub fn is_missing_identity(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingIdentity(_))
    }
}
