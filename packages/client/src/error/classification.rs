use super::types::Error;

impl Error {
    /// Returns true if the error comes from a bad call site argument.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Returns true if the error comes from a missing runtime capability.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }
}
