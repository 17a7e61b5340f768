//! Validated batch-size limit.

use super::SourceError;

/// A batch-size limit guaranteed to lie within the remote API's
/// accepted range of `1..=1000`.
///
/// Validation happens at construction, so a fetch can never reach the
/// network with an out-of-range limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BatchLimit(u32);

impl BatchLimit {
    /// Smallest accepted batch size.
    pub const MIN: u32 = 1;

    /// Largest accepted batch size.
    pub const MAX: u32 = 1000;

    /// A limit of exactly one record.
    pub const ONE: Self = Self(1);

    /// Creates a validated batch limit.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidLimit`] when `value` falls outside
    /// `1..=1000`.
    pub const fn new(value: u32) -> Result<Self, SourceError> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(SourceError::InvalidLimit { value })
        }
    }

    /// Returns the limit as a plain integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for BatchLimit {
    type Error = SourceError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for BatchLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_range_bounds() {
        assert_eq!(BatchLimit::new(1).unwrap().get(), 1);
        assert_eq!(BatchLimit::new(1000).unwrap().get(), 1000);
        assert_eq!(BatchLimit::new(2).unwrap().get(), 2);
    }

    #[test]
    fn rejects_zero() {
        let error = BatchLimit::new(0).unwrap_err();
        assert!(matches!(error, SourceError::InvalidLimit { value: 0 }));
    }

    #[test]
    fn rejects_above_maximum() {
        let error = BatchLimit::new(1001).unwrap_err();
        assert!(matches!(error, SourceError::InvalidLimit { value: 1001 }));
    }

    #[test]
    fn try_from_delegates_to_new() {
        assert!(BatchLimit::try_from(500).is_ok());
        assert!(BatchLimit::try_from(0).is_err());
    }

    #[test]
    fn one_constant_is_minimal() {
        assert_eq!(BatchLimit::ONE.get(), BatchLimit::MIN);
    }

    #[test]
    fn displays_plain_value() {
        assert_eq!(BatchLimit::new(25).unwrap().to_string(), "25");
    }
}
