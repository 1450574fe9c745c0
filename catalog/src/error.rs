//! Error type shared by the catalog parsers.

/// Error returned when a catalog value cannot be parsed from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The gallery motion mode name is not one of the supported modes.
    #[error("unknown motion mode: {0:?} (expected absolute, centered, delta or momentum)")]
    UnknownMotionMode(String),
    /// The currency code is not three ASCII letters.
    #[error("invalid currency code: {0:?}")]
    InvalidCurrency(String),
}
