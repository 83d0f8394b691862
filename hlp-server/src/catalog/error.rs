//! Catalog load error types.

/// Errors that can occur while loading the route dataset.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Reading the dataset file failed
    #[error("failed to read dataset: {0}")]
    Read(#[from] std::io::Error),

    /// The dataset is not valid JSON or has the wrong shape
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record violates the data contract
    #[error(transparent)]
    Integrity(#[from] DataIntegrityError),
}

/// A record in the dataset violates the data contract.
///
/// These are authoring defects: the caller must fix the dataset. They are
/// raised only during catalog load and abort it; query functions never
/// produce them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataIntegrityError {
    /// A record has no origin
    #[error("route {index}: origin must not be empty")]
    MissingOrigin {
        /// Position of the record in the dataset (0-based).
        index: usize,
    },

    /// A record has no destination
    #[error("route {index}: destination must not be empty")]
    MissingDestination {
        /// Position of the record in the dataset (0-based).
        index: usize,
    },

    /// A record has no itinerary steps
    #[error("route {index} ({origin} → {destination}): itinerary must have at least one step")]
    EmptyItinerary {
        /// Position of the record in the dataset (0-based).
        index: usize,
        /// Origin of the offending record.
        origin: String,
        /// Destination of the offending record.
        destination: String,
    },

    /// Two records share the same (origin, destination) pair
    #[error("route {index}: duplicate pair {origin} → {destination}")]
    DuplicateRoute {
        /// Position of the second occurrence (0-based).
        index: usize,
        /// Origin of the duplicated pair.
        origin: String,
        /// Destination of the duplicated pair.
        destination: String,
    },

    /// The dataset version is not a DD.MM.YYYY date
    #[error("dataset version {value:?} is not a DD.MM.YYYY date")]
    InvalidVersionDate {
        /// The authored version string.
        value: String,
    },
}
