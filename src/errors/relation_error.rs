use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelationError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("params error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A structure cannot hold enough entries per page (creation), or an
    /// insert would allocate a data page the bit-slices cannot address.
    #[error("capacity violation: {0}")]
    CapacityViolation(String),

    /// Inserted tuple's byte length differs from the relation's fixed size.
    /// Rejected before any structure is touched.
    #[error("tuple size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A new page could not be obtained mid-insertion. Structures already
    /// updated in earlier steps of the same insertion are not rolled back.
    #[error("page allocation failed in {file} file: {source}")]
    Allocation {
        file: &'static str,
        source: std::io::Error,
    },

    #[error("bad tuple: {0}")]
    TupleFormat(String),

    #[error("invalid relation: {0}")]
    Invalid(String),
}
