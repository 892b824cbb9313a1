use thiserror::Error;

/// Errors raised while loading or querying reference data.
///
/// Loader errors are fatal at start-up: callers must abort rather than serve
/// with partial reference tables.
#[derive(Debug, Error)]
pub enum ReferenceError {
    /// A reference data file could not be read.
    #[error("reference file error: {0}")]
    Io(#[from] std::io::Error),

    /// A reference data file was readable but not parseable.
    #[error("reference parse error: {0}")]
    Parse(String),

    /// The limits source parsed but contained no usable row.
    #[error("baseline limits source is empty")]
    MissingLimits,

    /// The HS code index backend failed a lookup.
    #[error("hs code lookup error: {0}")]
    Lookup(String),
}
