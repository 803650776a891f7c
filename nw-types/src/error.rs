use std::collections::TryReserveError;

pub type Result<T> = std::result::Result<T, NwError>;

#[derive(thiserror::Error, Debug)]
pub enum NwError {
    /// A table or frontier buffer could not be allocated.
    /// `source` is `None` when the number of cells does not even fit in a `usize`.
    #[error("could not allocate {cells} DP cells")]
    Allocation {
        cells: usize,
        #[source]
        source: Option<TryReserveError>,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
