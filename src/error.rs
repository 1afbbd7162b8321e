use thiserror::Error;

/// Error taxonomy shared by every query surface in the crate.
///
/// Success is `Ok(payload)`; the three error kinds are kept distinct so
/// callers can tell malformed input, a legitimate miss, and a failed query
/// apart. A query error is never coerced into `NotFound`.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed input, detected before any query was issued.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Well-formed input that matched no record.
    #[error("not found")]
    NotFound,
    /// The underlying query failed.
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
