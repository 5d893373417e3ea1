//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`KeyNotFound`] thrown when a [`Trip`] (or another keyed item) is not
//!     found.
//! - [`InvalidIndex`] thrown when a reorder targets a position outside the
//!     day's sequence.
//!
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`InvalidIndex`]: EngineError::InvalidIndex
//!  [`Trip`]: super::trip::Trip
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("Invalid index: {0}")]
    InvalidIndex(String),
    #[error("Invalid day: {0}")]
    InvalidDay(String),
    #[error("Invalid time: {0}")]
    InvalidTime(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}
