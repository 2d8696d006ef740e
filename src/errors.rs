//! Error types for the comparison surface.
//!
//! Helper functions in this crate swallow failure into sentinels (`Option`,
//! `bool`); only structural comparison reports typed errors.

use thiserror::Error;

/// A structural mismatch found while comparing two object arrays.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    #[error("array length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("element at index {index} is not an object")]
    NotAnObject { index: usize },

    #[error("property missing from {side} object at index {index}: {property}")]
    MissingProperty {
        index: usize,
        property: String,
        side: &'static str,
    },

    #[error("type mismatch at index {index}, property {property}: {expected} vs {actual}")]
    TypeMismatch {
        index: usize,
        property: String,
        expected: &'static str,
        actual: &'static str,
    },
}

pub type CompareResult<T> = Result<T, CompareError>;
