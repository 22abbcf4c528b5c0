//! Error types for vector construction, arithmetic and keyed access

use thiserror::Error;

/// Vector errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    /// Binary operation on vectors of different sizes
    #[error("can only {operation} vectors of same size, got {left} and {right}")]
    SizeMismatch {
        operation: &'static str,
        left: usize,
        right: usize,
    },

    /// Dimension-specific constructor given the wrong number of components
    #[error("vector{expected} expected {expected} components, got {found}")]
    Arity { expected: usize, found: usize },

    /// Key matches no property, no named component and no swizzle
    #[error("no accessor '{key}' on a vector of size {size}")]
    UnknownAccessor { key: String, size: usize },

    /// Raw index outside `0..size`
    #[error("index {index} out of range for a vector of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// Attempt to write a computed property
    #[error("accessor '{0}' is read-only")]
    ReadOnlyAccessor(String),

    /// Key names a method that takes arguments and has to be called directly
    #[error("accessor '{0}' is a method and cannot be read or written by key")]
    MethodAccessor(String),

    /// Scalar written to a swizzle key, or a vector written to a component key
    #[error("accessor '{key}' expects a {expected} value")]
    AccessKind { key: String, expected: &'static str },

    /// Swizzle write with fewer components than the key has letters
    #[error("swizzle '{key}' needs {needed} components, got {found}")]
    InsufficientComponents {
        key: String,
        needed: usize,
        found: usize,
    },
}

/// Result type for vector operations
pub type Result<T> = std::result::Result<T, VectorError>;
