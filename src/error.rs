//! Error types for the domain-utils crate.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when constructing geometry primitives.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Sphere radius was zero or negative
    #[error("sphere radius must be positive, got {0}")]
    NonPositiveRadius(f64),
}

/// Errors that can occur when constructing or mutating a contact.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// Required first name was empty or whitespace-only
    #[error("first name cannot be blank")]
    BlankFirstName,

    /// A number must be added to the contact before it can be made primary
    #[error("phone number {0} is not one of the contact's numbers")]
    NotAMember(String),
}

/// Convenience type alias for Results with GeometryError
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;
