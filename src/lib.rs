//! Domain Utils - validated value objects and small domain utilities.
//!
//! This library collects three independent components behind one surface:
//! text analysis over mixed Latin/Cyrillic text, 3D geometry primitives,
//! and a contact model with validated phone numbers. The components share
//! no state and no control flow; all operations are synchronous, in-memory
//! computations.
//!
//! # Architecture
//!
//! - **text**: word tokenization and consonant counting
//! - **geometry**: `Point3D` and `Sphere3D` with tolerance-aware predicates
//! - **domain**: validating value objects (`PhoneNumber`)
//! - **models**: mutable entities (`Contact`)
//! - **error**: custom error types for precise error handling

pub mod domain;
pub mod error;
pub mod geometry;
pub mod models;
pub mod text;

pub use domain::{PhoneNumber, ValidationError};
pub use error::{ContactError, ContactResult, GeometryError, GeometryResult};
pub use geometry::{Point3D, Sphere3D, TOLERANCE};
pub use models::Contact;
pub use text::{count_consonants, split_into_words};
