//! Entity models.
//!
//! Entities differ from the value objects in `domain`: they have a
//! mutable lifecycle and own collections of value objects.

pub mod contact;

pub use contact::Contact;
