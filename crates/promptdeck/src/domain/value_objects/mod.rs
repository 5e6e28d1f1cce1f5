//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod visibility;

pub use visibility::*;
