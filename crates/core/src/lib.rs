//! Domain types for the Person API.
//!
//! Pure types and predicates with no I/O: the person identifier, the
//! id-or-name lookup key, input field decoding, and the domain error.

pub mod error;
pub mod fields;
pub mod lookup;
pub mod types;
