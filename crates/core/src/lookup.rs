//! Resolution of a caller-supplied `idOrName` path segment.

use std::fmt;

use crate::types::PersonId;

/// Which record a read, update, or delete targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonKey {
    /// Match the record with this identifier.
    ById(PersonId),
    /// Match the first record whose `name` equals this string exactly.
    ByName(String),
}

impl PersonKey {
    /// Select the key variant for `id_or_name`.
    ///
    /// Anything shaped like an identifier is looked up by identifier only;
    /// an identifier that matches nothing does not fall back to a name
    /// search.
    pub fn resolve(id_or_name: &str) -> Self {
        match PersonId::parse(id_or_name) {
            Ok(id) => Self::ById(id),
            Err(_) => Self::ByName(id_or_name.to_string()),
        }
    }
}

impl fmt::Display for PersonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ById(id) => write!(f, "id={id}"),
            Self::ByName(name) => write!(f, "name={name:?}"),
        }
    }
}
