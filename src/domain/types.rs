//! Constrained value objects used by collection queries.
//!
//! These wrappers enforce basic invariants (allow-listed page sizes, known
//! sort fields) so that once a value reaches the controller it can be
//! treated as trusted.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryConstraintError {
    /// Requested page size is not one of the offered options.
    #[error("page size {0} is not offered")]
    UnsupportedPageSize(usize),
    /// Sort field string did not match any known field path.
    #[error("unknown sort field: {0}")]
    UnknownSortField(String),
}

/// Field a customer listing can be ordered by.
///
/// Each variant carries the dotted path the listing endpoint expects in its
/// `sortBy` parameter.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SortField {
    #[default]
    FirstName,
    LastName,
    Email,
    City,
    RegisteredAt,
}

impl SortField {
    /// Dotted field path used on the wire.
    pub const fn wire_path(self) -> &'static str {
        match self {
            SortField::FirstName => "name.first",
            SortField::LastName => "name.last",
            SortField::Email => "email",
            SortField::City => "location.city",
            SortField::RegisteredAt => "registered",
        }
    }
}

impl Display for SortField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_path())
    }
}

impl FromStr for SortField {
    type Err = QueryConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name.first" => Ok(SortField::FirstName),
            "name.last" => Ok(SortField::LastName),
            "email" => Ok(SortField::Email),
            "location.city" => Ok(SortField::City),
            "registered" => Ok(SortField::RegisteredAt),
            other => Err(QueryConstraintError::UnknownSortField(other.to_string())),
        }
    }
}

/// Page size validated against [`PAGE_SIZE_OPTIONS`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PageSize(usize);

impl PageSize {
    /// Creates a page size, ensuring it is one of the offered options.
    pub fn new(value: usize) -> Result<Self, QueryConstraintError> {
        if PAGE_SIZE_OPTIONS.contains(&value) {
            Ok(Self(value))
        } else {
            Err(QueryConstraintError::UnsupportedPageSize(value))
        }
    }

    /// Returns the raw `usize` backing this page size.
    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(DEFAULT_PAGE_SIZE)
    }
}

impl Display for PageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for PageSize {
    type Error = QueryConstraintError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageSize> for usize {
    fn from(value: PageSize) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_respects_allow_list() {
        for size in PAGE_SIZE_OPTIONS {
            assert_eq!(PageSize::new(size).unwrap().get(), size);
        }
        assert_eq!(
            PageSize::new(7),
            Err(QueryConstraintError::UnsupportedPageSize(7))
        );
        assert_eq!(PageSize::default().get(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn sort_field_round_trips_wire_paths() {
        for field in [
            SortField::FirstName,
            SortField::LastName,
            SortField::Email,
            SortField::City,
            SortField::RegisteredAt,
        ] {
            assert_eq!(field.wire_path().parse::<SortField>().unwrap(), field);
        }
        assert!("name.middle".parse::<SortField>().is_err());
    }
}
