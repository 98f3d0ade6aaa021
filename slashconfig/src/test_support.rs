//! Test-only value types and fixtures.

use crate::fields;

/// A small record with one field of each common shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Starship {
    pub commanding_officer: String,
    pub registry: String,
    pub is_active: bool,
}

fields! {
    Starship {
        pub commanding_officer: String,
        pub registry: String,
        pub is_active: bool,
    }
}

/// A record with owned heap data, for checking that copies are independent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Manifest {
    pub label: String,
    pub crew: Vec<String>,
    pub decks: u32,
    pub sealed: bool,
}

fields! {
    Manifest {
        pub label: String,
        pub crew: Vec<String>,
        pub decks: u32,
        pub sealed: bool,
    }
}

/// The ship before its refit.
pub fn titan() -> Starship {
    Starship {
        commanding_officer: "William T. Riker".to_string(),
        registry: "NCC-80102".to_string(),
        is_active: false,
    }
}

/// The ship every refit scenario is expected to produce from [`titan`].
pub fn refit() -> Starship {
    Starship {
        commanding_officer: "Liam Shaw".to_string(),
        registry: "NCC-80102-A".to_string(),
        is_active: true,
    }
}
