use serde::Serialize;

/// A vehicle currently occupying a slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub registration: String,
    // Redundant with the registry key, kept for convenience
    pub slot: usize,
}

/// Receipt returned when a vehicle leaves the lot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub registration: String,
    pub slot: usize,
    // Fee in abstract currency units
    pub charge: u64,
}

/// One row of the status listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
    pub slot: usize,
    pub registration: String,
}

/// Recoverable failures from lot operations
///
/// Both variants are ordinary return values, never panics. The `Display`
/// strings are the exact messages the command runner prints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LotError {
    #[error("Sorry, parking lot is full")]
    Full,

    #[error("Registration number {0} not found")]
    NotFound(String),
}
