//! Parklot simulates a single parking lot: fixed capacity, nearest-slot
//! allocation on arrival, fee computation on departure, and an ordered status
//! listing.
//!
//! This crate provides a library interface to the simulator, enabling
//! integration with other tools and testing. The `parklot` binary wraps it in
//! a command-file runner.

pub mod commands;
pub mod fees;
pub mod format;
pub mod lot;
pub mod models;
pub mod runner;
pub mod session;

// Re-export commonly used types for convenience
pub use commands::{parse_line, Command, ParseError};
pub use fees::calculate_charge;
pub use format::{render_event, OutputFormat};
pub use lot::ParkingLot;
pub use models::{LotError, Receipt, StatusEntry, Vehicle};
pub use runner::run_script;
pub use session::{Event, Session};

// Tests are defined in their respective modules with #[cfg(test)]
