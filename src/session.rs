//! Command dispatch over an owned, optionally-initialized lot
//!
//! The interpreter owns its lot through a [`Session`] rather than a shared
//! global. Until the first `create_parking_lot`, the lot is `None` and every
//! other command reports the uninitialized state.

use serde::Serialize;
use tracing::debug;

use crate::commands::Command;
use crate::lot::ParkingLot;
use crate::models::{LotError, Receipt, StatusEntry};

/// The outcome of executing one command
///
/// Every variant is renderable as contract text or as one JSON line; see
/// [`crate::format`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// Lot created or re-created; prints nothing in text mode
    Created { capacity: usize },
    Allocated { slot: usize },
    LotFull,
    Left(Receipt),
    NotFound { registration: String },
    Status { entries: Vec<StatusEntry> },
    NotInitialized,
    /// Input line rejected before dispatch (unknown command, bad arity,
    /// failed integer parse)
    Rejected { message: String },
}

impl From<LotError> for Event {
    fn from(err: LotError) -> Self {
        match err {
            LotError::Full => Event::LotFull,
            LotError::NotFound(registration) => Event::NotFound { registration },
        }
    }
}

/// Interpreter state: one optional parking lot
#[derive(Debug, Default)]
pub struct Session {
    lot: Option<ParkingLot>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once `create_parking_lot` has run
    pub fn is_initialized(&self) -> bool {
        self.lot.is_some()
    }

    /// Execute one command against the session
    ///
    /// `Create` replaces any existing lot, discarding all occupancy. Every
    /// other command checks initialization first. Failed operations map to
    /// their events and never abort the session.
    pub fn execute(&mut self, command: Command) -> Event {
        debug!(?command, "executing command");

        if let Command::Create { capacity } = command {
            self.lot = Some(ParkingLot::new(capacity));
            return Event::Created { capacity };
        }

        let Some(lot) = self.lot.as_mut() else {
            return Event::NotInitialized;
        };

        match command {
            Command::Park { registration } => match lot.park(&registration) {
                Ok(slot) => Event::Allocated { slot },
                Err(err) => err.into(),
            },
            Command::Leave {
                registration,
                hours,
            } => match lot.leave(&registration, hours) {
                Ok(receipt) => Event::Left(receipt),
                Err(err) => err.into(),
            },
            Command::Status => Event::Status {
                entries: lot.status(),
            },
            Command::Create { .. } => unreachable!("handled above"),
        }
    }
}
