//! The occupancy registry and its allocation policy
//!
//! [`ParkingLot`] maps slot numbers to parked vehicles. Storage is an
//! unordered hash map, so every ordered view (allocation scan, status
//! listing) orders by slot number explicitly rather than relying on map
//! iteration order.

use std::collections::HashMap;

use crate::fees::calculate_charge;
use crate::models::{LotError, Receipt, StatusEntry, Vehicle};

/// An in-memory parking lot with a fixed number of numbered slots
///
/// Slots are numbered `1..=capacity`. A slot number absent from the registry
/// is free. At most `capacity` vehicles are parked at any time.
#[derive(Debug, Clone)]
pub struct ParkingLot {
    capacity: usize,
    slots: HashMap<usize, Vehicle>,
}

impl ParkingLot {
    /// Create an empty lot with the given number of slots
    ///
    /// A capacity of zero is accepted; such a lot reports full on every
    /// `park` call.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            slots: HashMap::new(),
        }
    }

    /// Total number of slots
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of currently occupied slots
    pub fn occupied(&self) -> usize {
        self.slots.len()
    }

    /// True when no free slot remains
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// Allocate the lowest-numbered free slot to `registration`
    ///
    /// Scans slot numbers ascending from 1 and occupies the first free one,
    /// returning its number. Returns [`LotError::Full`] without mutating
    /// anything when every slot is taken.
    ///
    /// No duplicate check is performed: parking a registration that is
    /// already in the lot occupies a second slot.
    pub fn park(&mut self, registration: &str) -> Result<usize, LotError> {
        if self.is_full() {
            return Err(LotError::Full);
        }

        // is_full() guarantees a free slot exists in 1..=capacity
        let slot = (1..=self.capacity)
            .find(|n| !self.slots.contains_key(n))
            .ok_or(LotError::Full)?;

        self.slots.insert(
            slot,
            Vehicle {
                registration: registration.to_string(),
                slot,
            },
        );
        Ok(slot)
    }

    /// Release the slot occupied by `registration` and compute the charge
    ///
    /// Returns a [`Receipt`] and frees the slot, which becomes immediately
    /// available to future `park` calls. Returns [`LotError::NotFound`]
    /// without mutating anything when no parked vehicle matches.
    ///
    /// When the same registration occupies several slots, the scan runs in
    /// ascending slot order, so the lowest-numbered match is released.
    pub fn leave(&mut self, registration: &str, hours: u64) -> Result<Receipt, LotError> {
        let slot = (1..=self.capacity)
            .find(|n| {
                self.slots
                    .get(n)
                    .is_some_and(|v| v.registration == registration)
            })
            .ok_or_else(|| LotError::NotFound(registration.to_string()))?;

        self.slots.remove(&slot);
        Ok(Receipt {
            registration: registration.to_string(),
            slot,
            charge: calculate_charge(hours),
        })
    }

    /// List occupied slots, ordered ascending by slot number
    ///
    /// The ordering is applied here; callers must never see map iteration
    /// order. An empty lot yields an empty vec.
    pub fn status(&self) -> Vec<StatusEntry> {
        let mut entries: Vec<StatusEntry> = self
            .slots
            .values()
            .map(|v| StatusEntry {
                slot: v.slot,
                registration: v.registration.clone(),
            })
            .collect();
        entries.sort_by_key(|e| e.slot);
        entries
    }
}
