//! Parking fee computation
//!
//! A single fixed formula: flat rate for the first two hours, then a fixed
//! amount per additional hour. No fractional hours, no rate tiers.

/// Flat rate charged for the first two hours
pub const BASE_RATE: u64 = 10;

/// Rate per hour beyond the first two
pub const HOURLY_RATE: u64 = 10;

/// Compute the parking charge for a stay of `hours` whole hours
///
/// Stays of two hours or less (including zero) are charged the flat base
/// rate; each hour past the second adds the hourly rate. Saturates at
/// `u64::MAX` for absurdly long stays rather than overflowing.
pub fn calculate_charge(hours: u64) -> u64 {
    if hours <= 2 {
        return BASE_RATE;
    }
    BASE_RATE.saturating_add((hours - 2).saturating_mul(HOURLY_RATE))
}
