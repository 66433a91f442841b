//! Shared primitive types used across the core.

/// Stable identifier of a synthetic business. Equals generation index + 1.
pub type EntityId = u32;

/// Rupiah amounts. The synthetic data only ever produces whole rupiah.
pub type Rupiah = i64;

/// A percentage on the 0–100 scale (conversion rates, contribution shares).
pub type Percent = f64;
