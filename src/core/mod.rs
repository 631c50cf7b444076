//! Low-level, allocation-free primitives.
//!
//! - [`coord`]: signed (row, column) steps and the fixed step tables.
//! - [`position`]: a validated 1-indexed board square.

pub mod coord;
pub mod position;
