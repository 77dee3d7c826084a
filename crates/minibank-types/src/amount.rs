use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use crate::error::{LedgerError, Result};

/// Money in the smallest accounting unit (no fractional part)
/// Signed so that a negative request can be represented and rejected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Amount(i64);

impl Amount {
    /// Zero amount
    pub const ZERO: Amount = Amount(0);

    /// Create from integer units
    pub const fn from_units(units: i64) -> Self {
        Amount(units)
    }

    /// Get the integer units
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Check if amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Check if amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition
    pub fn checked_add(&self, other: Self) -> Result<Self> {
        self.0
            .checked_add(other.0)
            .map(Amount)
            .ok_or_else(|| LedgerError::InvalidAmount("overflow in addition".to_string()))
    }

    /// Checked subtraction
    pub fn checked_sub(&self, other: Self) -> Result<Self> {
        self.0
            .checked_sub(other.0)
            .map(Amount)
            .ok_or_else(|| LedgerError::InvalidAmount("overflow in subtraction".to_string()))
    }

    /// Reject negative amounts, naming the operation in the error
    pub fn ensure_non_negative(self, operation: &str) -> Result<Self> {
        if self.is_negative() {
            return Err(LedgerError::InvalidAmount(format!(
                "{} amount must be non-negative, got {}",
                operation, self
            )));
        }
        Ok(self)
    }
}

impl Add for Amount {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Amount(self.0 + other.0)
    }
}

impl Sub for Amount {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Amount(self.0 - other.0)
    }
}

impl From<i64> for Amount {
    fn from(units: i64) -> Self {
        Amount(units)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
