use crate::error::CalculatorError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A dollar amount.
///
/// This is a wrapper around `rust_decimal::Decimal`; fee arithmetic is exact, so
/// `annual == monthly * 12` holds to the last digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Applies a percentage to this amount (`1000 * 2.5% = 25`).
    ///
    /// The ratio is at most one, so the product never exceeds `self`.
    pub fn percent_of(self, rate: Percent) -> Self {
        Self(self.0 * rate.as_ratio())
    }

    pub fn checked_add(self, rhs: Self) -> Result<Self, CalculatorError> {
        self.0.checked_add(rhs.0).map(Self).ok_or_else(out_of_range)
    }

    pub fn checked_sub(self, rhs: Self) -> Result<Self, CalculatorError> {
        self.0.checked_sub(rhs.0).map(Self).ok_or_else(out_of_range)
    }

    pub fn checked_mul(self, factor: Decimal) -> Result<Self, CalculatorError> {
        self.0.checked_mul(factor).map(Self).ok_or_else(out_of_range)
    }
}

fn out_of_range() -> CalculatorError {
    CalculatorError::InvalidInput("amount is out of range for the given inputs".to_string())
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;
    fn mul(self, rhs: Decimal) -> Self::Output {
        Self(self.0 * rhs)
    }
}

/// A percentage in `[0, 100]`, e.g. `2.49` for a 2.49% processing rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Percent(Decimal);

impl Percent {
    pub const HUNDRED: Self = Self(Decimal::ONE_HUNDRED);

    pub fn new(value: Decimal) -> Result<Self, CalculatorError> {
        if value >= Decimal::ZERO && value <= Decimal::ONE_HUNDRED {
            Ok(Self(value))
        } else {
            Err(CalculatorError::InvalidInput(format!(
                "percentage {value} is outside [0, 100]"
            )))
        }
    }

    /// For rates known to be in range at compile time.
    pub(crate) const fn new_unchecked(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// The percentage as a fraction of one (`80%` -> `0.8`).
    pub fn as_ratio(&self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }
}

impl TryFrom<Decimal> for Percent {
    type Error = CalculatorError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percent> for Decimal {
    fn from(percent: Percent) -> Self {
        percent.0
    }
}
