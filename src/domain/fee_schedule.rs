use crate::domain::money::{Money, Percent};
use crate::error::CalculatorError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies a fee schedule in a registry.
///
/// `Platform` and `FutureRail` fill fixed roles in every comparison; the others are
/// candidates for the business's current processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProcessorId {
    Toast,
    Square,
    Clover,
    Platform,
    FutureRail,
}

impl ProcessorId {
    pub const ALL: [ProcessorId; 5] = [
        ProcessorId::Toast,
        ProcessorId::Square,
        ProcessorId::Clover,
        ProcessorId::Platform,
        ProcessorId::FutureRail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessorId::Toast => "toast",
            ProcessorId::Square => "square",
            ProcessorId::Clover => "clover",
            ProcessorId::Platform => "platform",
            ProcessorId::FutureRail => "future-rail",
        }
    }

    /// Whether this id is offered as a "current processor" choice.
    pub fn is_current_candidate(&self) -> bool {
        !matches!(self, ProcessorId::Platform | ProcessorId::FutureRail)
    }
}

impl fmt::Display for ProcessorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ProcessorId {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == needle)
            .ok_or_else(|| CalculatorError::UnknownProcessor(s.to_string()))
    }
}

/// How a schedule's rates are applied to the month's transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingModel {
    /// Card-present and card-not-present portions are priced separately.
    Split,
    /// The card-present rate and fixed fee apply to the whole volume and count.
    Uniform,
}

/// The fee structure of one payment processor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub id: ProcessorId,
    pub name: String,
    pub card_present_rate: Percent,
    pub card_present_fixed_fee: Money,
    pub card_not_present_rate: Percent,
    pub card_not_present_fixed_fee: Money,
    pub monthly_fee: Money,
    pub setup_cost: Money,
    pub hardware_cost: Money,
    pub description: String,
}

impl FeeSchedule {
    /// Checks that every fee is non-negative and that rates sit in `[0, 100)`.
    pub fn validate(&self) -> Result<(), CalculatorError> {
        for (field, rate) in [
            ("card_present_rate", self.card_present_rate),
            ("card_not_present_rate", self.card_not_present_rate),
        ] {
            if rate.value() >= Decimal::ONE_HUNDRED {
                return Err(CalculatorError::InvalidInput(format!(
                    "{}: {field} must be below 100%",
                    self.id
                )));
            }
        }
        for (field, fee) in [
            ("card_present_fixed_fee", self.card_present_fixed_fee),
            ("card_not_present_fixed_fee", self.card_not_present_fixed_fee),
            ("monthly_fee", self.monthly_fee),
            ("setup_cost", self.setup_cost),
            ("hardware_cost", self.hardware_cost),
        ] {
            if fee.is_negative() {
                return Err(CalculatorError::InvalidInput(format!(
                    "{}: {field} must not be negative",
                    self.id
                )));
            }
        }
        Ok(())
    }
}
