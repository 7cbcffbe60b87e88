use crate::domain::fee_schedule::{FeeSchedule, PricingModel};
use crate::domain::inputs::BusinessInputs;
use crate::domain::money::Money;
use crate::error::CalculatorError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

pub const MONTHS_PER_YEAR: u32 = 12;
pub const PROJECTION_YEARS: usize = 5;

/// One location's monthly transactions, split into card-present and card-not-present.
///
/// The same card-present share splits both the dollar volume and the transaction count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransactionMix {
    pub transaction_count: u64,
    pub card_present_count: u64,
    pub card_not_present_count: u64,
    pub volume: Money,
    pub card_present_volume: Money,
    pub card_not_present_volume: Money,
}

impl TransactionMix {
    pub fn from_inputs(inputs: &BusinessInputs) -> Result<Self, CalculatorError> {
        let share = inputs.card_present_share()?.as_ratio();
        let volume = inputs.monthly_card_volume;

        let count = volume
            .value()
            .checked_div(inputs.average_transaction_size.value())
            .filter(|_| inputs.average_transaction_size.value() > Decimal::ZERO)
            .ok_or_else(|| {
                CalculatorError::InvalidInput(
                    "average transaction size must be positive".to_string(),
                )
            })?;
        let transaction_count = round_count(count)?;
        let card_present_count = round_count(Decimal::from(transaction_count) * share)?;

        let card_present_volume = volume * share;

        Ok(Self {
            transaction_count,
            card_present_count,
            card_not_present_count: transaction_count - card_present_count,
            volume,
            card_present_volume,
            card_not_present_volume: volume - card_present_volume,
        })
    }
}

fn round_count(value: Decimal) -> Result<u64, CalculatorError> {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .ok_or_else(|| {
            CalculatorError::InvalidInput(format!("transaction count {value} is out of range"))
        })
}

/// Monthly cost of one fee schedule for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub processor: String,
    pub processing_fees: Money,
    pub fixed_fees: Money,
    pub monthly_fee: Money,
    pub setup_cost: Money,
    pub hardware_cost: Money,
    pub total: Money,
}

impl CostBreakdown {
    /// Prices one month of `mix` under `schedule`.
    ///
    /// Fails with `InvalidInput` when a fee total does not fit in a `Decimal`.
    pub fn evaluate(
        schedule: &FeeSchedule,
        mix: &TransactionMix,
        model: PricingModel,
    ) -> Result<Self, CalculatorError> {
        let (processing_fees, fixed_fees) = match model {
            PricingModel::Split => (
                mix.card_present_volume
                    .percent_of(schedule.card_present_rate)
                    .checked_add(
                        mix.card_not_present_volume
                            .percent_of(schedule.card_not_present_rate),
                    )?,
                schedule
                    .card_present_fixed_fee
                    .checked_mul(Decimal::from(mix.card_present_count))?
                    .checked_add(
                        schedule
                            .card_not_present_fixed_fee
                            .checked_mul(Decimal::from(mix.card_not_present_count))?,
                    )?,
            ),
            PricingModel::Uniform => (
                mix.volume.percent_of(schedule.card_present_rate),
                schedule
                    .card_present_fixed_fee
                    .checked_mul(Decimal::from(mix.transaction_count))?,
            ),
        };

        Ok(Self {
            processor: schedule.name.clone(),
            processing_fees,
            fixed_fees,
            monthly_fee: schedule.monthly_fee,
            setup_cost: schedule.setup_cost,
            hardware_cost: schedule.hardware_cost,
            total: processing_fees
                .checked_add(fixed_fees)?
                .checked_add(schedule.monthly_fee)?,
        })
    }

    pub fn annual(&self) -> Result<Money, CalculatorError> {
        self.total.checked_mul(Decimal::from(MONTHS_PER_YEAR))
    }

    pub fn one_time(&self) -> Result<Money, CalculatorError> {
        self.setup_cost.checked_add(self.hardware_cost)
    }

    pub fn first_year(&self) -> Result<Money, CalculatorError> {
        self.annual()?.checked_add(self.one_time()?)
    }

    /// Total spend after `year` years: every year's fees plus the one-time costs.
    pub fn cumulative(&self, year: u32) -> Result<Money, CalculatorError> {
        self.annual()?
            .checked_mul(Decimal::from(year))?
            .checked_add(self.one_time()?)
    }
}

/// Cumulative costs at the end of a given year, across all locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub year: u32,
    pub current_cost: Money,
    pub platform_cost: Money,
    pub future_rail_cost: Money,
    pub savings: Money,
}

/// Everything the presentation layer needs, computed once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub current_processor: FeeSchedule,
    pub current_monthly_cost: Money,
    pub current_annual_cost: Money,
    pub current_first_year_cost: Money,

    pub platform: FeeSchedule,
    pub platform_monthly_cost: Money,
    pub platform_annual_cost: Money,
    pub platform_first_year_cost: Money,

    pub monthly_savings: Money,
    pub annual_savings: Money,
    pub first_year_savings: Money,
    pub five_year_savings: Money,

    pub future_rail: FeeSchedule,
    pub future_rail_monthly_cost: Money,
    pub future_rail_annual_cost: Money,
    pub future_rail_annual_savings: Money,

    pub transaction_count: u64,
    /// Always `[current, platform, future rail]`.
    pub breakdown: [CostBreakdown; 3],
    pub timeline: [TimelinePoint; PROJECTION_YEARS],
}
