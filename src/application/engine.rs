use crate::domain::comparison::{
    ComparisonResult, CostBreakdown, PROJECTION_YEARS, TimelinePoint, TransactionMix,
};
use crate::domain::fee_schedule::{PricingModel, ProcessorId};
use crate::domain::inputs::BusinessInputs;
use crate::domain::money::Money;
use crate::domain::ports::FeeScheduleRegistry;
use crate::error::{CalculatorError, Result};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// The main entry point for cost comparisons.
///
/// `CostComparisonEngine` prices a business's card volume under its current processor,
/// the platform and the future rail. It holds nothing but a read-only registry, so
/// `compare` is a pure function of its inputs and can be called from many threads.
pub struct CostComparisonEngine<R: FeeScheduleRegistry> {
    registry: R,
}

impl<R: FeeScheduleRegistry> CostComparisonEngine<R> {
    /// Creates a new `CostComparisonEngine` over the given registry.
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Compares the current processor against the platform and the future rail.
    ///
    /// Processor ids are resolved before any input is checked or any arithmetic runs.
    /// Either the whole result is returned or an error is; there are no partial results.
    #[instrument(skip(self), fields(current = %inputs.current_processor))]
    pub fn compare(&self, inputs: &BusinessInputs) -> Result<ComparisonResult> {
        let current = self.registry.lookup(inputs.current_processor)?;
        let platform = self.registry.lookup(ProcessorId::Platform)?;
        let future_rail = self.registry.lookup(ProcessorId::FutureRail)?;

        inputs.validate()?;
        let mix = TransactionMix::from_inputs(inputs)?;
        debug!(
            transactions = mix.transaction_count,
            card_present = mix.card_present_count,
            card_not_present = mix.card_not_present_count,
            "split monthly transactions"
        );

        let current_cost = CostBreakdown::evaluate(current, &mix, PricingModel::Split)?;
        let platform_cost = CostBreakdown::evaluate(platform, &mix, PricingModel::Split)?;
        let rail_cost = CostBreakdown::evaluate(future_rail, &mix, PricingModel::Uniform)?;

        let current_annual = current_cost.annual()?;
        let platform_annual = platform_cost.annual()?;
        let rail_annual = rail_cost.annual()?;
        let current_first_year = current_cost.first_year()?;
        let platform_first_year = platform_cost.first_year()?;

        let locations = Decimal::from(inputs.location_count);
        let per_business = |delta: Money| delta.checked_mul(locations);

        let monthly_savings = per_business(current_cost.total.checked_sub(platform_cost.total)?)?;
        let annual_savings = per_business(current_annual.checked_sub(platform_annual)?)?;
        let first_year_savings =
            per_business(current_first_year.checked_sub(platform_first_year)?)?;
        // One-time costs are avoided outright on the platform, so they count once.
        let five_year_savings = annual_savings
            .checked_mul(Decimal::from(PROJECTION_YEARS as u32))?
            .checked_add(per_business(current_cost.one_time()?)?)?;
        let future_rail_annual_savings =
            per_business(current_annual.checked_sub(rail_annual)?)?;

        let mut timeline = Vec::with_capacity(PROJECTION_YEARS);
        for year in 1..=PROJECTION_YEARS as u32 {
            let current_total = current_cost.cumulative(year)?;
            let platform_total = platform_cost.cumulative(year)?;
            timeline.push(TimelinePoint {
                year,
                current_cost: per_business(current_total)?,
                platform_cost: per_business(platform_total)?,
                future_rail_cost: per_business(rail_cost.cumulative(year)?)?,
                savings: per_business(current_total.checked_sub(platform_total)?)?,
            });
        }
        let timeline: [TimelinePoint; PROJECTION_YEARS] =
            timeline.try_into().map_err(|points: Vec<TimelinePoint>| {
                CalculatorError::InvalidInput(format!(
                    "expected {PROJECTION_YEARS} timeline points, built {}",
                    points.len()
                ))
            })?;

        debug!(
            current_monthly = %current_cost.total.value(),
            platform_monthly = %platform_cost.total.value(),
            monthly_savings = %monthly_savings.value(),
            "compared processors"
        );

        Ok(ComparisonResult {
            current_processor: current.clone(),
            current_monthly_cost: current_cost.total,
            current_annual_cost: current_annual,
            current_first_year_cost: current_first_year,

            platform: platform.clone(),
            platform_monthly_cost: platform_cost.total,
            platform_annual_cost: platform_annual,
            platform_first_year_cost: platform_first_year,

            monthly_savings,
            annual_savings,
            first_year_savings,
            five_year_savings,

            future_rail: future_rail.clone(),
            future_rail_monthly_cost: rail_cost.total,
            future_rail_annual_cost: rail_annual,
            future_rail_annual_savings,

            transaction_count: mix.transaction_count,
            breakdown: [current_cost, platform_cost, rail_cost],
            timeline,
        })
    }
}
