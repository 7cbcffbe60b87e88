use crate::domain::comparison::ComparisonResult;
use crate::domain::fee_schedule::{FeeSchedule, ProcessorId};
use crate::domain::money::{Money, Percent};
use crate::error::Result;
use rust_decimal::RoundingStrategy;
use std::io::Write;

/// Whole dollars with thousands separators. The sign is dropped; callers phrase
/// direction ("save" / "pay more") themselves.
pub fn format_currency(value: Money) -> String {
    let rounded = value
        .value()
        .abs()
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .trunc()
        .to_string();

    let mut grouped = String::with_capacity(rounded.len() + rounded.len() / 3);
    for (i, ch) in rounded.chars().enumerate() {
        if i > 0 && (rounded.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}")
}

pub fn format_percent(value: Percent) -> String {
    format!("{:.2}%", value.value())
}

/// Renders a comparison as a plain-text report.
pub struct ReportWriter<W: Write> {
    out: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_comparison(&mut self, result: &ComparisonResult) -> Result<()> {
        let out = &mut self.out;
        let verb = if result.monthly_savings.is_negative() {
            "cost"
        } else {
            "save"
        };

        writeln!(
            out,
            "Switching from {} to {} would {} {}/month ({}/year, {} over 5 years).",
            result.current_processor.name,
            result.platform.name,
            verb,
            format_currency(result.monthly_savings),
            format_currency(result.annual_savings),
            format_currency(result.five_year_savings),
        )?;
        writeln!(out, "Transactions per location: {}", result.transaction_count)?;
        writeln!(out)?;

        writeln!(
            out,
            "{:<28} {:>12} {:>12} {:>12} {:>12} {:>12}",
            "Processor", "Processing", "Fixed", "Monthly fee", "One-time", "Total/mo"
        )?;
        for b in &result.breakdown {
            writeln!(
                out,
                "{:<28} {:>12} {:>12} {:>12} {:>12} {:>12}",
                b.processor,
                format_currency(b.processing_fees),
                format_currency(b.fixed_fees),
                format_currency(b.monthly_fee),
                format_currency(b.one_time()?),
                format_currency(b.total),
            )?;
        }
        writeln!(out)?;

        writeln!(
            out,
            "{:<6} {:>14} {:>14} {:>14} {:>14}",
            "Year", "Current", "Platform", "Future rail", "Savings"
        )?;
        for p in &result.timeline {
            writeln!(
                out,
                "{:<6} {:>14} {:>14} {:>14} {:>14}",
                p.year,
                format_currency(p.current_cost),
                format_currency(p.platform_cost),
                format_currency(p.future_rail_cost),
                format_currency(p.savings),
            )?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "{} would save {}/year against {}.",
            result.future_rail.name,
            format_currency(result.future_rail_annual_savings),
            result.current_processor.name,
        )?;
        Ok(())
    }

    /// Lists registered schedules with their card-present / card-not-present rates.
    pub fn write_schedules<'a>(
        &mut self,
        schedules: impl IntoIterator<Item = &'a FeeSchedule>,
    ) -> Result<()> {
        for s in schedules {
            let role = match s.id {
                ProcessorId::Platform => "platform",
                ProcessorId::FutureRail => "future",
                id if id.is_current_candidate() => "current",
                _ => "",
            };
            writeln!(
                self.out,
                "{:<12} {:<9} {:<28} {:>7} + ${} / {:>7} + ${}  {}",
                s.id,
                role,
                s.name,
                format_percent(s.card_present_rate),
                s.card_present_fixed_fee.value(),
                format_percent(s.card_not_present_rate),
                s.card_not_present_fixed_fee.value(),
                s.description,
            )?;
        }
        Ok(())
    }
}
