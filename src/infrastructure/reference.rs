//! The built-in fee schedules the calculator ships with.

use crate::domain::fee_schedule::{FeeSchedule, ProcessorId};
use crate::domain::money::{Money, Percent};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[allow(clippy::too_many_arguments)]
fn schedule(
    id: ProcessorId,
    name: &str,
    card_present: (Decimal, Decimal),
    card_not_present: (Decimal, Decimal),
    monthly_fee: Decimal,
    setup_cost: Decimal,
    hardware_cost: Decimal,
    description: &str,
) -> FeeSchedule {
    FeeSchedule {
        id,
        name: name.to_string(),
        card_present_rate: Percent::new_unchecked(card_present.0),
        card_present_fixed_fee: Money::new(card_present.1),
        card_not_present_rate: Percent::new_unchecked(card_not_present.0),
        card_not_present_fixed_fee: Money::new(card_not_present.1),
        monthly_fee: Money::new(monthly_fee),
        setup_cost: Money::new(setup_cost),
        hardware_cost: Money::new(hardware_cost),
        description: description.to_string(),
    }
}

/// Published rates for the current-processor candidates, the platform and the
/// hypothetical future rail.
pub fn reference_schedules() -> Vec<FeeSchedule> {
    vec![
        schedule(
            ProcessorId::Toast,
            "Toast",
            (dec!(2.49), dec!(0.15)),
            (dec!(3.50), dec!(0.15)),
            dec!(0),
            dec!(13000),
            dec!(0),
            "Industry leader with proprietary hardware",
        ),
        schedule(
            ProcessorId::Square,
            "Square",
            (dec!(2.60), dec!(0.10)),
            (dec!(3.50), dec!(0.15)),
            dec!(0),
            dec!(0),
            dec!(800),
            "Popular for small businesses",
        ),
        schedule(
            ProcessorId::Clover,
            "Clover",
            (dec!(2.30), dec!(0.10)),
            (dec!(3.50), dec!(0.10)),
            dec!(14.95),
            dec!(1500),
            dec!(1200),
            "Flexible POS solution",
        ),
        schedule(
            ProcessorId::Platform,
            "Our Platform",
            (dec!(1.50), dec!(0.10)),
            (dec!(2.20), dec!(0.10)),
            dec!(99),
            dec!(0),
            dec!(0),
            "Hardware-agnostic, lowest fees",
        ),
        schedule(
            ProcessorId::FutureRail,
            "Stablecoin Rails (Future)",
            (dec!(0.50), dec!(0.05)),
            (dec!(0.50), dec!(0.05)),
            dec!(99),
            dec!(0),
            dec!(0),
            "Next-gen blockchain payments",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_covers_every_id_once() {
        let ids: Vec<_> = reference_schedules().iter().map(|s| s.id).collect();
        assert_eq!(ids, ProcessorId::ALL.to_vec());
    }

    #[test]
    fn test_reference_schedules_are_valid() {
        for s in reference_schedules() {
            assert!(s.validate().is_ok(), "{} is invalid", s.id);
        }
    }

    #[test]
    fn test_toast_reference_rates() {
        let toast = reference_schedules()
            .into_iter()
            .find(|s| s.id == ProcessorId::Toast)
            .unwrap();
        assert_eq!(toast.card_present_rate.value(), dec!(2.49));
        assert_eq!(toast.card_not_present_rate.value(), dec!(3.50));
        assert_eq!(toast.setup_cost, Money::new(dec!(13000)));
    }
}
