use crate::domain::fee_schedule::ProcessorId;
use crate::domain::money::{Money, Percent};
use crate::error::CalculatorError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What the business tells us about itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessInputs {
    /// Card volume per location per month.
    pub monthly_card_volume: Money,
    pub average_transaction_size: Money,
    pub location_count: u32,
    pub current_processor: ProcessorId,
    /// Share of volume (and of transactions) taken in person.
    pub card_present_percent: Decimal,
}

impl Default for BusinessInputs {
    fn default() -> Self {
        Self {
            monthly_card_volume: Money::new(dec!(100000)),
            average_transaction_size: Money::new(dec!(45)),
            location_count: 1,
            current_processor: ProcessorId::Toast,
            card_present_percent: dec!(80),
        }
    }
}

impl BusinessInputs {
    /// Rejects inputs that do not describe a real business scenario.
    ///
    /// Nothing is clamped: a negative volume or a 120% card-present share is an error.
    pub fn validate(&self) -> Result<(), CalculatorError> {
        if self.monthly_card_volume.is_negative() {
            return Err(CalculatorError::InvalidInput(
                "monthly card volume must not be negative".to_string(),
            ));
        }
        if self.average_transaction_size.value() <= Decimal::ZERO {
            return Err(CalculatorError::InvalidInput(
                "average transaction size must be positive".to_string(),
            ));
        }
        if self.location_count < 1 {
            return Err(CalculatorError::InvalidInput(
                "location count must be at least 1".to_string(),
            ));
        }
        self.card_present_share()?;
        Ok(())
    }

    pub fn card_present_share(&self) -> Result<Percent, CalculatorError> {
        Percent::new(self.card_present_percent).map_err(|_| {
            CalculatorError::InvalidInput(format!(
                "card present percent {} is outside [0, 100]",
                self.card_present_percent
            ))
        })
    }

    /// Overlays a preset's volume, ticket size and location count.
    pub fn with_preset(mut self, preset: Preset) -> Self {
        let p = preset.values();
        self.monthly_card_volume = p.monthly_card_volume;
        self.average_transaction_size = p.average_transaction_size;
        self.location_count = p.location_count;
        self
    }
}

/// A named restaurant profile used to pre-fill inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    QuickService,
    CasualDining,
    FineDining,
    Chain,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetValues {
    pub monthly_card_volume: Money,
    pub average_transaction_size: Money,
    pub location_count: u32,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::QuickService,
        Preset::CasualDining,
        Preset::FineDining,
        Preset::Chain,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Preset::QuickService => "Quick Service",
            Preset::CasualDining => "Casual Dining",
            Preset::FineDining => "Fine Dining",
            Preset::Chain => "Chain (10 locations)",
        }
    }

    pub fn values(&self) -> PresetValues {
        let (volume, ticket, locations) = match self {
            Preset::QuickService => (dec!(80000), dec!(15), 1),
            Preset::CasualDining => (dec!(150000), dec!(45), 1),
            Preset::FineDining => (dec!(200000), dec!(120), 1),
            Preset::Chain => (dec!(100000), dec!(35), 10),
        };
        PresetValues {
            monthly_card_volume: Money::new(volume),
            average_transaction_size: Money::new(ticket),
            location_count: locations,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Preset::QuickService => "quick-service",
            Preset::CasualDining => "casual-dining",
            Preset::FineDining => "fine-dining",
            Preset::Chain => "chain",
        }
    }
}

impl FromStr for Preset {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| CalculatorError::InvalidInput(format!("unknown preset '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_inputs_are_valid() {
        assert!(BusinessInputs::default().validate().is_ok());
    }

    #[test]
    fn test_zero_volume_is_valid() {
        let inputs = BusinessInputs {
            monthly_card_volume: Money::ZERO,
            ..Default::default()
        };
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_volume() {
        let inputs = BusinessInputs {
            monthly_card_volume: Money::new(dec!(-1)),
            ..Default::default()
        };
        assert!(matches!(
            inputs.validate(),
            Err(CalculatorError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_non_positive_ticket() {
        for ticket in [dec!(0), dec!(-45)] {
            let inputs = BusinessInputs {
                average_transaction_size: Money::new(ticket),
                ..Default::default()
            };
            assert!(matches!(
                inputs.validate(),
                Err(CalculatorError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_rejects_zero_locations() {
        let inputs = BusinessInputs {
            location_count: 0,
            ..Default::default()
        };
        assert!(matches!(
            inputs.validate(),
            Err(CalculatorError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_card_present_bounds() {
        for (percent, ok) in [
            (dec!(0), true),
            (dec!(100), true),
            (dec!(-0.5), false),
            (dec!(100.5), false),
        ] {
            let inputs = BusinessInputs {
                card_present_percent: percent,
                ..Default::default()
            };
            assert_eq!(inputs.validate().is_ok(), ok, "percent {percent}");
        }
    }

    #[test]
    fn test_preset_overrides_volume_fields_only() {
        let inputs = BusinessInputs {
            current_processor: ProcessorId::Square,
            card_present_percent: dec!(65),
            ..Default::default()
        }
        .with_preset(Preset::Chain);

        assert_eq!(inputs.monthly_card_volume, Money::new(dec!(100000)));
        assert_eq!(inputs.average_transaction_size, Money::new(dec!(35)));
        assert_eq!(inputs.location_count, 10);
        assert_eq!(inputs.current_processor, ProcessorId::Square);
        assert_eq!(inputs.card_present_percent, dec!(65));
    }

    #[test]
    fn test_preset_parsing() {
        assert_eq!("fine-dining".parse::<Preset>().unwrap(), Preset::FineDining);
        assert!("buffet".parse::<Preset>().is_err());
    }
}
