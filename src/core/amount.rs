use crate::error::AmountError;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// A validated, non-negative money amount split into whole and hundredth units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount {
    major: u64,
    minor: u8,
}

impl Amount {
    /// Largest whole part that still has words: 999 billions and change.
    pub const MAX_MAJOR: u64 = 999_999_999_999;

    /// Build from parts. A `minor` of 100 or more carries into `major`.
    pub fn new(major: u64, minor: u64) -> Result<Self, AmountError> {
        let major = major
            .checked_add(minor / 100)
            .filter(|m| *m <= Self::MAX_MAJOR)
            .ok_or_else(|| {
                let hundredths = u128::from(major) * 100 + u128::from(minor);
                AmountError::OutOfRange {
                    value: format!("{}.{:02}", hundredths / 100, hundredths % 100),
                    max: Self::MAX_MAJOR,
                }
            })?;

        Ok(Self {
            major,
            minor: (minor % 100) as u8,
        })
    }

    /// Split a float the way cash registers do: floor for the whole part,
    /// hundredths rounded half away from zero.
    ///
    /// The float goes through its shortest decimal form first, so `0.285`
    /// rounds like the literal `"0.285"` does. `1.999` rounds its hundredths
    /// to 100, which carries to `2.00`.
    pub fn from_f64(value: f64) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::NotFinite);
        }
        if value < 0.0 {
            return Err(AmountError::Negative {
                value: value.to_string(),
            });
        }

        let out_of_range = || AmountError::OutOfRange {
            value: value.to_string(),
            max: Self::MAX_MAJOR,
        };
        if value.floor() > Self::MAX_MAJOR as f64 {
            return Err(out_of_range());
        }

        let decimal = Decimal::from_f64(value).ok_or_else(out_of_range)?;
        Self::from_decimal(decimal)
    }

    pub fn from_decimal(value: Decimal) -> Result<Self, AmountError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AmountError::Negative {
                value: value.to_string(),
            });
        }

        let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let whole = rounded.trunc();
        let out_of_range = || AmountError::OutOfRange {
            value: value.to_string(),
            max: Self::MAX_MAJOR,
        };

        let major = whole.to_u64().ok_or_else(out_of_range)?;
        let minor = ((rounded - whole) * Decimal::ONE_HUNDRED)
            .to_u64()
            .ok_or_else(out_of_range)?;

        Self::new(major, minor)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u8 {
        self.minor
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    /// Accepts `1234.56`, `1234,56` and digit grouping with spaces or `_`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized: String = input
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .map(|c| if c == ',' { '.' } else { c })
            .collect();

        let decimal = Decimal::from_str(&normalized).map_err(|_| AmountError::Parse {
            input: input.to_string(),
        })?;

        Self::from_decimal(decimal)
    }
}

impl TryFrom<f64> for Amount {
    type Error = AmountError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.major, self.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_f64_splits_parts() {
        let amount = Amount::from_f64(21.5).expect("valid amount");
        assert_eq!(amount.major(), 21);
        assert_eq!(amount.minor(), 50);

        let amount = Amount::from_f64(0.29).expect("valid amount");
        assert_eq!((amount.major(), amount.minor()), (0, 29));

        let amount = Amount::from_f64(2.02).expect("valid amount");
        assert_eq!((amount.major(), amount.minor()), (2, 2));
    }

    #[test]
    fn test_from_f64_carries_rounded_hundred() {
        let amount = Amount::from_f64(1.999).expect("valid amount");
        assert_eq!((amount.major(), amount.minor()), (2, 0));

        let amount = Amount::from_f64(0.996).expect("valid amount");
        assert_eq!((amount.major(), amount.minor()), (1, 0));
    }

    #[test]
    fn test_from_f64_rounds_like_parsed_text() {
        for (value, text, minor) in [(0.285, "0.285", 29), (2.675, "2.675", 68), (0.145, "0.145", 15)] {
            let from_float = Amount::from_f64(value).expect("valid amount");
            let from_text: Amount = text.parse().expect("valid amount");
            assert_eq!(from_float, from_text, "{} disagrees", text);
            assert_eq!(from_float.minor(), minor);
        }
    }

    #[test]
    fn test_from_f64_rejects_bad_input() {
        assert_eq!(Amount::from_f64(f64::NAN), Err(AmountError::NotFinite));
        assert_eq!(Amount::from_f64(f64::INFINITY), Err(AmountError::NotFinite));
        assert!(matches!(
            Amount::from_f64(-0.01),
            Err(AmountError::Negative { .. })
        ));
        assert!(matches!(
            Amount::from_f64(1e12),
            Err(AmountError::OutOfRange { .. })
        ));
        // Negative zero is still zero
        assert_eq!(Amount::from_f64(-0.0), Ok(Amount::default()));
    }

    #[test]
    fn test_new_carry_at_upper_bound() {
        assert!(Amount::new(Amount::MAX_MAJOR, 99).is_ok());
        assert_eq!(
            Amount::new(Amount::MAX_MAJOR, 100),
            Err(AmountError::OutOfRange {
                value: "1000000000000.00".to_string(),
                max: Amount::MAX_MAJOR,
            })
        );
        let amount = Amount::new(5, 250).expect("carry");
        assert_eq!((amount.major(), amount.minor()), (7, 50));
    }

    #[test]
    fn test_from_str_formats() {
        let amount: Amount = "1 234,56".parse().expect("grouped amount");
        assert_eq!((amount.major(), amount.minor()), (1234, 56));

        let amount: Amount = "1_000_000.5".parse().expect("underscored amount");
        assert_eq!((amount.major(), amount.minor()), (1_000_000, 50));

        let amount: Amount = "0.999".parse().expect("rounding amount");
        assert_eq!((amount.major(), amount.minor()), (1, 0));

        let amount: Amount = "0.005".parse().expect("midpoint amount");
        assert_eq!(amount.minor(), 1);

        let amount: Amount = "999999999999.99".parse().expect("max amount");
        assert_eq!(amount.major(), Amount::MAX_MAJOR);
    }

    #[test]
    fn test_from_str_rejects() {
        assert!(matches!(
            "abc".parse::<Amount>(),
            Err(AmountError::Parse { .. })
        ));
        assert!(matches!("".parse::<Amount>(), Err(AmountError::Parse { .. })));
        assert!(matches!(
            "-5".parse::<Amount>(),
            Err(AmountError::Negative { .. })
        ));
        assert!(matches!(
            "1000000000000".parse::<Amount>(),
            Err(AmountError::OutOfRange { .. })
        ));
        assert!(matches!(
            "999999999999.999".parse::<Amount>(),
            Err(AmountError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_display_pads_minor() {
        let amount = Amount::new(7, 5).expect("valid amount");
        assert_eq!(amount.to_string(), "7.05");
        assert_eq!(Amount::default().to_string(), "0.00");
    }
}
