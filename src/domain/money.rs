use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::Error;

/// A decimal quantity as it crosses the text boundary: parsed from CSV cells
/// and command input, rendered into account summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(pub Decimal);

impl Money {
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Rejects anything that is not strictly greater than zero.
    pub fn ensure_positive(amount: Decimal) -> Result<Decimal, Error> {
        if amount > Decimal::ZERO {
            Ok(amount)
        } else {
            Err(Error::InvalidArgument(format!(
                "{} must be a positive number",
                Money(amount)
            )))
        }
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl FromStr for Money {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.is_empty() {
            return Err(Error::InvalidArgument("amount is empty".to_string()));
        }

        Decimal::from_str(s)
            .map(Self)
            .map_err(|_| Error::InvalidArgument(format!("{} must be a number", s)))
    }
}

// Integral values keep one fractional digit ("1000.0"), everything else drops
// trailing zeros ("1000.01").
impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let normalized = self.0.normalize();
        if normalized.scale() == 0 {
            write!(f, "{}.0", normalized)
        } else {
            write!(f, "{}", normalized)
        }
    }
}
