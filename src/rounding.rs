//! Decimal places and rounding mode for every quantity the engine produces.
//!
//! "Half-down" resolves a tie toward zero and "half-up" away from zero, which
//! is what the reference schedules were generated with.

use rust_decimal::{Decimal, RoundingStrategy};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Precision {
    pub dec_places: u32,
    pub strategy: RoundingStrategy,
}

const HALF_DOWN: RoundingStrategy = RoundingStrategy::MidpointTowardZero;
const HALF_UP: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

pub const PRINCIPAL: Precision = Precision::new(2, HALF_DOWN);
pub const APR: Precision = Precision::new(6, HALF_DOWN);
pub const PAYMENT: Precision = Precision::new(2, HALF_UP);
pub const MONTHLY_RATE: Precision = Precision::new(12, HALF_DOWN);
pub const INTEREST: Precision = Precision::new(2, HALF_UP);
pub const PORTION: Precision = Precision::new(2, HALF_DOWN);
// principal / payment, fed into the closed-form payment count
pub const PAYMENT_RATIO: Precision = Precision::new(2, HALF_DOWN);
pub const PAYMENT_COUNT: Precision = Precision::new(2, HALF_UP);
pub const FUTURE_VALUE: Precision = Precision::new(2, HALF_DOWN);
pub const WHOLE_PERIODS: Precision = Precision::new(0, RoundingStrategy::ToPositiveInfinity);

impl Precision {
    pub const fn new(dec_places: u32, strategy: RoundingStrategy) -> Self {
        Self {
            dec_places,
            strategy,
        }
    }

    /// Rounds `amt` and pads it so the result always carries exactly
    /// `dec_places` digits (`5` becomes `5.00`).
    pub fn apply(&self, amt: Decimal) -> Decimal {
        let mut rounded = amt.round_dp_with_strategy(self.dec_places, self.strategy);
        rounded.rescale(self.dec_places);
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use test_log::test;

    #[test]
    fn test_half_down_ties_toward_zero() {
        assert_eq!(PRINCIPAL.apply(dec!(10.125)), dec!(10.12));
        assert_eq!(PRINCIPAL.apply(dec!(-10.125)), dec!(-10.12));
        assert_eq!(PRINCIPAL.apply(dec!(10.1251)), dec!(10.13));
    }

    #[test]
    fn test_half_up_ties_away_from_zero() {
        assert_eq!(PAYMENT.apply(dec!(10.125)), dec!(10.13));
        assert_eq!(PAYMENT.apply(dec!(-10.125)), dec!(-10.13));
        assert_eq!(PAYMENT.apply(dec!(10.1249)), dec!(10.12));
    }

    #[test]
    fn test_apply_pads_scale() {
        assert_eq!(PAYMENT.apply(dec!(5)).to_string(), "5.00");
        assert_eq!(APR.apply(dec!(-0.035)).to_string(), "-0.035000");
        assert_eq!(
            MONTHLY_RATE.apply(dec!(-0.035) / dec!(12)).to_string(),
            "-0.002916666667"
        );
    }

    #[test]
    fn test_whole_periods_rounds_up() {
        assert_eq!(WHOLE_PERIODS.apply(dec!(28.18)), dec!(29));
        assert_eq!(WHOLE_PERIODS.apply(dec!(28.00)), dec!(28));
        assert_eq!(WHOLE_PERIODS.apply(dec!(28.18)).to_string(), "29");
    }
}
