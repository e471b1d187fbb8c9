use crate::error::{LoanError, Result};
use crate::rounding::{
    APR, FUTURE_VALUE, INTEREST, MONTHLY_RATE, PAYMENT, PAYMENT_COUNT, PAYMENT_RATIO, PORTION,
    PRINCIPAL,
};
use log::{debug, trace, warn};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;

const PERIODS_PER_YEAR: Decimal = dec!(12);

/// One period of an amortization schedule.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Payment {
    principal: Decimal,
    interest: Decimal,
}

impl Payment {
    /// Both portions are normalized to [`PORTION`] (2 digits, half-down).
    pub fn new(principal: Decimal, interest: Decimal) -> Self {
        Self {
            principal: PORTION.apply(principal),
            interest: PORTION.apply(interest),
        }
    }

    /// Part of the payment applied to the balance.
    pub fn principal(&self) -> Decimal {
        self.principal
    }

    pub fn interest(&self) -> Decimal {
        self.interest
    }
}

impl fmt::Display for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Principle:{} Interest:{}", self.principal, self.interest)
    }
}

/// Fixed-payment loan. Outstanding debt is negative, so a typical loan has a
/// negative principal and APR and a positive payment.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loan {
    principal: Decimal,
    apr: Decimal,
    payment: Decimal,
}

impl Loan {
    pub fn new(principal: Decimal, apr: Decimal, payment: Decimal) -> Self {
        Self {
            principal: PRINCIPAL.apply(principal),
            apr: APR.apply(apr),
            payment: PAYMENT.apply(payment),
        }
    }

    pub fn balance(&self) -> Decimal {
        self.principal
    }

    pub fn apr(&self) -> Decimal {
        self.apr
    }

    pub fn payment(&self) -> Decimal {
        self.payment
    }

    pub fn monthly_rate(&self) -> Decimal {
        MONTHLY_RATE.apply(self.apr / PERIODS_PER_YEAR)
    }

    /// Simulates the loan payment by payment until the balance reaches zero.
    ///
    /// Each period accrues `balance * monthly_rate` of interest; the rest of
    /// the payment retires principal. The final payment is clamped to the
    /// remaining balance. Fails with [`LoanError::NonConvergentSchedule`]
    /// when a payment retires no principal.
    ///
    /// Every accepted period retires at least one cent, so the loop ends
    /// after at most `|principal| / 0.01` payments.
    pub fn amortization_schedule(&self) -> Result<Vec<Payment>> {
        let monthly_rate = self.monthly_rate();
        let mut schedule: Vec<Payment> = Vec::new();
        let mut balance = self.principal;

        while balance < Decimal::ZERO {
            let period = schedule.len() + 1;
            let interest = balance
                .checked_mul(monthly_rate)
                .map(|amt| INTEREST.apply(amt))
                .ok_or(LoanError::Overflow {
                    context: "balance * monthly rate",
                })?;
            let mut principal = self
                .payment
                .checked_sub(interest)
                .ok_or(LoanError::Overflow {
                    context: "payment - interest",
                })?;
            if principal <= Decimal::ZERO {
                warn!(
                    "pmt # {}: payment {} does not cover interest {} at balance {}",
                    period, self.payment, interest, balance
                );
                return Err(LoanError::NonConvergentSchedule { period });
            }
            if balance.abs() < principal {
                principal = balance.abs();
            }

            let pmt = Payment::new(principal, interest);
            trace!(
                "pmt # {}, begin balance {}, interest {}, principal {}",
                period,
                balance,
                pmt.interest,
                pmt.principal
            );
            schedule.push(pmt);

            let next_balance = balance
                .checked_add(pmt.principal)
                .ok_or(LoanError::Overflow {
                    context: "balance + principal",
                })?;
            balance = if next_balance < Decimal::ZERO {
                next_balance
            } else {
                Decimal::ZERO
            };
        }

        debug!(
            "schedule of {} payments at monthly rate {}",
            schedule.len(),
            monthly_rate
        );
        Ok(schedule)
    }

    /// Closed-form payment count:
    ///
    /// `n = ln(1 - (B / m) * r) / ln(1 + r)`
    ///
    /// with `B` the principal, `m` the payment and `r` the monthly rate.
    /// Evaluated in `f64`, so it only approximates the simulated count; its
    /// ceiling matches the length of [`Loan::amortization_schedule`].
    pub fn number_of_payments(&self) -> Result<Decimal> {
        let monthly_rate = self.monthly_rate();
        if self.payment.is_zero() {
            return Err(LoanError::DivisionByZero {
                context: "principal / payment",
            });
        }
        let pv_month = self
            .principal
            .checked_div(self.payment)
            .map(|ratio| PAYMENT_RATIO.apply(ratio))
            .ok_or(LoanError::Overflow {
                context: "principal / payment",
            })?;

        let rate = to_f64(monthly_rate)?;
        let numerator = (1.0 - to_f64(pv_month)? * rate).ln();
        let denominator = (1.0 + rate).ln();
        trace!(
            "pv month {}, ln terms {} / {}",
            pv_month,
            numerator,
            denominator
        );

        let numerator = from_f64(numerator)?;
        let denominator = from_f64(denominator)?;
        numerator
            .checked_div(denominator)
            .map(|n| PAYMENT_COUNT.apply(n))
            .ok_or(LoanError::DivisionByZero {
                context: "ln(1 + monthly rate)",
            })
    }

    /// Balance left after the first `payments` scheduled payments.
    pub fn future_value(&self, payments: usize) -> Result<Decimal> {
        let schedule = self.amortization_schedule()?;
        let paid = schedule
            .get(..payments)
            .ok_or(LoanError::PaymentIndexOutOfRange {
                requested: payments,
                available: schedule.len(),
            })?
            .iter()
            .map(Payment::principal)
            .sum::<Decimal>();

        Ok(FUTURE_VALUE.apply(self.principal + paid))
    }
}

impl fmt::Display for Loan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Principle:{}", self.principal)?;
        writeln!(f, "Interest Rate:{}", self.apr)?;
        writeln!(f, "Payment:{}", self.payment)?;
        match self.amortization_schedule() {
            Ok(schedule) => {
                for pmt in &schedule {
                    writeln!(f, "{}", pmt)?;
                }
            }
            Err(e) => writeln!(f, "{}", e)?,
        }
        Ok(())
    }
}

fn to_f64(amt: Decimal) -> Result<f64> {
    amt.to_f64().ok_or(LoanError::NonFiniteEstimate)
}

fn from_f64(amt: f64) -> Result<Decimal> {
    if !amt.is_finite() {
        return Err(LoanError::NonFiniteEstimate);
    }
    Decimal::from_f64(amt).ok_or(LoanError::NonFiniteEstimate)
}
