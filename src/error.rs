use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoanError {
    #[error("Division by zero in {context}")]
    DivisionByZero { context: &'static str },

    /// `period` is the 1-based payment that retires no principal.
    #[error("Non-convergent schedule: payment {period} does not cover its interest")]
    NonConvergentSchedule { period: usize },

    #[error("Arithmetic overflow in {context}")]
    Overflow { context: &'static str },

    #[error("Payment index out of range: requested {requested}, schedule has {available}")]
    PaymentIndexOutOfRange { requested: usize, available: usize },

    #[error("Payment count estimate is not a finite number")]
    NonFiniteEstimate,
}

pub type Result<T> = std::result::Result<T, LoanError>;
