//! Fixed-payment loan amortization on exact decimals.
//!
//! Balances follow a negative-debt convention: an outstanding loan of
//! 15,226.29 is held as `-15226.29` and the schedule runs until the balance
//! reaches zero.

pub mod error;
pub mod loan;
pub mod rounding;

pub use error::{LoanError, Result};
pub use loan::{Loan, Payment};
