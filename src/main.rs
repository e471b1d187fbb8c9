use finance::loan::Loan;
use finance::rounding::WHOLE_PERIODS;
use log::info;
use rust_decimal_macros::dec;
use simple_logger::SimpleLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    let loan = Loan::new(dec!(-15226.29), dec!(-0.035), dec!(102.87) + dec!(459.21));
    info!(
        "loan of {} at {} paid {} per month",
        loan.balance(),
        loan.apr(),
        loan.payment()
    );

    println!("Loan: {}", loan);

    let payments = loan.amortization_schedule()?.len();
    let num_payments = loan.number_of_payments()?;
    println!(
        "Count Payments:{} Calc Payments:{}",
        payments,
        WHOLE_PERIODS.apply(num_payments)
    );

    println!("Future Value after 5 payments:{}", loan.future_value(5)?);

    Ok(())
}
