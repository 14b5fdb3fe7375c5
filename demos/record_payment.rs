/// record a payment against a credit card debt and show the split
use debt_payment_rs::{record_payment, Debt, DebtKind, Money};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a $1,200 card balance at 18.99% APR
    let card = Debt::new("Visa", DebtKind::CreditCard)
        .with_rate(dec!(18.99))
        .with_balance(Money::from_major(1_200))
        .with_minimum_payment(Money::from_major(35));

    // record a $100 payment
    let split = record_payment(&card, Money::from_major(100))?;

    println!("payment:   $100.00");
    println!("interest:  ${}", split.interest.to_cents());
    println!("principal: ${}", split.principal.to_cents());
    println!("record:    {}", serde_json::to_string_pretty(&card)?);

    Ok(())
}
