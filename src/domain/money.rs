//! Monetary types for price, quantity and cost representation.

use rust_decimal::Decimal;

/// Price represented as a Decimal for precision.
pub type Price = Decimal;

/// Asset quantity represented as a Decimal for precision.
pub type Quantity = Decimal;

/// Quote-currency amount (cost, borrow, profit).
pub type Amount = Decimal;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn quantity_times_price_is_amount() {
        let price: Price = dec!(1.50);
        let quantity: Quantity = dec!(100.0);
        let amount: Amount = price * quantity;

        assert_eq!(amount, dec!(150));
    }
}
