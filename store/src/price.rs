use std::{fmt, iter::Sum, ops::Add};

/// A non-negative amount of money, stored as whole cents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Price(cents)
    }

    pub const fn from_dollars(dollars: u64) -> Self {
        Price(dollars * 100)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// The price of `quantity` units. Saturates instead of overflowing.
    pub const fn times(self, quantity: u32) -> Self {
        Price(self.0.saturating_mul(quantity as u64))
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::Price;

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(Price::from_dollars(25).to_string(), "$25.00");
        assert_eq!(Price::from_cents(1205).to_string(), "$12.05");
        assert_eq!(Price::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn times_and_sum() {
        let total: Price = [Price::from_dollars(25).times(2), Price::from_dollars(8)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_dollars(58));
        assert_eq!(Price::from_cents(u64::MAX).times(2), Price::from_cents(u64::MAX));
    }
}
