//! Sample order history.
//!
//! There is no order system behind the storefront; the account screen
//! shows a fixed set of sample orders. Read-only.

use chrono::NaiveDate;

use mercato_core::Price;
use rust_decimal::Decimal;

/// Fulfillment state shown next to an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Delivered,
    Processing,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Delivered => "Delivered",
            Self::Processing => "Processing",
        })
    }
}

/// One row of the account screen's order history.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Display reference, e.g. `ORD-001`.
    pub id: String,
    pub date: NaiveDate,
    pub status: OrderStatus,
    pub total: Price,
    /// Number of items in the order.
    pub items: u32,
}

/// The hard-coded order history.
#[must_use]
pub fn sample_orders() -> Vec<Order> {
    fn order(id: &str, date: NaiveDate, status: OrderStatus, cents: i64, items: u32) -> Order {
        Order {
            id: id.to_owned(),
            date,
            status,
            total: Price::new(Decimal::new(cents, 2)).unwrap_or(Price::ZERO),
            items,
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid sample date")
    }

    vec![
        order("ORD-001", date(2023, 5, 1), OrderStatus::Delivered, 129_997, 3),
        order("ORD-002", date(2023, 4, 15), OrderStatus::Processing, 89_999, 1),
        order("ORD-003", date(2023, 3, 22), OrderStatus::Delivered, 249_998, 4),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_orders_are_stable() {
        let orders = sample_orders();
        assert_eq!(orders.len(), 3);
        assert_eq!(orders[0].id, "ORD-001");
        assert_eq!(orders[0].total.to_string(), "1299.97");
        assert_eq!(orders[1].status, OrderStatus::Processing);
    }
}
