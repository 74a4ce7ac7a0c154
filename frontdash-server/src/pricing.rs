//! Order pricing and validation
//!
//! Prices are captured into a [`PriceSnapshot`] before pricing runs, so the
//! computation itself is pure: menu edits that land between the snapshot read
//! and order persistence are accepted at the snapshot's prices.
//!
//! All currency components are rounded half-up to 2 decimals independently
//! before summation:
//!
//! ```text
//! line_subtotal  = round2(price * quantity)
//! subtotal       = sum(line_subtotal)
//! service_charge = round2(subtotal * 0.0825)
//! tip            = round2(tip or 0)
//! grand_total    = subtotal + service_charge + tip
//! ```

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Fixed service charge rate: 8.25%
pub const SERVICE_CHARGE_RATE: Decimal = Decimal::from_parts(825, 0, 0, false, 4);

/// Round a currency amount to 2 decimals, half-up (midpoint away from zero)
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert a currency `Decimal` to the f64 stored in REAL columns
pub fn currency_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Convert an f64 from a REAL column or request payload into a `Decimal`
pub fn currency_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value)
}

/// Menu prices captured for one restaurant at a point in time
#[derive(Debug, Clone, Default)]
pub struct PriceSnapshot {
    prices: HashMap<i64, Decimal>,
}

impl PriceSnapshot {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (i64, Decimal)>) -> Self {
        Self {
            prices: pairs.into_iter().collect(),
        }
    }

    /// Price for an item, if it was part of the snapshot
    pub fn price(&self, item_id: i64) -> Option<Decimal> {
        self.prices.get(&item_id).copied()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

/// One requested (item, quantity) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub item_id: i64,
    pub quantity: i64,
}

/// A priced line, ready for persistence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedLine {
    pub item_id: i64,
    pub quantity: i64,
    pub line_subtotal: Decimal,
}

/// The priced order: lines plus the four derived totals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderTotals {
    pub lines: Vec<PricedLine>,
    pub subtotal: Decimal,
    pub service_charge: Decimal,
    pub tip: Decimal,
    pub grand_total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("order contains no items")]
    EmptyOrder,
    #[error("quantity must be at least 1 for item {item_id}")]
    InvalidQuantity { item_id: i64 },
    #[error("tip amount cannot be negative")]
    NegativeTip,
    /// One or more requested items are not on the restaurant's menu.
    /// The whole order is rejected; there are no partial orders.
    #[error("items not on the restaurant menu: {missing:?}")]
    InvalidItems { missing: Vec<i64> },
}

/// Validate and price an order against a menu snapshot.
///
/// An absent tip is treated as zero. Duplicate item ids are allowed and
/// priced as separate lines.
pub fn price_order(
    snapshot: &PriceSnapshot,
    lines: &[OrderLine],
    tip: Option<Decimal>,
) -> Result<OrderTotals, PricingError> {
    if lines.is_empty() {
        return Err(PricingError::EmptyOrder);
    }
    for line in lines {
        if line.quantity < 1 {
            return Err(PricingError::InvalidQuantity {
                item_id: line.item_id,
            });
        }
    }
    let tip = tip.unwrap_or(Decimal::ZERO);
    if tip < Decimal::ZERO {
        return Err(PricingError::NegativeTip);
    }

    // Every distinct requested id must be covered by the snapshot,
    // otherwise the entire order is rejected.
    let mut missing = Vec::new();
    let mut seen = HashSet::new();
    for line in lines {
        if snapshot.price(line.item_id).is_none() && seen.insert(line.item_id) {
            missing.push(line.item_id);
        }
    }
    if !missing.is_empty() {
        return Err(PricingError::InvalidItems { missing });
    }

    let mut priced = Vec::with_capacity(lines.len());
    let mut subtotal = Decimal::ZERO;
    for line in lines {
        let price = snapshot
            .price(line.item_id)
            .ok_or(PricingError::InvalidItems {
                missing: vec![line.item_id],
            })?;
        let line_subtotal = round2(price * Decimal::from(line.quantity));
        subtotal += line_subtotal;
        priced.push(PricedLine {
            item_id: line.item_id,
            quantity: line.quantity,
            line_subtotal,
        });
    }

    let service_charge = round2(subtotal * SERVICE_CHARGE_RATE);
    let tip = round2(tip);
    let grand_total = subtotal + service_charge + tip;

    Ok(OrderTotals {
        lines: priced,
        subtotal,
        service_charge,
        tip,
        grand_total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn snapshot(pairs: &[(i64, &str)]) -> PriceSnapshot {
        PriceSnapshot::from_pairs(pairs.iter().map(|(id, p)| (*id, dec(p))))
    }

    #[test]
    fn round2_is_half_up() {
        assert_eq!(round2(dec("1.005")), dec("1.01"));
        assert_eq!(round2(dec("2.26875")), dec("2.27"));
        assert_eq!(round2(dec("1.004")), dec("1.00"));
        assert_eq!(round2(dec("3.335")), dec("3.34"));
    }

    #[test]
    fn service_charge_rate_is_8_25_percent() {
        assert_eq!(SERVICE_CHARGE_RATE, dec("0.0825"));
    }

    #[test]
    fn pasta_house_scenario() {
        // Two items at $10.00, one at $7.50, $3.00 tip
        let snap = snapshot(&[(1, "10.00"), (2, "7.50")]);
        let lines = [
            OrderLine {
                item_id: 1,
                quantity: 2,
            },
            OrderLine {
                item_id: 2,
                quantity: 1,
            },
        ];

        let totals = price_order(&snap, &lines, Some(dec("3.00"))).unwrap();
        assert_eq!(totals.subtotal, dec("27.50"));
        assert_eq!(totals.service_charge, dec("2.27"));
        assert_eq!(totals.tip, dec("3.00"));
        assert_eq!(totals.grand_total, dec("32.77"));
    }

    #[test]
    fn line_subtotals_are_rounded_before_summing() {
        // 3 x 3.335 = 10.005 unrounded; per-line rounding gives 10.01 instead of 10.00
        let snap = snapshot(&[(1, "3.335")]);
        let lines = [OrderLine {
            item_id: 1,
            quantity: 3,
        }];

        let totals = price_order(&snap, &lines, None).unwrap();
        assert_eq!(totals.lines[0].line_subtotal, dec("10.01"));
        assert_eq!(totals.subtotal, dec("10.01"));
    }

    #[test]
    fn tip_omitted_is_zero() {
        let snap = snapshot(&[(1, "10.00")]);
        let lines = [OrderLine {
            item_id: 1,
            quantity: 1,
        }];

        let totals = price_order(&snap, &lines, None).unwrap();
        assert_eq!(totals.tip, dec("0.00"));
        assert_eq!(
            totals.grand_total,
            totals.subtotal + totals.service_charge
        );
    }

    #[test]
    fn duplicate_item_ids_price_as_separate_lines() {
        let snap = snapshot(&[(1, "5.00")]);
        let lines = [
            OrderLine {
                item_id: 1,
                quantity: 1,
            },
            OrderLine {
                item_id: 1,
                quantity: 2,
            },
        ];

        let totals = price_order(&snap, &lines, None).unwrap();
        assert_eq!(totals.lines.len(), 2);
        assert_eq!(totals.subtotal, dec("15.00"));
    }

    #[test]
    fn unknown_item_rejects_whole_order() {
        let snap = snapshot(&[(1, "10.00")]);
        let lines = [
            OrderLine {
                item_id: 1,
                quantity: 1,
            },
            OrderLine {
                item_id: 99,
                quantity: 1,
            },
            OrderLine {
                item_id: 42,
                quantity: 1,
            },
        ];

        let err = price_order(&snap, &lines, None).unwrap_err();
        assert_eq!(
            err,
            PricingError::InvalidItems {
                missing: vec![99, 42]
            }
        );
    }

    #[test]
    fn empty_order_is_rejected() {
        let snap = snapshot(&[(1, "10.00")]);
        assert_eq!(price_order(&snap, &[], None), Err(PricingError::EmptyOrder));
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let snap = snapshot(&[(1, "10.00")]);
        let lines = [OrderLine {
            item_id: 1,
            quantity: 0,
        }];
        assert_eq!(
            price_order(&snap, &lines, None),
            Err(PricingError::InvalidQuantity { item_id: 1 })
        );
    }

    #[test]
    fn negative_tip_is_rejected() {
        let snap = snapshot(&[(1, "10.00")]);
        let lines = [OrderLine {
            item_id: 1,
            quantity: 1,
        }];
        assert_eq!(
            price_order(&snap, &lines, Some(dec("-0.01"))),
            Err(PricingError::NegativeTip)
        );
    }

    #[test]
    fn tip_is_rounded_independently() {
        let snap = snapshot(&[(1, "10.00")]);
        let lines = [OrderLine {
            item_id: 1,
            quantity: 1,
        }];

        let totals = price_order(&snap, &lines, Some(dec("1.005"))).unwrap();
        assert_eq!(totals.tip, dec("1.01"));
    }

    #[test]
    fn currency_roundtrip() {
        let d = currency_decimal(7.5).unwrap();
        assert_eq!(round2(d), dec("7.50"));
        assert_eq!(currency_f64(dec("32.77")), 32.77);
    }
}
