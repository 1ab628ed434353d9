//! Offers

use rusty_money::{Money, iso::Currency};

/// One supplier's all-or-nothing contract: a block of headcount at a fixed price.
///
/// Offers have no identity beyond their values; duplicate offers are legal and
/// count as independent contracts.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Offer<'a> {
    headcount: i64,
    price: Money<'a, Currency>,
}

impl<'a> Offer<'a> {
    /// Creates a new offer with the given headcount and price
    pub fn new(headcount: i64, price: Money<'a, Currency>) -> Self {
        Self { headcount, price }
    }

    /// Returns the headcount supplied by this offer
    pub fn headcount(&self) -> i64 {
        self.headcount
    }

    /// Returns the price of the offer
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }
}

/// Returns the cheapest offer in a list of offers
pub fn cheapest_offer<'a>(offers: &'a [Offer<'a>]) -> Option<&'a Offer<'a>> {
    offers
        .iter()
        .min_by_key(|offer| offer.price().to_minor_units())
}
