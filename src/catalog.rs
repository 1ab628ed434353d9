//! Supplier Catalog

use rusty_money::iso::Currency;
use smallvec::SmallVec;
use thiserror::Error;

use crate::offers::Offer;

/// Errors related to catalog construction.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// An offer's currency differs from the catalog currency (index, offer currency, catalog currency).
    #[error("Offer {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(usize, &'static str, &'static str),

    /// An offer supplies a negative headcount (index, headcount).
    #[error("Offer {0} has negative headcount {1}")]
    NegativeHeadcount(usize, i64),

    /// An offer carries a negative price in minor units (index, minor units).
    #[error("Offer {0} has negative price {1}")]
    NegativePrice(usize, i64),

    /// The target headcount is negative.
    #[error("target headcount {0} is negative")]
    NegativeTarget(i64),

    /// The combined headcount of all offers does not fit in a 64-bit sum.
    #[error("combined headcount of all offers overflows")]
    HeadcountOverflow,

    /// The combined price of all offers does not fit in a 64-bit minor-unit sum.
    #[error("combined price of all offers overflows")]
    PriceOverflow,
}

/// A validated, immutable set of supplier offers together with the target headcount.
///
/// Offers are held sorted by headcount descending, ties broken by price ascending.
/// Processing high-headcount, low-price offers first is what makes the suffix-total
/// pruning bound useful to the solvers, so the ordering is part of the contract.
#[derive(Debug)]
pub struct Catalog<'a> {
    target: i64,
    offers: SmallVec<[Offer<'a>; 10]>,

    /// `remaining[i]` is the combined headcount of offers at index >= `i`,
    /// with `remaining[len()] == 0`.
    remaining: Vec<i64>,

    currency: &'static Currency,
}

impl<'a> Catalog<'a> {
    /// Create a catalog from raw offers and a target headcount.
    ///
    /// Offers are validated and sorted; the suffix headcount totals are computed
    /// once here. Rejecting headcount and price sums that overflow a 64-bit
    /// total up front means every subset sum formed by the solvers is
    /// representable.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the target or any offer is negative, an
    /// offer's currency differs from `currency`, or the combined headcount or
    /// price of all offers overflows.
    pub fn with_offers(
        target: i64,
        offers: impl Into<SmallVec<[Offer<'a>; 10]>>,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        if target < 0 {
            return Err(CatalogError::NegativeTarget(target));
        }

        let mut offers = offers.into();

        offers.iter().enumerate().try_for_each(|(i, offer)| {
            let offer_currency = offer.price().currency();
            if offer_currency != currency {
                return Err(CatalogError::CurrencyMismatch(
                    i,
                    offer_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ));
            }
            if offer.headcount() < 0 {
                return Err(CatalogError::NegativeHeadcount(i, offer.headcount()));
            }
            let minor_units = offer.price().to_minor_units();
            if minor_units < 0 {
                return Err(CatalogError::NegativePrice(i, minor_units));
            }
            Ok(())
        })?;

        offers.sort_unstable_by(|a, b| {
            b.headcount()
                .cmp(&a.headcount())
                .then_with(|| a.price().to_minor_units().cmp(&b.price().to_minor_units()))
        });

        let mut remaining = vec![0_i64; offers.len() + 1];
        let mut acc = 0_i64;
        for (slot, offer) in remaining.iter_mut().rev().skip(1).zip(offers.iter().rev()) {
            acc = acc
                .checked_add(offer.headcount())
                .ok_or(CatalogError::HeadcountOverflow)?;
            *slot = acc;
        }

        offers.iter().try_fold(0_i64, |acc, offer| {
            acc.checked_add(offer.price().to_minor_units())
                .ok_or(CatalogError::PriceOverflow)
        })?;

        Ok(Catalog {
            target,
            offers,
            remaining,
            currency,
        })
    }

    /// Get the target headcount.
    pub fn target(&self) -> i64 {
        self.target
    }

    /// Get the catalog currency.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Get the offers in sorted order.
    pub fn offers(&self) -> &[Offer<'a>] {
        &self.offers
    }

    /// Iterate over the offers in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &Offer<'a>> {
        self.offers.iter()
    }

    /// Get the number of offers in the catalog.
    pub fn len(&self) -> usize {
        self.offers.len()
    }

    /// Check if the catalog has no offers.
    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    /// Combined headcount of the offers at index >= `index`.
    ///
    /// Out-of-range indexes report 0, matching the empty suffix.
    pub fn available_from(&self, index: usize) -> i64 {
        self.remaining.get(index).copied().unwrap_or(0)
    }

    /// Combined headcount of every offer in the catalog.
    pub fn total_available(&self) -> i64 {
        self.available_from(0)
    }

    /// Check whether taking every offer reaches the target headcount.
    ///
    /// A `false` here is a proof of infeasibility; no solver needs to run.
    pub fn can_meet_target(&self) -> bool {
        self.total_available() >= self.target
    }
}
