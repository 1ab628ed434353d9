//! Problem Files
//!
//! Serde model for procurement problems described in YAML. A problem names a
//! target headcount, an optional ISO currency code and the supplier offers;
//! [`ProblemSpec::catalog`] turns it into a validated [`Catalog`].
//!
//! ```yaml
//! target: 5
//! currency: GBP
//! suppliers:
//!   - headcount: 3
//!     price: 300
//!   - headcount: 2
//!     price: 200
//! ```

use rusty_money::{Money, iso};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    catalog::{Catalog, CatalogError},
    offers::Offer,
};

/// Errors related to reading a problem description.
#[derive(Debug, Error)]
pub enum ProblemError {
    /// The currency code is not a known ISO 4217 code.
    #[error("unknown ISO currency code {0}")]
    UnknownCurrency(String),

    /// Wrapped YAML parsing error.
    #[error(transparent)]
    Parse(#[from] serde_norway::Error),

    /// Wrapped catalog validation error.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// One supplier line in a problem file: an all-or-nothing block of headcount
/// at a price in minor units.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SupplierSpec {
    /// Headcount supplied by the contract
    pub headcount: i64,

    /// Price of the contract in minor units
    pub price: i64,
}

/// A procurement problem as described on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct ProblemSpec {
    /// Required total headcount
    pub target: i64,

    /// ISO 4217 currency code for all prices
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Candidate supplier offers
    pub suppliers: Vec<SupplierSpec>,
}

fn default_currency() -> String {
    "GBP".to_owned()
}

impl ProblemSpec {
    /// Parse a problem from YAML text.
    ///
    /// # Errors
    ///
    /// Returns a [`ProblemError::Parse`] if the text is not a valid problem
    /// description.
    pub fn from_yaml(text: &str) -> Result<Self, ProblemError> {
        Ok(serde_norway::from_str(text)?)
    }

    /// Build a validated catalog from this problem.
    ///
    /// # Errors
    ///
    /// Returns a [`ProblemError`] if the currency code is unknown or the
    /// offers fail catalog validation.
    pub fn catalog(&self) -> Result<Catalog<'static>, ProblemError> {
        let currency = iso::find(&self.currency)
            .ok_or_else(|| ProblemError::UnknownCurrency(self.currency.clone()))?;

        let offers: Vec<Offer<'static>> = self
            .suppliers
            .iter()
            .map(|supplier| Offer::new(supplier.headcount, Money::from_minor(supplier.price, currency)))
            .collect();

        Ok(Catalog::with_offers(self.target, offers, currency)?)
    }
}
