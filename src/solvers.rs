//! Solvers for procurement plans

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::catalog::Catalog;

pub mod branch_bound;
pub mod frontier;

/// Solver Errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolverError {
    /// Internal solver invariant was violated (this is a bug).
    ///
    /// Catalog construction bounds every subset sum the solvers can form, so
    /// a checked-arithmetic failure inside a solver means the catalog contract
    /// was broken, not the input.
    #[error("solver invariant violated: {message}")]
    InvariantViolation {
        /// What invariant was violated
        message: &'static str,
    },
}

/// Outcome of a solve: the cheapest feasible plan, or proof that none exists.
///
/// Infeasibility is a value, never a numeric sentinel: a catalog whose offers
/// cannot reach the target yields [`SolverOutcome::Infeasible`], and no
/// "infinity" price is ever surfaced.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverOutcome<'a> {
    /// Minimum total price over all offer subsets meeting the target.
    Optimal(Money<'a, Currency>),

    /// No subset of the offers reaches the target headcount.
    Infeasible,
}

impl<'a> SolverOutcome<'a> {
    /// The optimal price, if a feasible plan exists.
    pub fn optimal(&self) -> Option<&Money<'a, Currency>> {
        match self {
            SolverOutcome::Optimal(price) => Some(price),
            SolverOutcome::Infeasible => None,
        }
    }

    /// The optimal price in minor units, if a feasible plan exists.
    pub fn optimal_minor_units(&self) -> Option<i64> {
        self.optimal().map(Money::to_minor_units)
    }

    /// Check whether the catalog admitted no feasible plan.
    pub fn is_infeasible(&self) -> bool {
        matches!(self, SolverOutcome::Infeasible)
    }
}

/// Trait for computing the cheapest feasible procurement from a catalog
pub trait Solver {
    /// Compute the cheapest combination of offers meeting the catalog's target.
    ///
    /// # Errors
    ///
    /// Returns a [`SolverError`] if the solver encounters an error.
    fn solve<'a>(catalog: &Catalog<'a>) -> Result<SolverOutcome<'a>, SolverError>;
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso};

    use super::*;

    #[test]
    fn optimal_outcome_exposes_price() {
        let outcome = SolverOutcome::Optimal(Money::from_minor(500, iso::GBP));

        assert_eq!(outcome.optimal_minor_units(), Some(500));
        assert!(!outcome.is_infeasible());
    }

    #[test]
    fn infeasible_outcome_has_no_price() {
        let outcome = SolverOutcome::Infeasible;

        assert_eq!(outcome.optimal(), None);
        assert!(outcome.is_infeasible());
    }
}
