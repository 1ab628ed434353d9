//! Branch & Bound Solver
//!
//! Depth-first alternative to the frontier solver. Offers are visited in
//! cheapest-price-per-head order and the search branches on taking or skipping
//! each one, abandoning any branch whose spent price plus a fractional
//! completion bound can no longer beat the best plan found. The bound relaxes
//! the all-or-nothing rule: it fills the outstanding headcount greedily and
//! lets the final offer be bought pro rata, which never overestimates the true
//! completion price.
//!
//! The frontier solver is the engine of choice; this one exists as an
//! independently-derived cross-check with the same outcome contract.

use std::cmp::Ordering;

use rusty_money::Money;

use crate::{
    catalog::Catalog,
    solvers::{Solver, SolverError, SolverOutcome},
};

/// Solver exploring take/skip decisions depth-first with a relaxation bound
#[derive(Debug)]
pub struct BranchBoundSolver;

impl Solver for BranchBoundSolver {
    fn solve<'a>(catalog: &Catalog<'a>) -> Result<SolverOutcome<'a>, SolverError> {
        if catalog.target() == 0 {
            // The empty subset already satisfies a zero target.
            return Ok(SolverOutcome::Optimal(Money::from_minor(
                0,
                catalog.currency(),
            )));
        }
        if !catalog.can_meet_target() {
            return Ok(SolverOutcome::Infeasible);
        }

        // Offers supplying nobody cannot move a plan toward the target and
        // never price below zero, so no optimal plan needs them. Dropping them
        // here also keeps the price-per-head ordering total.
        let mut offers: Vec<Ranked> = catalog
            .iter()
            .filter(|offer| offer.headcount() > 0)
            .map(|offer| Ranked {
                headcount: offer.headcount(),
                price: offer.price().to_minor_units(),
            })
            .collect();
        offers.sort_by(|a, b| unit_price_order(*a, *b));

        let mut search = Search {
            offers,
            best: None,
        };
        search.descend(0, catalog.target(), 0)?;

        Ok(match search.best {
            Some(minor_units) => {
                SolverOutcome::Optimal(Money::from_minor(minor_units, catalog.currency()))
            }
            None => SolverOutcome::Infeasible,
        })
    }
}

/// An offer reduced to the two fields the search ranks and sums.
#[derive(Clone, Copy, Debug)]
struct Ranked {
    headcount: i64,
    price: i64,
}

/// Cheapest price per head first, ties broken by larger headcount first.
///
/// The ratios are compared exactly by cross-multiplying in `i128`;
/// floating-point unit prices can collapse distinct ratios on large values
/// and quietly reorder the search.
fn unit_price_order(a: Ranked, b: Ranked) -> Ordering {
    let lhs = i128::from(a.price) * i128::from(b.headcount);
    let rhs = i128::from(b.price) * i128::from(a.headcount);

    lhs.cmp(&rhs).then_with(|| b.headcount.cmp(&a.headcount))
}

struct Search {
    offers: Vec<Ranked>,
    best: Option<i64>,
}

impl Search {
    fn descend(&mut self, index: usize, outstanding: i64, spent: i64) -> Result<(), SolverError> {
        if outstanding <= 0 {
            if self.best.is_none_or(|best| spent < best) {
                self.best = Some(spent);
            }
            return Ok(());
        }

        let Some(offer) = self.offers.get(index).copied() else {
            return Ok(());
        };

        let Some(bound) = self.completion_bound(index, outstanding) else {
            // Even taking every remaining offer falls short of the target.
            return Ok(());
        };
        if let Some(best) = self.best {
            if i128::from(spent) + bound >= i128::from(best) {
                return Ok(());
            }
        }

        let spent_taking =
            spent
                .checked_add(offer.price)
                .ok_or(SolverError::InvariantViolation {
                    message: "plan price sum overflowed",
                })?;

        self.descend(index + 1, outstanding - offer.headcount, spent_taking)?;
        self.descend(index + 1, outstanding, spent)
    }

    /// Lower bound on the price of covering `outstanding` heads with the
    /// offers at `index` onward.
    ///
    /// Offers are already sorted by price per head, so taking them whole until
    /// the need fits inside one offer, then charging that offer pro rata, is
    /// the fractional optimum. The truncating division only lowers the bound
    /// further, which keeps it admissible. `None` means the remaining offers
    /// cannot cover the need at any price.
    fn completion_bound(&self, index: usize, outstanding: i64) -> Option<i128> {
        let mut need = i128::from(outstanding);
        let mut bound: i128 = 0;

        for offer in self.offers.iter().skip(index) {
            let headcount = i128::from(offer.headcount);
            if headcount < need {
                bound += i128::from(offer.price);
                need -= headcount;
            } else {
                return Some(bound + need * i128::from(offer.price) / headcount);
            }
        }

        None
    }
}
