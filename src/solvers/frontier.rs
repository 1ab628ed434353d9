//! Frontier Solver
//!
//! Exact solver that folds offers into a Pareto frontier of reachable
//! (headcount, price) states, one offer at a time.
//!
//! The frontier holds, for every subset of the offers folded so far that can
//! still matter, the states that are not dominated by another state with at
//! least as much headcount at no greater price. Because the frontier is sorted
//! simultaneously by both fields, folding an offer splits it into two already
//! sorted sequences (the states that skip the offer and the states that take
//! it, shifted by the offer's headcount and price) which merge back into a
//! sorted frontier in a single pass, without re-sorting.
//!
//! Three prunes keep the frontier small:
//!
//! 1. States that reach the target once the offer is taken become complete
//!    plans; they update the best price and leave the frontier.
//! 2. States that cannot reach the target even with every remaining offer are
//!    dropped using the catalog's suffix totals.
//! 3. During the merge, a candidate is kept only if it is strictly cheaper
//!    than the last state emitted, so every surviving state is a strict
//!    improvement in price as headcount falls.
//!
//! The work per offer is linear in the frontier size, which never exceeds the
//! number of price-improving states, at most one per fold plus the empty
//! state. A dense table indexed by headcount is never built, so large targets
//! cost nothing by themselves.

use std::cmp::Ordering;

use rusty_money::Money;

use crate::{
    catalog::Catalog,
    solvers::{
        Solver, SolverError, SolverOutcome,
        frontier::observer::{FrontierObserver, NoopObserver},
    },
};

pub mod observer;

/// A reachable state on the frontier: some subset of the folded offers
/// supplies `headcount` people for `price` minor units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// Combined headcount of the subset.
    pub headcount: i64,

    /// Combined price of the subset in minor units.
    pub price: i64,
}

impl Candidate {
    /// The empty subset: no people, no cost.
    pub const EMPTY: Candidate = Candidate {
        headcount: 0,
        price: 0,
    };

    fn shifted(self, headcount: i64, price: i64) -> Result<Candidate, SolverError> {
        Ok(Candidate {
            headcount: self.headcount.checked_add(headcount).ok_or(
                SolverError::InvariantViolation {
                    message: "frontier headcount sum overflowed",
                },
            )?,
            price: self
                .price
                .checked_add(price)
                .ok_or(SolverError::InvariantViolation {
                    message: "frontier price sum overflowed",
                })?,
        })
    }
}

/// Solver maintaining an incremental Pareto frontier of reachable states
#[derive(Debug)]
pub struct FrontierSolver;

impl Solver for FrontierSolver {
    fn solve<'a>(catalog: &Catalog<'a>) -> Result<SolverOutcome<'a>, SolverError> {
        Self::solve_with_observer(catalog, &mut NoopObserver)
    }
}

impl FrontierSolver {
    /// Compute the cheapest feasible procurement, reporting each fold to the
    /// given observer.
    ///
    /// With [`NoopObserver`] this monomorphises down to the plain solve; the
    /// observer exists so callers can watch the frontier evolve without the
    /// solver growing a second code path.
    ///
    /// # Errors
    ///
    /// Returns a [`SolverError`] if a solver invariant is violated.
    pub fn solve_with_observer<'a, O: FrontierObserver>(
        catalog: &Catalog<'a>,
        observer: &mut O,
    ) -> Result<SolverOutcome<'a>, SolverError> {
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

        let target = catalog.target();
        let mut best: Option<i64> = None;
        let mut frontier: Vec<Candidate> = vec![Candidate::EMPTY];

        for (index, offer) in catalog.iter().enumerate() {
            // Loop invariant, holding for `frontier` at the top of each fold:
            //   * headcount and price are strictly decreasing along the frontier,
            //     so no state dominates another
            //   * every state has headcount < target and price < best
            //   * every state, plus the combined headcount of the offers not yet
            //     folded, can still reach the target
            let headcount = offer.headcount();
            let price = offer.price().to_minor_units();

            // States reaching the target once this offer is added become
            // complete plans. They form a prefix of the frontier; the last of
            // them is the cheapest, since prices fall along the frontier.
            let reach = frontier.partition_point(|c| c.headcount >= target - headcount);
            if let Some(hit) = reach.checked_sub(1).and_then(|i| frontier.get(i)) {
                let plan = hit
                    .price
                    .checked_add(price)
                    .ok_or(SolverError::InvariantViolation {
                        message: "completed plan price overflowed",
                    })?;
                if best.is_none_or(|b| plan < b) {
                    best = Some(plan);
                    observer.on_plan_improved(index, plan);
                }
            }

            // Skip branch: states that can still reach the target using only
            // the offers after this one. The rest are dead weight and are
            // dropped for good.
            let floor = target - catalog.available_from(index + 1);
            let keep = frontier.partition_point(|c| c.headcount >= floor);

            // Take branch: the states still short of the target after adding
            // this offer, shifted by its headcount and price. A constant shift
            // in both fields preserves the frontier ordering.
            let mut taken: Vec<Candidate> = Vec::with_capacity(frontier.len() - reach);
            for candidate in frontier.iter().skip(reach) {
                taken.push(candidate.shifted(headcount, price)?);
            }

            let kept = frontier.get(..keep).unwrap_or_default();
            frontier = merge(kept, &taken, best);

            observer.on_offer_folded(index, best, &frontier);
        }

        Ok(match best {
            Some(minor_units) => {
                SolverOutcome::Optimal(Money::from_minor(minor_units, catalog.currency()))
            }
            None => SolverOutcome::Infeasible,
        })
    }
}

/// Merge the skip and take branches into the next frontier.
///
/// Both inputs are sorted strictly decreasing in headcount and price, so a
/// single two-cursor walk produces the merged frontier in order. Equal
/// headcounts collapse to the cheaper price. `limit` carries the price of the
/// last emitted state, seeded with the best complete plan: a candidate at
/// least that expensive is dominated (less headcount, no cheaper) and is
/// discarded. Cursor exhaustion is the end of a branch; there is no sentinel
/// state.
fn merge(skips: &[Candidate], takes: &[Candidate], best: Option<i64>) -> Vec<Candidate> {
    let mut next = Vec::with_capacity(skips.len() + takes.len());
    let mut skips = skips.iter().copied().peekable();
    let mut takes = takes.iter().copied().peekable();
    let mut limit = best;

    loop {
        let candidate = match (skips.peek().copied(), takes.peek().copied()) {
            (None, None) => break,
            (Some(skip), None) => {
                skips.next();
                skip
            }
            (None, Some(take)) => {
                takes.next();
                take
            }
            (Some(skip), Some(take)) => match skip.headcount.cmp(&take.headcount) {
                Ordering::Greater => {
                    skips.next();
                    skip
                }
                Ordering::Less => {
                    takes.next();
                    take
                }
                Ordering::Equal => {
                    skips.next();
                    takes.next();
                    Candidate {
                        headcount: skip.headcount,
                        price: skip.price.min(take.price),
                    }
                }
            },
        };

        if limit.is_none_or(|l| candidate.price < l) {
            limit = Some(candidate.price);
            next.push(candidate);
        }
    }

    next
}
