//! Frontier Observer

use crate::solvers::frontier::Candidate;

/// Observer trait for watching the frontier as offers are folded in.
///
/// The solver remains the only implementation of the fold; observers passively
/// record what happens, for diagnostics or for checking the frontier
/// invariants from the outside.
///
/// # Zero Overhead
///
/// When no observer is provided (the default case), the solver uses a
/// [`NoopObserver`] and the observer calls are optimized away via
/// monomorphization.
pub trait FrontierObserver {
    /// Called when a folded offer completes a plan cheaper than any seen before.
    ///
    /// # Parameters
    ///
    /// - `offer_index`: Index of the offer in the sorted catalog
    /// - `price_minor`: Price of the new best plan in minor units
    fn on_plan_improved(&mut self, _offer_index: usize, _price_minor: i64) {}

    /// Called after an offer has been folded and the next frontier swapped in.
    ///
    /// # Parameters
    ///
    /// - `offer_index`: Index of the offer in the sorted catalog
    /// - `best_minor`: Cheapest complete plan so far in minor units, if any
    /// - `frontier`: The frontier states, headcount and price strictly decreasing
    fn on_offer_folded(&mut self, offer_index: usize, best_minor: Option<i64>, frontier: &[Candidate]);
}

/// No-op observer for unobserved solves.
#[derive(Debug, Default)]
pub struct NoopObserver;

impl FrontierObserver for NoopObserver {
    fn on_offer_folded(&mut self, _: usize, _: Option<i64>, _: &[Candidate]) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MinimalObserver;

    impl FrontierObserver for MinimalObserver {
        fn on_offer_folded(
            &mut self,
            _offer_index: usize,
            _best_minor: Option<i64>,
            _frontier: &[Candidate],
        ) {
        }
    }

    #[test]
    fn default_plan_callback_is_callable() {
        let mut observer = MinimalObserver;
        let obs: &mut dyn FrontierObserver = &mut observer;

        obs.on_plan_improved(0, 100);
    }
}
