//! Integration tests for the frontier solver: exact answers on known
//! instances, and the frontier invariants observed after every fold.

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use rusty_money::{Money, iso};
use testresult::TestResult;

use tender::{
    catalog::{Catalog, CatalogError},
    offers::Offer,
    solvers::{
        Solver, SolverOutcome,
        frontier::{Candidate, FrontierSolver, observer::FrontierObserver},
    },
};

fn catalog(target: i64, offers: &[(i64, i64)]) -> Result<Catalog<'static>, CatalogError> {
    let offers: Vec<Offer<'static>> = offers
        .iter()
        .map(|&(headcount, price)| Offer::new(headcount, Money::from_minor(price, iso::GBP)))
        .collect();

    Catalog::with_offers(target, offers, iso::GBP)
}

/// Records every fold so the frontier invariants can be checked from outside
/// the solver.
#[derive(Debug, Default)]
struct RecordingObserver {
    folds: Vec<(usize, Option<i64>, Vec<Candidate>)>,
    improvements: Vec<(usize, i64)>,
}

impl FrontierObserver for RecordingObserver {
    fn on_plan_improved(&mut self, offer_index: usize, price_minor: i64) {
        self.improvements.push((offer_index, price_minor));
    }

    fn on_offer_folded(
        &mut self,
        offer_index: usize,
        best_minor: Option<i64>,
        frontier: &[Candidate],
    ) {
        self.folds
            .push((offer_index, best_minor, frontier.to_vec()));
    }
}

fn assert_frontier_invariants(target: i64, folds: &[(usize, Option<i64>, Vec<Candidate>)]) {
    for (offer_index, best, frontier) in folds {
        for pair in frontier.windows(2) {
            if let [above, below] = pair {
                assert!(
                    below.headcount < above.headcount,
                    "headcounts not strictly decreasing after folding offer {offer_index}"
                );
                assert!(
                    below.price < above.price,
                    "prices not strictly decreasing after folding offer {offer_index}"
                );
            }
        }

        if let Some(first) = frontier.first() {
            assert!(
                first.headcount < target,
                "state at or past the target kept after folding offer {offer_index}"
            );
            if let Some(best) = best {
                assert!(
                    first.price < *best,
                    "state no cheaper than the best plan kept after folding offer {offer_index}"
                );
            }
        }
    }
}

#[test]
fn two_small_offers_beat_one_expensive_offer() -> TestResult {
    let catalog = catalog(5, &[(3, 3), (2, 2), (4, 10)])?;

    let outcome = FrontierSolver::solve(&catalog)?;

    assert_eq!(outcome.optimal_minor_units(), Some(5));

    Ok(())
}

#[test]
fn single_offer_meeting_target_exactly() -> TestResult {
    let catalog = catalog(10, &[(10, 7)])?;

    let outcome = FrontierSolver::solve(&catalog)?;

    assert_eq!(outcome.optimal_minor_units(), Some(7));

    Ok(())
}

#[test]
fn infeasibility_is_a_distinct_outcome() -> TestResult {
    let catalog = catalog(100, &[(1, 1)])?;

    let outcome = FrontierSolver::solve(&catalog)?;

    assert_eq!(outcome, SolverOutcome::Infeasible);
    assert_eq!(outcome.optimal_minor_units(), None);

    Ok(())
}

#[test]
fn frontier_invariants_hold_after_every_fold() -> TestResult {
    let catalog = catalog(
        20,
        &[
            (7, 13),
            (7, 11),
            (6, 9),
            (5, 10),
            (5, 6),
            (4, 4),
            (3, 9),
            (2, 2),
            (1, 1),
        ],
    )?;

    let mut observer = RecordingObserver::default();
    let outcome = FrontierSolver::solve_with_observer(&catalog, &mut observer)?;

    assert!(outcome.optimal_minor_units().is_some());
    assert_eq!(observer.folds.len(), catalog.len());
    assert_frontier_invariants(catalog.target(), &observer.folds);

    Ok(())
}

#[test]
fn best_plan_improvements_are_monotonically_cheaper() -> TestResult {
    let catalog = catalog(10, &[(10, 50), (6, 20), (5, 18), (4, 15), (3, 1)])?;

    let mut observer = RecordingObserver::default();
    FrontierSolver::solve_with_observer(&catalog, &mut observer)?;

    assert!(!observer.improvements.is_empty());
    for pair in observer.improvements.windows(2) {
        if let [(_, earlier), (_, later)] = pair {
            assert!(later < earlier, "a plan improvement failed to lower the price");
        }
    }

    Ok(())
}

#[test]
fn answer_is_independent_of_offer_order() -> TestResult {
    let offers = [(7, 13), (2, 2), (5, 6), (4, 4), (6, 9), (3, 9), (5, 10)];
    let reference = FrontierSolver::solve(&catalog(15, &offers)?)?;

    let mut rng = StdRng::seed_from_u64(7);
    let mut shuffled = offers;
    for _ in 0..20 {
        shuffled.shuffle(&mut rng);
        let outcome = FrontierSolver::solve(&catalog(15, &shuffled)?)?;

        assert_eq!(
            outcome.optimal_minor_units(),
            reference.optimal_minor_units()
        );
    }

    Ok(())
}

#[test]
fn duplicate_offers_are_independent_contracts() -> TestResult {
    // Two identical (3, 4) offers can both be taken.
    let catalog = catalog(6, &[(3, 4), (3, 4), (6, 9)])?;

    let outcome = FrontierSolver::solve(&catalog)?;

    assert_eq!(outcome.optimal_minor_units(), Some(8));

    Ok(())
}
