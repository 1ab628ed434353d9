//! Tender prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{Catalog, CatalogError},
    offers::Offer,
    problem::{ProblemError, ProblemSpec, SupplierSpec},
    report::{Report, ReportError},
    solvers::{
        Solver, SolverError, SolverOutcome,
        branch_bound::BranchBoundSolver,
        frontier::{
            Candidate, FrontierSolver,
            observer::{FrontierObserver, NoopObserver},
        },
    },
};
