//! Report

use std::io;

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{catalog::Catalog, solvers::SolverOutcome};

/// Errors that can occur when writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// IO error
    #[error("IO error")]
    IO,
}

/// Human-readable rendering of a catalog and the outcome of solving it.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a, 'c> {
    catalog: &'a Catalog<'c>,
    outcome: &'a SolverOutcome<'c>,
}

impl<'a, 'c> Report<'a, 'c> {
    /// Create a report over a catalog and the outcome computed from it.
    pub fn new(catalog: &'a Catalog<'c>, outcome: &'a SolverOutcome<'c>) -> Self {
        Report { catalog, outcome }
    }

    /// Write the offer table and a summary of the outcome.
    ///
    /// # Errors
    ///
    /// Returns a [`ReportError`] if the report cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReportError> {
        let mut builder = Builder::default();

        builder.push_record(["", "Headcount", "Price"]);

        for (index, offer) in self.catalog.iter().enumerate() {
            builder.push_record([
                format!("#{:<3}", index + 1),
                offer.headcount().to_string(),
                format!("{}", offer.price()),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table.modify(Columns::new(1..3), Alignment::right());

        writeln!(out, "{table}").map_err(|_err| ReportError::IO)?;

        write_summary(&mut out, self.catalog, self.outcome)
    }
}

fn write_summary(
    out: &mut impl io::Write,
    catalog: &Catalog<'_>,
    outcome: &SolverOutcome<'_>,
) -> Result<(), ReportError> {
    writeln!(out, " Target:    {} heads", catalog.target()).map_err(|_err| ReportError::IO)?;
    writeln!(out, " Available: {} heads", catalog.total_available())
        .map_err(|_err| ReportError::IO)?;

    match outcome.optimal() {
        Some(price) => writeln!(out, " Total:     {price}").map_err(|_err| ReportError::IO),
        None => writeln!(out, " Total:     no feasible plan").map_err(|_err| ReportError::IO),
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso};
    use testresult::TestResult;

    use crate::offers::Offer;

    use super::*;

    #[test]
    fn writes_offer_rows_and_summary() -> TestResult {
        let offers = vec![
            Offer::new(3, Money::from_minor(300, iso::GBP)),
            Offer::new(2, Money::from_minor(200, iso::GBP)),
        ];
        let catalog = Catalog::with_offers(5, offers, iso::GBP)?;
        let outcome = SolverOutcome::Optimal(Money::from_minor(500, iso::GBP));

        let mut rendered = Vec::new();
        Report::new(&catalog, &outcome).write_to(&mut rendered)?;

        let text = String::from_utf8(rendered)?;

        assert!(text.contains("Headcount"));
        assert!(text.contains("#1"));
        assert!(text.contains("Target:    5 heads"));
        assert!(text.contains("Available: 5 heads"));
        assert!(text.contains("Total:"));

        Ok(())
    }

    #[test]
    fn reports_infeasible_outcomes_in_words() -> TestResult {
        let catalog = Catalog::with_offers(
            100,
            vec![Offer::new(1, Money::from_minor(1, iso::GBP))],
            iso::GBP,
        )?;
        let outcome = SolverOutcome::Infeasible;

        let mut rendered = Vec::new();
        Report::new(&catalog, &outcome).write_to(&mut rendered)?;

        let text = String::from_utf8(rendered)?;

        assert!(text.contains("no feasible plan"));

        Ok(())
    }
}
