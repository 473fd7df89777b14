//! Quote assembly: validate, allocate, price.

use crate::domain::allocation::select_lenders;
use crate::domain::error::RatequoteError;
use crate::domain::pricing::{average_rate, monthly_repayment, total_repayment};
use crate::domain::terms::LoanTerms;
use crate::domain::validation::validate_amount;
use crate::ports::lender_store::LenderStore;

#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub amount: f64,
    /// Blended annual rate as a decimal fraction.
    pub rate: f64,
    pub monthly_repayment: f64,
    pub total_repayment: f64,
}

/// Runs the full quote pipeline. A validation failure comes back as
/// [`RatequoteError::Violation`] without touching allocation or pricing.
/// The three pricing figures each traverse the selection independently,
/// so none of them can interfere with another.
pub fn calculate_quote(
    store: &dyn LenderStore,
    amount: f64,
    terms: &LoanTerms,
) -> Result<Quote, RatequoteError> {
    validate_amount(amount, terms, store)?;

    let selected = select_lenders(store, amount);

    Ok(Quote {
        amount,
        rate: average_rate(&selected)?,
        monthly_repayment: monthly_repayment(&selected, amount, terms.term_months),
        total_repayment: total_repayment(&selected, amount, terms.term_months),
    })
}
