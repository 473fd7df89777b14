//! Loan terms: amount thresholds and the fixed repayment term.

pub const DEFAULT_INCREMENT: f64 = 100.0;
pub const DEFAULT_MINIMUM: f64 = 1_000.0;
pub const DEFAULT_MAXIMUM: f64 = 15_000.0;
pub const DEFAULT_TERM_MONTHS: u32 = 36;

#[derive(Debug, Clone, PartialEq)]
pub struct LoanTerms {
    /// Granularity a requested amount must respect.
    pub increment: f64,
    pub minimum: f64,
    pub maximum: f64,
    /// Fixed repayment term in months.
    pub term_months: u32,
}

impl Default for LoanTerms {
    fn default() -> Self {
        Self {
            increment: DEFAULT_INCREMENT,
            minimum: DEFAULT_MINIMUM,
            maximum: DEFAULT_MAXIMUM,
            term_months: DEFAULT_TERM_MONTHS,
        }
    }
}
