//! Repayment pricing over a selected run of lenders.
//!
//! Monthly repayment uses the fixed-payment annuity formula per lender;
//! total repayment compounds each lender's principal over the full term.
//! The two figures intentionally use different financial models.

use crate::domain::error::RatequoteError;
use crate::domain::lender::Lender;

/// Splits the amount across lenders in order: full capacity while a
/// lender does not complete the amount, the exact remainder for the last
/// one. Returns (annual rate, principal drawn) pairs. Each pricing figure
/// works from its own split, so no shared state is drained between them.
fn split_principal(lenders: &[Lender], amount: f64) -> Vec<(f64, f64)> {
    let mut draws = Vec::new();
    let mut covered = 0.0;

    for lender in lenders {
        if covered >= amount {
            break;
        }
        let draw = if covered + lender.available >= amount {
            amount - covered
        } else {
            lender.available
        };
        draws.push((lender.rate, draw));
        covered += draw;
    }

    draws
}

/// Sum of per-lender fixed monthly instalments for the amount. An empty
/// selection prices to zero.
pub fn monthly_repayment(lenders: &[Lender], amount: f64, term_months: u32) -> f64 {
    split_principal(lenders, amount)
        .into_iter()
        .map(|(rate, principal)| monthly_instalment(rate, principal, term_months))
        .sum()
}

/// (r * principal) / (1 - (1 + r)^-n) with r the monthly rate. A zero
/// rate falls back to straight-line principal over the term, since the
/// annuity formula divides by zero there.
fn monthly_instalment(annual_rate: f64, principal: f64, term_months: u32) -> f64 {
    let r = annual_rate / 12.0;
    if r == 0.0 {
        return principal / f64::from(term_months);
    }
    (r * principal) / (1.0 - (1.0 + r).powf(-f64::from(term_months)))
}

/// Sum of each lender's principal compounded monthly over the full term.
/// An empty selection prices to zero.
pub fn total_repayment(lenders: &[Lender], amount: f64, term_months: u32) -> f64 {
    split_principal(lenders, amount)
        .into_iter()
        .map(|(rate, principal)| principal * (1.0 + rate / 12.0).powf(f64::from(term_months)))
        .sum()
}

/// Unweighted mean annual rate across the selection. The blend is not
/// capacity-weighted; that assumption is inherited and a weighted mean is
/// the likely future correction. Requesting the mean of an empty
/// selection is a caller bug and fails explicitly.
pub fn average_rate(lenders: &[Lender]) -> Result<f64, RatequoteError> {
    if lenders.is_empty() {
        return Err(RatequoteError::EmptyRateAverage);
    }
    let total: f64 = lenders.iter().map(|l| l.rate).sum();
    Ok(total / lenders.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn four_lenders() -> Vec<Lender> {
        // Already in rate order, as the allocator returns them.
        vec![
            Lender::new(1, "Lender #1", 0.066, 1_000.0),
            Lender::new(3, "Lender #3", 0.070, 10_000.0),
            Lender::new(4, "Lender #4", 0.072, 1_000.0),
            Lender::new(2, "Lender #2", 0.075, 2_000.0),
        ]
    }

    #[test]
    fn monthly_repayment_single_lender() {
        let monthly = monthly_repayment(&four_lenders(), 1_000.0, 36);
        assert_relative_eq!(monthly, 30.694539428781287, max_relative = 1e-12);
    }

    #[test]
    fn monthly_repayment_partial_second_lender() {
        let monthly = monthly_repayment(&four_lenders(), 5_000.0, 36);
        assert_relative_eq!(monthly, 154.20292689026866, max_relative = 1e-12);
    }

    #[test]
    fn total_repayment_single_lender() {
        let total = total_repayment(&four_lenders(), 1_000.0, 36);
        assert_relative_eq!(total, 1218.301271811185, max_relative = 1e-12);
    }

    #[test]
    fn total_repayment_partial_second_lender() {
        let total = total_repayment(&four_lenders(), 5_000.0, 36);
        assert_relative_eq!(total, 6150.003621718897, max_relative = 1e-12);
    }

    #[test]
    fn zero_rate_prices_straight_line() {
        let lenders = vec![Lender::new(1, "Gracious", 0.0, 3_600.0)];
        let monthly = monthly_repayment(&lenders, 3_600.0, 36);
        assert_relative_eq!(monthly, 100.0, max_relative = 1e-12);

        let total = total_repayment(&lenders, 3_600.0, 36);
        assert_relative_eq!(total, 3_600.0, max_relative = 1e-12);
    }

    #[test]
    fn empty_selection_prices_to_zero() {
        assert_eq!(monthly_repayment(&[], 1_000.0, 36), 0.0);
        assert_eq!(total_repayment(&[], 1_000.0, 36), 0.0);
    }

    #[test]
    fn repeated_calls_are_independent() {
        let lenders = four_lenders();
        let first = monthly_repayment(&lenders, 5_000.0, 36);
        let second = monthly_repayment(&lenders, 5_000.0, 36);
        assert_eq!(first, second);
        assert_eq!(lenders.len(), 4);
    }

    #[test]
    fn split_covers_exactly_the_amount() {
        let draws = split_principal(&four_lenders(), 5_000.0);
        assert_eq!(draws, vec![(0.066, 1_000.0), (0.070, 4_000.0)]);
    }

    #[test]
    fn split_of_full_capacity_drains_every_lender() {
        let draws = split_principal(&four_lenders(), 14_000.0);
        let drawn: f64 = draws.iter().map(|&(_, d)| d).sum();
        assert_eq!(draws.len(), 4);
        assert_eq!(drawn, 14_000.0);
    }

    #[test]
    fn average_rate_is_unweighted_mean() {
        let lenders = four_lenders();
        let rate = average_rate(&lenders).unwrap();
        assert_relative_eq!(
            rate,
            (0.066 + 0.070 + 0.072 + 0.075) / 4.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn average_rate_of_empty_selection_errors() {
        let err = average_rate(&[]).unwrap_err();
        assert!(matches!(err, RatequoteError::EmptyRateAverage));
    }
}
