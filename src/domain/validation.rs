//! Amount validation: four business rules applied in a fixed order.

use crate::domain::terms::LoanTerms;
use crate::ports::lender_store::LenderStore;

/// A business rule the requested amount failed. Carries the offending
/// amount and the threshold involved so the caller can render a message;
/// no user-facing text is produced here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AmountViolation {
    #[error("amount {amount} is not a multiple of {increment}")]
    NotAStepMultiple { amount: f64, increment: f64 },

    #[error("amount {amount} is below the minimum loan of {minimum}")]
    BelowMinimum { amount: f64, minimum: f64 },

    #[error("amount {amount} is above the maximum loan of {maximum}")]
    AboveMaximum { amount: f64, maximum: f64 },

    #[error("the lender pool cannot cover {amount}")]
    PoolInsufficient { amount: f64 },
}

/// Checks run in a fixed order and the first failure wins. The pool is
/// only read for the final feasibility check.
pub fn validate_amount(
    amount: f64,
    terms: &LoanTerms,
    store: &dyn LenderStore,
) -> Result<(), AmountViolation> {
    if amount % terms.increment != 0.0 {
        return Err(AmountViolation::NotAStepMultiple {
            amount,
            increment: terms.increment,
        });
    }

    if amount < terms.minimum {
        return Err(AmountViolation::BelowMinimum {
            amount,
            minimum: terms.minimum,
        });
    }

    if amount > terms.maximum {
        return Err(AmountViolation::AboveMaximum {
            amount,
            maximum: terms.maximum,
        });
    }

    if !is_feasible(amount, store) {
        return Err(AmountViolation::PoolInsufficient { amount });
    }

    Ok(())
}

/// True when the pool's combined capacity reaches the amount. Stops
/// summing as soon as the running total covers it.
pub fn is_feasible(amount: f64, store: &dyn LenderStore) -> bool {
    let mut covered = 0.0;
    for lender in store.find_all() {
        covered += lender.available;
        if covered >= amount {
            break;
        }
    }
    covered >= amount
}
