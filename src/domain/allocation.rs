//! Lender selection: cheapest rates first until the amount is covered.

use crate::domain::lender::Lender;
use crate::ports::lender_store::LenderStore;

/// Selects the cheapest run of lenders whose combined capacity covers the
/// amount. Selection granularity is per lender: the last lender is taken
/// in full even when that overshoots the amount, and the pricer decides
/// how much of that capacity is actually billed. Pure read; the result is
/// empty only for a non-positive amount or an empty pool.
pub fn select_lenders(store: &dyn LenderStore, amount: f64) -> Vec<Lender> {
    let mut selected = Vec::new();
    let mut covered = 0.0;

    for lender in store.find_all_by_rate() {
        if covered >= amount {
            break;
        }
        covered += lender.available;
        selected.push(lender);
    }

    selected
}
