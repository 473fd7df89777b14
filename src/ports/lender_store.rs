//! Lender pool access port trait.

use crate::domain::lender::Lender;

/// Keyed store for the lender pool. Ingestion writes it once per run;
/// the quote engine only reads.
pub trait LenderStore {
    fn total(&self) -> usize;

    /// Upsert by id.
    fn save(&mut self, lender: Lender);

    fn find(&self, id: u32) -> Option<Lender>;

    /// All lenders in no particular order.
    fn find_all(&self) -> Vec<Lender>;

    /// All lenders ascending by rate, ties broken by id.
    fn find_all_by_rate(&self) -> Vec<Lender>;

    fn clear(&mut self);
}
