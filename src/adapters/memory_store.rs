//! In-memory lender store backed by a keyed map.

use crate::domain::lender::Lender;
use crate::ports::lender_store::LenderStore;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct MemoryLenderStore {
    lenders: HashMap<u32, Lender>,
}

impl MemoryLenderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LenderStore for MemoryLenderStore {
    fn total(&self) -> usize {
        self.lenders.len()
    }

    fn save(&mut self, lender: Lender) {
        self.lenders.insert(lender.id, lender);
    }

    fn find(&self, id: u32) -> Option<Lender> {
        self.lenders.get(&id).cloned()
    }

    fn find_all(&self) -> Vec<Lender> {
        self.lenders.values().cloned().collect()
    }

    fn find_all_by_rate(&self) -> Vec<Lender> {
        let mut all = self.find_all();
        all.sort_by(|a, b| a.rate_order(b));
        all
    }

    fn clear(&mut self) {
        self.lenders.clear();
    }
}
