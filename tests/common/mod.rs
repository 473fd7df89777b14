#![allow(dead_code)]

use ratequote::adapters::memory_store::MemoryLenderStore;
use ratequote::domain::lender::Lender;
use ratequote::domain::terms::LoanTerms;
use ratequote::ports::lender_store::LenderStore;
use std::io::Write;

/// The four-lender pool the numeric repayment vectors are computed over.
pub fn four_lender_market() -> MemoryLenderStore {
    let mut store = MemoryLenderStore::new();
    store.save(Lender::new(1, "Lender #1", 0.066, 1_000.0));
    store.save(Lender::new(2, "Lender #2", 0.075, 2_000.0));
    store.save(Lender::new(3, "Lender #3", 0.070, 10_000.0));
    store.save(Lender::new(4, "Lender #4", 0.072, 1_000.0));
    store
}

/// Builds a store from (rate, available) pairs, ids in listed order.
pub fn store_from(lenders: &[(f64, f64)]) -> MemoryLenderStore {
    let mut store = MemoryLenderStore::new();
    for (i, &(rate, available)) in lenders.iter().enumerate() {
        let id = i as u32 + 1;
        store.save(Lender::new(id, format!("Lender #{id}"), rate, available));
    }
    store
}

pub fn default_terms() -> LoanTerms {
    LoanTerms::default()
}

/// The four-lender pool as a market CSV with the usual header line.
pub const MARKET_CSV: &str = "Lender,Rate,Available\n\
    Lender #1,0.066,1000\n\
    Lender #2,0.075,2000\n\
    Lender #3,0.070,10000\n\
    Lender #4,0.072,1000\n";

pub fn write_market_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}
