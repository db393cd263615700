//! Aggregate statistics over a deal collection.
//!
//! The reduction is a single fold with a running (sum, count) accumulator.
//! Every statistic is a sum or a mean, so the result does not depend on the
//! order of the collection.

use serde::{Deserialize, Serialize};

use crate::deal::DealRecord;

/// Running totals recomputed on every collection change. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub count: usize,
    pub total_gross: f64,
    pub total_net: f64,
    /// Mean commission rate in percent; `0.0` for an empty collection.
    pub avg_rate: f64,
}

#[derive(Default)]
struct Accumulator {
    count: usize,
    gross: f64,
    net: f64,
    rate: f64,
}

impl Accumulator {
    fn add(&mut self, record: &DealRecord) {
        self.count += 1;
        self.gross += record.gross_commission;
        self.net += record.net_to_agent;
        self.rate += record.commission_rate;
    }

    fn finish(self) -> SummaryStats {
        let avg_rate = if self.count == 0 {
            0.0
        } else {
            self.rate / self.count as f64
        };
        SummaryStats {
            count: self.count,
            total_gross: self.gross,
            total_net: self.net,
            avg_rate,
        }
    }
}

/// Reduce a collection to its summary statistics. An empty slice gives all zeros.
pub fn summarize(records: &[DealRecord]) -> SummaryStats {
    let mut acc = Accumulator::default();
    for record in records {
        acc.add(record);
    }
    acc.finish()
}
