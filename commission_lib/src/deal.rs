//! Deal input and committed record types.
//!
//! Field names serialize in camelCase so the persisted collection keeps the
//! flat per-record layout described in `schema/deals.schema.json`.

use serde::{Deserialize, Serialize};

use crate::calculator;

/// Raw deal parameters as they arrive from an input surface.
///
/// Numeric fields stay as text here; [`calculator::compute`] coerces them,
/// treating anything empty or unparseable as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealInput {
    /// Closing date, ISO `YYYY-MM-DD`.
    pub date: String,
    pub client_name: String,
    pub address: String,
    pub sale_price: String,
    /// Percentage of the sale price, e.g. `"3"` for 3%.
    pub commission_rate: String,
    /// Percentage of the gross commission kept by the brokerage.
    pub broker_split: String,
    /// Flat amount deducted from the agent's share.
    pub fees: String,
}

/// The four derived commission figures, in the order they are computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionBreakdown {
    pub gross_commission: f64,
    pub broker_commission: f64,
    pub agent_gross: f64,
    pub net_to_agent: f64,
}

impl CommissionBreakdown {
    /// Clamp every figure at zero. Display only; stored records are never floored.
    pub fn floored(self) -> Self {
        Self {
            gross_commission: self.gross_commission.max(0.0),
            broker_commission: self.broker_commission.max(0.0),
            agent_gross: self.agent_gross.max(0.0),
            net_to_agent: self.net_to_agent.max(0.0),
        }
    }
}

/// A committed deal: coerced inputs plus derived commission figures.
///
/// Records are created by [`calculator::compute`] and never edited; the
/// derived fields are always a pure function of the four numeric inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealRecord {
    pub id: String,
    pub date: String,
    pub client_name: String,
    pub address: String,
    pub sale_price: f64,
    pub commission_rate: f64,
    pub broker_split: f64,
    pub fees: f64,
    pub gross_commission: f64,
    pub broker_commission: f64,
    pub agent_gross: f64,
    pub net_to_agent: f64,
}

impl DealRecord {
    /// The derived figures as stored on this record.
    pub fn breakdown(&self) -> CommissionBreakdown {
        CommissionBreakdown {
            gross_commission: self.gross_commission,
            broker_commission: self.broker_commission,
            agent_gross: self.agent_gross,
            net_to_agent: self.net_to_agent,
        }
    }

    /// Whether the stored derived figures match a fresh computation from the inputs.
    ///
    /// Records loaded from an edited blob can fail this; records built by the
    /// calculator always pass.
    pub fn is_consistent(&self) -> bool {
        let fresh = calculator::breakdown(
            self.sale_price,
            self.commission_rate,
            self.broker_split,
            self.fees,
        );
        fresh == self.breakdown()
    }
}
