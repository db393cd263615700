//! Commission calculator: raw deal input to a fully computed record.
//!
//! Everything here is pure. Numeric text that is empty or unparseable is
//! coerced to zero, and every intermediate figure is forced finite, so no
//! function in this module can hand back NaN or infinity.

use crate::deal::{CommissionBreakdown, DealInput, DealRecord};
use crate::ids::IdGenerator;

/// Parse a numeric form field. Empty, malformed, or non-finite text yields `0.0`.
pub fn parse_amount(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) => finite_or_zero(value),
        Err(_) => 0.0,
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Apply the commission formula: gross, then broker cut, then agent gross, then net.
///
/// Negative inputs are computed as-is (a negative sale price gives negative
/// commissions). A step that overflows to infinity is recorded as zero.
pub fn breakdown(
    sale_price: f64,
    commission_rate: f64,
    broker_split: f64,
    fees: f64,
) -> CommissionBreakdown {
    let sale_price = finite_or_zero(sale_price);
    let commission_rate = finite_or_zero(commission_rate);
    let broker_split = finite_or_zero(broker_split);
    let fees = finite_or_zero(fees);

    let gross_commission = finite_or_zero(sale_price * commission_rate / 100.0);
    let broker_commission = finite_or_zero(gross_commission * broker_split / 100.0);
    let agent_gross = finite_or_zero(gross_commission - broker_commission);
    let net_to_agent = finite_or_zero(agent_gross - fees);

    CommissionBreakdown {
        gross_commission,
        broker_commission,
        agent_gross,
        net_to_agent,
    }
}

/// Breakdown for the numeric fields of an input, without building a record.
pub fn breakdown_for(input: &DealInput) -> CommissionBreakdown {
    breakdown(
        parse_amount(&input.sale_price),
        parse_amount(&input.commission_rate),
        parse_amount(&input.broker_split),
        parse_amount(&input.fees),
    )
}

/// Build a committed record from raw input, taking a fresh id from `ids`.
///
/// Text fields are copied verbatim; required-field checks belong to
/// [`crate::validation::validate_submission`], not here.
pub fn compute<G: IdGenerator + ?Sized>(input: &DealInput, ids: &mut G) -> DealRecord {
    let sale_price = parse_amount(&input.sale_price);
    let commission_rate = parse_amount(&input.commission_rate);
    let broker_split = parse_amount(&input.broker_split);
    let fees = parse_amount(&input.fees);
    let figures = breakdown(sale_price, commission_rate, broker_split, fees);

    DealRecord {
        id: ids.next_id(),
        date: input.date.clone(),
        client_name: input.client_name.clone(),
        address: input.address.clone(),
        sale_price,
        commission_rate,
        broker_split,
        fees,
        gross_commission: figures.gross_commission,
        broker_commission: figures.broker_commission,
        agent_gross: figures.agent_gross,
        net_to_agent: figures.net_to_agent,
    }
}
