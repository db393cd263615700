//! Editable deal draft, kept separate from committed records.
//!
//! A draft holds raw field text the way an input form does, with the same
//! defaults and keystroke filtering, and can show a live preview before it
//! is submitted. Submitting runs the validation gate, computes the record,
//! and hands it to a [`DealStore`].

use crate::calculator::{breakdown_for, compute};
use crate::deal::{CommissionBreakdown, DealInput, DealRecord};
use crate::error::CommissionError;
use crate::ids::IdGenerator;
use crate::kv::KeyValueStore;
use crate::store::DealStore;
use crate::validation::{today, validate_submission};

/// Starting values for the numeric fields of a fresh draft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DraftDefaults {
    pub commission_rate: f64,
    pub broker_split: f64,
    pub fees: f64,
}

impl Default for DraftDefaults {
    fn default() -> Self {
        Self {
            commission_rate: 3.0,
            broker_split: 20.0,
            fees: 0.0,
        }
    }
}

/// One editable field of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Date,
    ClientName,
    Address,
    SalePrice,
    CommissionRate,
    BrokerSplit,
    Fees,
}

impl DraftField {
    /// Numeric fields only accept digits and `.` as they are typed.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::SalePrice | Self::CommissionRate | Self::BrokerSplit | Self::Fees
        )
    }
}

/// Keep only ASCII digits and `.`, the filter applied to numeric keystrokes.
pub fn sanitize_numeric(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Render a default number without a trailing `.0` (`3.0` becomes `"3"`).
fn default_text(value: f64) -> String {
    format!("{}", value)
}

/// Form state for a deal that has not been committed yet.
#[derive(Debug, Clone, PartialEq)]
pub struct DealDraft {
    defaults: DraftDefaults,
    input: DealInput,
}

impl DealDraft {
    /// A blank draft dated today.
    pub fn new(defaults: DraftDefaults) -> Self {
        Self::dated(defaults, today())
    }

    /// A blank draft with an explicit closing date.
    pub fn dated(defaults: DraftDefaults, date: impl Into<String>) -> Self {
        Self {
            defaults,
            input: DealInput {
                date: date.into(),
                client_name: String::new(),
                address: String::new(),
                sale_price: String::new(),
                commission_rate: default_text(defaults.commission_rate),
                broker_split: default_text(defaults.broker_split),
                fees: default_text(defaults.fees),
            },
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Date => &self.input.date,
            DraftField::ClientName => &self.input.client_name,
            DraftField::Address => &self.input.address,
            DraftField::SalePrice => &self.input.sale_price,
            DraftField::CommissionRate => &self.input.commission_rate,
            DraftField::BrokerSplit => &self.input.broker_split,
            DraftField::Fees => &self.input.fees,
        }
    }

    /// Replace a field's text. Numeric fields drop every character other
    /// than digits and `.`; text fields are stored as given.
    pub fn set(&mut self, field: DraftField, value: &str) {
        let value = if field.is_numeric() {
            sanitize_numeric(value)
        } else {
            value.to_string()
        };
        let slot = match field {
            DraftField::Date => &mut self.input.date,
            DraftField::ClientName => &mut self.input.client_name,
            DraftField::Address => &mut self.input.address,
            DraftField::SalePrice => &mut self.input.sale_price,
            DraftField::CommissionRate => &mut self.input.commission_rate,
            DraftField::BrokerSplit => &mut self.input.broker_split,
            DraftField::Fees => &mut self.input.fees,
        };
        *slot = value;
    }

    /// Live figures for display, floored at zero. The floor never reaches a
    /// committed record.
    pub fn preview(&self) -> CommissionBreakdown {
        breakdown_for(&self.input).floored()
    }

    /// Unfloored figures, exactly what a submitted record would hold.
    pub fn raw_preview(&self) -> CommissionBreakdown {
        breakdown_for(&self.input)
    }

    /// Restore every field to its default, dated today.
    pub fn reset(&mut self) {
        *self = Self::new(self.defaults);
    }

    /// Clear the per-deal fields after a successful submit. Date, rate, and
    /// split carry over to the next deal; fees go back to their default.
    pub fn clear_after_submit(&mut self) {
        self.input.client_name.clear();
        self.input.address.clear();
        self.input.sale_price.clear();
        self.input.fees = default_text(self.defaults.fees);
    }

    /// Validate, compute, and add the deal to `store`.
    ///
    /// On success the draft is cleared for the next entry. On failure the
    /// draft and the store are both left as they were, so the same deal can
    /// be submitted again.
    pub fn submit<S, G>(
        &mut self,
        store: &mut DealStore<S>,
        ids: &mut G,
    ) -> Result<DealRecord, CommissionError>
    where
        S: KeyValueStore,
        G: IdGenerator + ?Sized,
    {
        let cleaned = validate_submission(&self.input)?;
        let record = compute(&cleaned, ids);
        store.add(record.clone())?;
        tracing::info!(
            "Saved deal {} for {} (net {:.2})",
            record.id,
            record.client_name,
            record.net_to_agent
        );
        self.clear_after_submit();
        Ok(record)
    }
}
