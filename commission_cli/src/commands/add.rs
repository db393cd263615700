//! The `add` subcommand: validates a deal, computes its commission, and saves it.

use anyhow::Result;
use clap::Args;
use commission_lib::{Config, DealDraft, DealStore, DraftField, SqliteStore, UuidGenerator};

use crate::output::{format_currency, print_deals, OutputFormat};

/// Arguments for the `add` subcommand.
///
/// Rate, split, and fees fall back to the configured defaults. Numeric values
/// may be typed with `$` and `,`; anything other than digits and `.` is dropped.
#[derive(Args)]
pub struct AddArgs {
    /// Client name
    #[arg(long)]
    pub client: String,

    /// Property address
    #[arg(long)]
    pub address: String,

    /// Sale price (e.g., 450000 or $450,000)
    #[arg(long)]
    pub price: String,

    /// Commission rate in percent
    #[arg(long)]
    pub rate: Option<String>,

    /// Broker split in percent
    #[arg(long)]
    pub split: Option<String>,

    /// Flat fees deducted from your share
    #[arg(long)]
    pub fees: Option<String>,

    /// Closing date, YYYY-MM-DD (default: today)
    #[arg(long)]
    pub date: Option<String>,
}

/// Fill a draft from the arguments, leaving defaults where nothing was given.
pub fn build_draft(args: &AddArgs, config: &Config) -> DealDraft {
    let mut draft = DealDraft::new(config.draft_defaults());
    draft.set(DraftField::ClientName, &args.client);
    draft.set(DraftField::Address, &args.address);
    draft.set(DraftField::SalePrice, &args.price);
    let optional = [
        (DraftField::CommissionRate, &args.rate),
        (DraftField::BrokerSplit, &args.split),
        (DraftField::Fees, &args.fees),
        (DraftField::Date, &args.date),
    ];
    for (field, value) in optional {
        if let Some(value) = value {
            draft.set(field, value);
        }
    }
    draft
}

pub fn run(
    args: &AddArgs,
    config: &Config,
    store: &mut DealStore<SqliteStore>,
    format: &OutputFormat,
) -> Result<()> {
    let mut draft = build_draft(args, config);
    let record = draft.submit(store, &mut UuidGenerator)?;

    print_deals(std::slice::from_ref(&record), true, format)?;

    let stats = store.summary();
    eprintln!(
        "{} deals, {} net to you in total",
        stats.count,
        format_currency(stats.total_net)
    );
    Ok(())
}
