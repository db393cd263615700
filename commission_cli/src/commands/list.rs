//! The `list` subcommand: shows saved deals, newest first.

use anyhow::Result;
use clap::Args;
use commission_lib::{DealRecord, DealStore, KeyValueStore};

use crate::output::{print_deals, OutputFormat};

#[derive(Args)]
pub struct ListArgs {
    /// Include broker split, broker commission, agent gross, and fees columns
    #[arg(long)]
    pub detailed: bool,

    /// Show at most this many deals
    #[arg(long)]
    pub limit: Option<usize>,
}

fn limited(deals: &[DealRecord], limit: Option<usize>) -> &[DealRecord] {
    match limit {
        Some(n) => &deals[..n.min(deals.len())],
        None => deals,
    }
}

pub fn run<S: KeyValueStore>(
    args: &ListArgs,
    store: &DealStore<S>,
    format: &OutputFormat,
) -> Result<()> {
    let deals = limited(store.records(), args.limit);

    if deals.is_empty() && matches!(format, OutputFormat::Table | OutputFormat::Markdown) {
        eprintln!("No deals yet. Add one with `commission add`.");
        return Ok(());
    }

    print_deals(deals, args.detailed, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<DealRecord> {
        serde_json::from_str(include_str!("../../../fixtures/deals.json")).unwrap()
    }

    #[test]
    fn test_limit_truncates() {
        let deals = fixture();
        assert_eq!(limited(&deals, Some(1)).len(), 1);
        assert_eq!(limited(&deals, Some(1))[0].client_name, "John Doe");
    }

    #[test]
    fn test_limit_larger_than_collection() {
        let deals = fixture();
        assert_eq!(limited(&deals, Some(10)).len(), 2);
        assert_eq!(limited(&deals, None).len(), 2);
        assert!(limited(&deals, Some(0)).is_empty());
    }
}
