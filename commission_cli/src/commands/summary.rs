//! The `summary` subcommand: totals across every saved deal.

use anyhow::Result;
use commission_lib::{DealStore, KeyValueStore};

use crate::output::{print_summary, OutputFormat};

pub fn run<S: KeyValueStore>(store: &DealStore<S>, format: &OutputFormat) -> Result<()> {
    print_summary(&store.summary(), format)
}
