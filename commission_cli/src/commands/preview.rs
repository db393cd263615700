//! The `preview` subcommand: the live breakdown for a deal, without saving it.

use anyhow::Result;
use clap::Args;
use commission_lib::{CommissionBreakdown, Config, DealDraft, DraftField};

use crate::output::{print_breakdown, OutputFormat};

#[derive(Args)]
pub struct PreviewArgs {
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

    /// Show figures below zero instead of flooring them
    #[arg(long)]
    pub raw: bool,
}

pub fn figures(args: &PreviewArgs, config: &Config) -> CommissionBreakdown {
    let mut draft = DealDraft::new(config.draft_defaults());
    draft.set(DraftField::SalePrice, &args.price);
    if let Some(rate) = &args.rate {
        draft.set(DraftField::CommissionRate, rate);
    }
    if let Some(split) = &args.split {
        draft.set(DraftField::BrokerSplit, split);
    }
    if let Some(fees) = &args.fees {
        draft.set(DraftField::Fees, fees);
    }
    if args.raw {
        draft.raw_preview()
    } else {
        draft.preview()
    }
}

pub fn run(args: &PreviewArgs, config: &Config, format: &OutputFormat) -> Result<()> {
    print_breakdown(&figures(args, config), format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(price: &str, fees: Option<&str>, raw: bool) -> PreviewArgs {
        PreviewArgs {
            price: price.to_string(),
            rate: None,
            split: None,
            fees: fees.map(str::to_string),
            raw,
        }
    }

    #[test]
    fn test_reference_deal() {
        let f = figures(&args("450000", Some("250"), false), &Config::default());
        assert_eq!(f.gross_commission, 13500.0);
        assert_eq!(f.broker_commission, 2700.0);
        assert_eq!(f.agent_gross, 10800.0);
        assert_eq!(f.net_to_agent, 10550.0);
    }

    #[test]
    fn test_floor_and_raw() {
        // 10000 * 3% = 300, broker 60, agent 240, minus 500 fees
        let floored = figures(&args("10000", Some("500"), false), &Config::default());
        assert_eq!(floored.net_to_agent, 0.0);
        let raw = figures(&args("10000", Some("500"), true), &Config::default());
        assert!((raw.net_to_agent + 260.0).abs() < 0.0001);
    }

    #[test]
    fn test_blank_price_previews_zero() {
        let f = figures(&args("", None, false), &Config::default());
        assert_eq!(f, CommissionBreakdown::default());
    }
}
