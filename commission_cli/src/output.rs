use anyhow::Result;
use commission_lib::{CommissionBreakdown, DealRecord, SummaryStats};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::xml_output;

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
    Xml,
}

#[derive(Tabled, Serialize)]
struct DealRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: String,
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Client")]
    #[serde(rename = "Client")]
    client: String,
    #[tabled(rename = "Address")]
    #[serde(rename = "Address")]
    address: String,
    #[tabled(rename = "Sale Price")]
    #[serde(rename = "Sale Price")]
    sale_price: String,
    #[tabled(rename = "Rate")]
    #[serde(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Gross Commission")]
    #[serde(rename = "Gross Commission")]
    gross_commission: String,
    #[tabled(rename = "Net To Agent")]
    #[serde(rename = "Net To Agent")]
    net_to_agent: String,
}

/// A deal row with the broker-split breakdown columns included.
#[derive(Tabled, Serialize)]
struct DetailedDealRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: String,
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Client")]
    #[serde(rename = "Client")]
    client: String,
    #[tabled(rename = "Address")]
    #[serde(rename = "Address")]
    address: String,
    #[tabled(rename = "Sale Price")]
    #[serde(rename = "Sale Price")]
    sale_price: String,
    #[tabled(rename = "Rate")]
    #[serde(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Gross Commission")]
    #[serde(rename = "Gross Commission")]
    gross_commission: String,
    #[tabled(rename = "Broker Split")]
    #[serde(rename = "Broker Split")]
    broker_split: String,
    #[tabled(rename = "Broker Commission")]
    #[serde(rename = "Broker Commission")]
    broker_commission: String,
    #[tabled(rename = "Agent Gross")]
    #[serde(rename = "Agent Gross")]
    agent_gross: String,
    #[tabled(rename = "Fees")]
    #[serde(rename = "Fees")]
    fees: String,
    #[tabled(rename = "Net To Agent")]
    #[serde(rename = "Net To Agent")]
    net_to_agent: String,
}

/// One labelled figure, used for summary cards and previews.
#[derive(Tabled, Serialize)]
struct FigureRow {
    #[tabled(rename = "Metric")]
    #[serde(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
}

// -- Row builders --

fn build_deal_rows(deals: &[DealRecord]) -> Vec<DealRow> {
    deals
        .iter()
        .map(|d| DealRow {
            id: d.id.clone(),
            date: d.date.clone(),
            client: d.client_name.clone(),
            address: d.address.clone(),
            sale_price: format_currency(d.sale_price),
            rate: format_percent(d.commission_rate),
            gross_commission: format_currency(d.gross_commission),
            net_to_agent: format_currency(d.net_to_agent),
        })
        .collect()
}

fn build_detailed_deal_rows(deals: &[DealRecord]) -> Vec<DetailedDealRow> {
    deals
        .iter()
        .map(|d| DetailedDealRow {
            id: d.id.clone(),
            date: d.date.clone(),
            client: d.client_name.clone(),
            address: d.address.clone(),
            sale_price: format_currency(d.sale_price),
            rate: format_percent(d.commission_rate),
            gross_commission: format_currency(d.gross_commission),
            broker_split: format_percent(d.broker_split),
            broker_commission: format_currency(d.broker_commission),
            agent_gross: format_currency(d.agent_gross),
            fees: format_currency(d.fees),
            net_to_agent: format_currency(d.net_to_agent),
        })
        .collect()
}

fn figure(metric: &str, value: String) -> FigureRow {
    FigureRow {
        metric: metric.to_string(),
        value,
    }
}

fn build_summary_rows(stats: &SummaryStats) -> Vec<FigureRow> {
    vec![
        figure("Total Gross", format_currency(stats.total_gross)),
        figure("Total Net To You", format_currency(stats.total_net)),
        figure("Avg Commission Rate", format_rate(stats.avg_rate)),
        figure("Deals", stats.count.to_string()),
    ]
}

fn build_breakdown_rows(figures: &CommissionBreakdown) -> Vec<FigureRow> {
    vec![
        figure("Gross Commission", format_currency(figures.gross_commission)),
        figure("Broker Commission", format_currency(figures.broker_commission)),
        figure("Agent Gross", format_currency(figures.agent_gross)),
        figure("Net To Agent", format_currency(figures.net_to_agent)),
    ]
}

// -- Generic renderers --

fn print_table<T: Tabled>(rows: Vec<T>) {
    println!("{}", Table::new(rows));
}

fn print_markdown<T: Tabled>(rows: Vec<T>) {
    let mut table = Table::new(rows);
    table.with(Style::markdown());
    println!("{}", table);
}

fn print_csv<T: Serialize>(rows: Vec<T>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

// -- Domain output --

/// Render a deal list. `detailed` adds the broker split, broker commission,
/// agent gross, and fees columns to tabular formats.
pub fn print_deals(deals: &[DealRecord], detailed: bool, format: &OutputFormat) -> Result<()> {
    match (format, detailed) {
        (OutputFormat::Table, false) => print_table(build_deal_rows(deals)),
        (OutputFormat::Table, true) => print_table(build_detailed_deal_rows(deals)),
        (OutputFormat::Markdown, false) => print_markdown(build_deal_rows(deals)),
        (OutputFormat::Markdown, true) => print_markdown(build_detailed_deal_rows(deals)),
        (OutputFormat::Csv, false) => print_csv(build_deal_rows(deals))?,
        (OutputFormat::Csv, true) => print_csv(build_detailed_deal_rows(deals))?,
        (OutputFormat::Json, _) => print_json(&deals),
        (OutputFormat::Xml, _) => println!("{}", xml_output::deals_to_xml(deals)?),
    }
    Ok(())
}

pub fn print_summary(stats: &SummaryStats, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_table(build_summary_rows(stats)),
        OutputFormat::Markdown => print_markdown(build_summary_rows(stats)),
        OutputFormat::Csv => print_csv(build_summary_rows(stats))?,
        OutputFormat::Json => print_json(stats),
        OutputFormat::Xml => println!("{}", xml_output::summary_to_xml(stats)?),
    }
    Ok(())
}

pub fn print_breakdown(figures: &CommissionBreakdown, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_table(build_breakdown_rows(figures)),
        OutputFormat::Markdown => print_markdown(build_breakdown_rows(figures)),
        OutputFormat::Csv => print_csv(build_breakdown_rows(figures))?,
        OutputFormat::Json => print_json(figures),
        OutputFormat::Xml => println!("{}", xml_output::breakdown_to_xml(figures)?),
    }
    Ok(())
}

// -- Formatting --

/// US-dollar amount with thousands separators and cents: `$13,500.00`, `-$260.00`.
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u128;
    let digits = (cents / 100).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

/// Percentage rounded to two decimals, as on the summary cards: `3.00%`.
pub fn format_rate(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Percentage exactly as entered, as on deal rows: `3%`, `2.5%`.
pub fn format_percent(value: f64) -> String {
    format!("{}%", value)
}
