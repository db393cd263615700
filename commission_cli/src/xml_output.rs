use std::io::Cursor;

use anyhow::Result;
use commission_lib::{CommissionBreakdown, DealRecord, SummaryStats};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde_json::Value;

/// Child element name for the items of a list element.
fn singular(tag: &str) -> &str {
    match tag {
        "deals" => "deal",
        _ => tag,
    }
}

fn write_text<W: std::io::Write>(
    writer: &mut Writer<W>,
    tag: &str,
    text: &str,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Write a JSON value as XML. Nulls are omitted, empty lists and objects
/// become self-closing elements.
fn write_value<W: std::io::Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: &Value,
) -> Result<(), quick_xml::Error> {
    match value {
        Value::Null => {}
        Value::Bool(b) => write_text(writer, tag, if *b { "true" } else { "false" })?,
        Value::Number(n) => write_text(writer, tag, &n.to_string())?,
        Value::String(s) => write_text(writer, tag, s)?,
        Value::Array(items) if items.is_empty() => {
            writer.write_event(Event::Empty(BytesStart::new(tag)))?;
        }
        Value::Object(map) if map.is_empty() => {
            writer.write_event(Event::Empty(BytesStart::new(tag)))?;
        }
        Value::Array(items) => {
            writer.write_event(Event::Start(BytesStart::new(tag)))?;
            let child = singular(tag);
            for item in items {
                write_value(writer, child, item)?;
            }
            writer.write_event(Event::End(BytesEnd::new(tag)))?;
        }
        Value::Object(map) => {
            writer.write_event(Event::Start(BytesStart::new(tag)))?;
            for (key, val) in map {
                write_value(writer, key, val)?;
            }
            writer.write_event(Event::End(BytesEnd::new(tag)))?;
        }
    }
    Ok(())
}

/// A full XML document with `root` as the document element.
fn document(root: &str, value: &Value) -> Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_value(&mut writer, root, value)?;
    let buf = writer.into_inner().into_inner();
    Ok(String::from_utf8(buf)?)
}

pub fn deals_to_xml(deals: &[DealRecord]) -> Result<String> {
    document("deals", &serde_json::to_value(deals)?)
}

pub fn summary_to_xml(stats: &SummaryStats) -> Result<String> {
    document("summary", &serde_json::to_value(stats)?)
}

pub fn breakdown_to_xml(figures: &CommissionBreakdown) -> Result<String> {
    document("commission", &serde_json::to_value(figures)?)
}
