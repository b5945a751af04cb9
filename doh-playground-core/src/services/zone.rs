//! Zone-file style text export.

use unicode_width::UnicodeWidthStr;

use crate::types::DnsRecord;

/// Header cells of the exported table.
const HEADER: [&str; 5] = [";; NAME", "TTL", "CLASS", "TYPE", "DATA"];

const SEPARATOR: &str = " | ";

/// Render records as an aligned `NAME | TTL | CLASS | TYPE | DATA` table.
///
/// Rows keep the input order. Every column but the last is padded to its
/// widest cell; each line ends with `\n`.
pub fn format_zone(records: &[DnsRecord]) -> String {
    let rows: Vec<[String; 5]> = std::iter::once(HEADER.map(str::to_string))
        .chain(records.iter().map(|r| {
            [
                r.name.clone(),
                r.ttl.to_string(),
                "IN".to_string(),
                r.record_type.to_string(),
                r.data.clone(),
            ]
        }))
        .collect();

    let mut widths = [0usize; 5];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    for row in &rows {
        let (padded, last) = (&row[..4], &row[4]);
        for (cell, width) in padded.iter().zip(widths) {
            out.push_str(cell);
            out.push_str(&" ".repeat(width - cell.width()));
            out.push_str(SEPARATOR);
        }
        out.push_str(last);
        out.push('\n');
    }
    out
}
