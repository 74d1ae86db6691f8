/*!
# CSV Validation & I/O

Parsing and validation for allowlist CSV uploads. Uploads may or may not
carry a header row; the header is auto-detected by checking whether the
first line contains the literal substrings "name" or "address". Every
data row is validated (non-empty name, well-formed Ethereum address) with
errors naming the offending line, so malformed input never reaches the
hashing primitives.
*/

use crate::errors::{CsvError, CsvResult};
use crate::schemas::{is_valid_address, AllowlistRow};
use alloy_primitives::Address;
use csv::{ReaderBuilder, Trim, Writer};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Parse allowlist rows from raw CSV text.
///
/// Blank lines are skipped; fields are trimmed. Returns `NoEntries` when
/// nothing but the header (or nothing at all) was supplied.
pub fn parse_allowlist_text(text: &str) -> CsvResult<Vec<AllowlistRow>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    let mut first = true;

    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if first {
            first = false;
            let joined = record.iter().collect::<Vec<_>>().join(",").to_lowercase();
            if joined.contains("name") || joined.contains("address") {
                continue; // header row
            }
        }

        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        if record.len() < 2 {
            return Err(CsvError::MalformedRow { line });
        }

        let name = record[0].to_string();
        if name.is_empty() {
            return Err(CsvError::EmptyName { line });
        }

        let raw_address = &record[1];
        if !is_valid_address(raw_address) {
            return Err(CsvError::InvalidAddress {
                line,
                value: raw_address.to_string(),
            });
        }
        let address = Address::from_str(raw_address).map_err(|_| CsvError::InvalidAddress {
            line,
            value: raw_address.to_string(),
        })?;

        rows.push(AllowlistRow { name, address });
    }

    if rows.is_empty() {
        return Err(CsvError::NoEntries);
    }

    Ok(rows)
}

/// Read and validate an allowlist CSV file
pub fn read_allowlist_csv<P: AsRef<Path>>(path: P) -> CsvResult<Vec<AllowlistRow>> {
    let text = fs::read_to_string(path)?;
    parse_allowlist_text(&text)
}

/// Write an allowlist CSV with the canonical header row
pub fn write_allowlist_csv<P: AsRef<Path>>(path: P, rows: &[AllowlistRow]) -> CsvResult<()> {
    let file = fs::File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    // The csv crate emits the header from the struct fields.
    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
