/*!
# Soulmark CSV Schema Definitions

This crate provides the **authoritative allowlist CSV schema** used
throughout Soulmark.

## Purpose

This crate is the single source of truth for the CSV data contract
between:

- **Platform operators** (producers) → upload allowlist CSVs
- **The registry** (consumer) → builds merkle trees from validated rows

## Schema

One row per allowlist member, two columns:

- `name`: display name (non-empty string)
- `address`: Ethereum address matching `^0x[0-9a-fA-F]{40}$`

The header row is optional on upload; it is auto-detected by checking
whether the first line contains the literal substrings "name" or
"address".

## Usage

```rust
use soulmark_csvs::{parse_allowlist_text, CsvResult};

fn example() -> CsvResult<()> {
    let rows = parse_allowlist_text(
        "name,address\nalice,0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa\n",
    )?;
    assert_eq!(rows.len(), 1);
    Ok(())
}
```
*/

pub mod errors;
pub mod schemas;
pub mod validation;

// Re-export main types for convenience
pub use errors::{CsvError, CsvResult};
pub use schemas::{is_valid_address, AllowlistRow, ALLOWLIST_CSV_HEADERS};
pub use validation::{parse_allowlist_text, read_allowlist_csv, write_allowlist_csv};
