/*!
# CSV Schema Definitions

This module defines the allowlist CSV schema: the upload contract between
platform operators and the registry. One row per allowlist member, two
columns: `name`, `address`.
*/

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use soulmark_merkle::AllowlistEntry;
use std::str::FromStr;

/// Expected headers for an allowlist CSV in exact order. The header row
/// itself is optional on upload (see [`crate::validation`]).
pub const ALLOWLIST_CSV_HEADERS: &[&str] = &["name", "address"];

/// Row structure for an allowlist CSV.
///
/// **Purpose**: one allowlist member, a display name and the wallet
/// address allowed to claim it.
/// **Producers**: platform operators (uploads), [`crate::validation::write_allowlist_csv`]
/// **Consumers**: the registry, which turns rows into merkle entries
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AllowlistRow {
    /// Display name; non-empty after trimming. Hashed after
    /// trim+lowercase normalization.
    pub name: String,

    /// Ethereum address in `0x`-prefixed 40-hex-digit form.
    #[serde(
        deserialize_with = "deserialize_address",
        serialize_with = "serialize_address"
    )]
    pub address: Address,
}

impl From<AllowlistRow> for AllowlistEntry {
    fn from(row: AllowlistRow) -> Self {
        AllowlistEntry::new(row.name, row.address)
    }
}

/// Whether a string is a well-formed Ethereum address:
/// `0x` followed by exactly 40 hex digits, any case.
pub fn is_valid_address(value: &str) -> bool {
    value.len() == 42
        && value.starts_with("0x")
        && value[2..].bytes().all(|b| b.is_ascii_hexdigit())
}

/// Deserialize a `0x`-prefixed hex string to an Address
fn deserialize_address<'de, D>(deserializer: D) -> Result<Address, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if !is_valid_address(&s) {
        return Err(serde::de::Error::custom(format!(
            "invalid Ethereum address {s:?}"
        )));
    }
    Address::from_str(&s).map_err(serde::de::Error::custom)
}

/// Serialize an Address as 0x-prefixed lowercase hex
fn serialize_address<S>(address: &Address, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&format!("0x{}", hex::encode(address.as_slice())))
}
