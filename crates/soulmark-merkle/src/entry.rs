use alloy_primitives::Address;

use crate::hasher::normalize_name;

/// One allowlist row: a display name paired with the wallet that may
/// claim it.
///
/// Equality of two entries for eligibility purposes is defined by
/// [`AllowlistEntry::matches`]: the address compares on its raw 20 bytes
/// (hex case is irrelevant) and the name compares after trim+lowercase
/// normalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllowlistEntry {
    pub name: String,
    pub address: Address,
}

impl AllowlistEntry {
    pub fn new(name: impl Into<String>, address: Address) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }

    /// The name as it is hashed and published: trimmed and lowercased.
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }

    /// Whether this entry covers the given (address, name) pair.
    pub fn matches(&self, address: &Address, name: &str) -> bool {
        self.address == *address && self.normalized_name() == normalize_name(name)
    }
}
