// src/model.rs
use std::collections::{BTreeMap, BTreeSet};

/// All documented (or declared) overloads of one method.
///
/// Both sides of the comparison accumulate into ordered sets: membership is
/// all the comparator needs, and ordering keeps reports stable between runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignatureEntry {
    pub returns: BTreeSet<String>,
    pub signatures: BTreeSet<String>,
}

impl SignatureEntry {
    pub fn add(&mut self, return_type: impl Into<String>, signature: impl Into<String>) {
        self.returns.insert(return_type.into());
        self.signatures.insert(signature.into());
    }
}

/// Method name → entry. One map per extracted document.
pub type SignatureMap = BTreeMap<String, SignatureEntry>;

/// Record one `(return type, signature)` pair under `method`.
pub fn record(map: &mut SignatureMap, method: &str, return_type: String, signature: String) {
    map.entry(s!(method)).or_default().add(return_type, signature);
}
