use std::fmt;

use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
};

use super::models::lenient_string;

const SEPARATOR: &str = ", ";

/// Ordered, duplicate-free set of committee roles.
///
/// Serialized as the roles joined with `", "` in insertion order, which is the
/// representation the spreadsheet backend stores in `comiteComision`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitteeSet {
    roles: Vec<String>,
}

impl CommitteeSet {
    pub fn new() -> Self {
        Self { roles: Vec::new() }
    }

    /// Splits on commas, trims each entry and drops empties and repeats.
    pub fn parse(raw: &str) -> Self {
        let mut set = Self::new();
        for role in raw.split(',') {
            set.insert(role);
        }
        set
    }

    pub fn insert(&mut self, role: &str) -> bool {
        let role = role.trim();
        if role.is_empty() || self.contains(role) {
            return false;
        }
        self.roles.push(role.to_string());
        true
    }

    pub fn remove(&mut self, role: &str) -> bool {
        let before = self.roles.len();
        self.roles.retain(|existing| existing != role.trim());
        self.roles.len() != before
    }

    /// Adds the role when absent, removes it when present.
    pub fn toggle(&mut self, role: &str) {
        if !self.remove(role) {
            self.insert(role);
        }
    }

    pub fn contains(&self, role: &str) -> bool {
        self.roles.iter().any(|existing| existing == role.trim())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl fmt::Display for CommitteeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.roles.join(SEPARATOR))
    }
}

impl Serialize for CommitteeSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CommitteeSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = lenient_string(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
