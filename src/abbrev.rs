//! Abbreviation table — expands shortened identifier fragments into full
//! words for generated prose.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Abbreviation → expansion lookup.
///
/// Lookups are exact and case-sensitive; a word with no entry is returned
/// unchanged. The table is loaded once per configuration and replaced only
/// as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbbreviationMap {
    entries: BTreeMap<String, String>,
}

impl AbbreviationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, abbreviation: &str, expansion: &str) {
        self.entries
            .insert(abbreviation.to_string(), expansion.to_string());
    }

    /// Expand a single word, falling back to the word itself.
    pub fn expand<'a>(&'a self, word: &'a str) -> &'a str {
        self.entries.get(word).map(String::as_str).unwrap_or(word)
    }

    /// Expand every word and join them with spaces.
    pub fn expand_join(&self, words: &[String]) -> String {
        words
            .iter()
            .map(|w| self.expand(w))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse the wire format: semicolon-separated `abbrev,expansion` pairs.
    ///
    /// Entries without exactly two comma fields are dropped.
    pub fn parse(input: &str) -> Self {
        let mut map = Self::new();

        for entry in input.split(';') {
            let fields: Vec<&str> = entry.split(',').collect();
            if fields.len() == 2 {
                map.insert(fields[0], fields[1]);
            } else if !entry.is_empty() {
                log::debug!("dropping malformed abbreviation entry: {:?}", entry);
            }
        }

        map
    }

    /// Serialize back to the wire format.
    pub fn to_wire(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{},{}", k, v))
            .collect::<Vec<_>>()
            .join(";")
    }
}

impl Serialize for AbbreviationMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

impl<'de> Deserialize<'de> for AbbreviationMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = String::deserialize(deserializer)?;
        Ok(AbbreviationMap::parse(&wire))
    }
}
