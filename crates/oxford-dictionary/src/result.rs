//! Response tree of the `entries` endpoint.
//!
//! Every container is optional: a missing key, `null` and `[]` all mean "absent". Only the first element of each
//! level is ever read, and only through the accessors below, which walk the whole path and return `None` as soon
//! as a level is absent.

use serde::de::Error as _;
use serde::Deserialize;
use serde_json::Value;

/// Array key holding the child records at each depth, from the top-level object down to a sense.
const CHILD_KEYS: &[&str] = &["results", "lexicalEntries", "entries", "senses"];

/// Top-level response: `{"results": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OxfordResult {
    #[serde(default)]
    pub results: Option<Vec<HeadwordEntry>>,
}

/// One headword match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HeadwordEntry {
    #[serde(default, rename = "lexicalEntries")]
    pub lexical_entries: Option<Vec<LexicalEntry>>,
}

/// Entries sharing a part of speech.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LexicalEntry {
    #[serde(default)]
    pub entries: Option<Vec<Entry>>,
}

/// Etymologies and senses of one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub etymologies: Option<Vec<String>>,
    #[serde(default)]
    pub senses: Option<Vec<Sense>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Sense {
    #[serde(default)]
    pub definitions: Option<Vec<String>>,
}

impl OxfordResult {
    /// Decodes a response body. Fails on malformed JSON, a wrongly typed field, or a record
    /// (the top level or an element of a nested array) that is not a JSON object.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(body)?;
        require_objects(&value, 0)?;
        serde_json::from_value(value)
    }

    /// Number of top-level results.
    pub fn result_count(&self) -> usize {
        self.results.as_ref().map_or(0, Vec::len)
    }

    /// `results[0].lexicalEntries[0].entries[0]`, if every level is present.
    pub fn first_entry(&self) -> Option<&Entry> {
        self.results
            .as_deref()?
            .first()?
            .lexical_entries
            .as_deref()?
            .first()?
            .entries
            .as_deref()?
            .first()
    }

    /// First etymology string of the first entry.
    pub fn first_etymology(&self) -> Option<&str> {
        self.first_entry()?
            .etymologies
            .as_deref()?
            .first()
            .map(String::as_str)
    }

    /// First definition string of the first sense of the first entry.
    pub fn first_definition(&self) -> Option<&str> {
        self.first_entry()?
            .senses
            .as_deref()?
            .first()?
            .definitions
            .as_deref()?
            .first()
            .map(String::as_str)
    }

    pub fn has_etymology_entry(&self) -> bool {
        self.first_etymology().is_some()
    }

    pub fn has_definition_entry(&self) -> bool {
        self.first_definition().is_some()
    }
}

/// serde accepts a JSON array for a derived struct; the API only ever sends objects.
fn require_objects(value: &Value, depth: usize) -> Result<(), serde_json::Error> {
    let Some(map) = value.as_object() else {
        return Err(serde_json::Error::custom(format!(
            "expected a JSON object at depth {}, found {}",
            depth,
            json_kind(value)
        )));
    };
    match CHILD_KEYS.get(depth).and_then(|key| map.get(*key)) {
        Some(Value::Array(items)) => items
            .iter()
            .try_for_each(|item| require_objects(item, depth + 1)),
        _ => Ok(()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
