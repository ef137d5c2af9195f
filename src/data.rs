//! Record Normalizer
//!
//! Converts one region's loosely-typed result records into `NormalizedRecord`s.
//! Regional files are known to be messy, so nothing here fails: entries that
//! are not objects, or whose score cannot be read as a finite number, are
//! dropped and counted.

use crate::schema::{EventKey, Region, RegionSchema};
use serde::Serialize;
use serde_json::{Map, Value};

/// One region's result coerced into the common schema
///
/// `gender` and `event_label` are carried verbatim from the raw record (empty
/// when missing); matching against canonical identifiers happens at query time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRecord {
    pub region: Region,
    pub gender: String,
    pub event_label: String,
    pub score: f64,
}

impl NormalizedRecord {
    /// Canonical event this record belongs to, if the region's label is mapped
    pub fn event_key(&self) -> Option<EventKey> {
        self.region.event_for_label(&self.event_label)
    }
}

/// Outcome of normalizing one raw collection
#[derive(Debug, Clone, Default)]
pub struct NormalizeOutcome {
    pub records: Vec<NormalizedRecord>,
    /// Entries that were not JSON objects
    pub skipped_entries: usize,
    /// Objects dropped for a missing or non-numeric score
    pub dropped_scores: usize,
}

/// Normalize a region's raw collection, discarding the drop counters
pub fn normalize_region(raw: &Value, region: Region) -> Vec<NormalizedRecord> {
    normalize_region_detailed(raw, region).records
}

/// Normalize a region's raw collection
///
/// A top-level value that is not an array yields no records.
pub fn normalize_region_detailed(raw: &Value, region: Region) -> NormalizeOutcome {
    let mut outcome = NormalizeOutcome::default();
    let Some(entries) = raw.as_array() else {
        return outcome;
    };

    let schema = region.schema();
    for entry in entries {
        let Some(fields) = entry.as_object() else {
            outcome.skipped_entries += 1;
            continue;
        };
        match normalize_record(fields, schema) {
            Some(record) => outcome.records.push(record),
            None => outcome.dropped_scores += 1,
        }
    }

    outcome
}

fn normalize_record(fields: &Map<String, Value>, schema: &RegionSchema) -> Option<NormalizedRecord> {
    let score = fields.get(schema.score_field).and_then(coerce_score)?;

    let gender = schema
        .gender_fields
        .iter()
        .map(|name| text_field(fields, name))
        .find(|value| !value.is_empty())
        .unwrap_or_default();

    Some(NormalizedRecord {
        region: schema.region,
        gender,
        event_label: text_field(fields, schema.event_field),
        score,
    })
}

/// Read a label field verbatim; numbers keep their textual form
fn text_field(fields: &Map<String, Value>, name: &str) -> String {
    match fields.get(name) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Coerce a raw score into a finite float
///
/// Accepts JSON numbers and integer/decimal text (surrounding whitespace
/// ignored). Booleans, containers, null and non-finite values are rejected.
pub fn coerce_score(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;

    parsed.is_finite().then_some(parsed)
}
