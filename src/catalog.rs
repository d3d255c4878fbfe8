// 🃏 Catalog Normalizer - Flatten nested card documents into flat records
//
// Catalog documents come from re-scraped API dumps: each JSON file holds a
// list of card records, either top-level or under a "data" key, with the
// interesting fields buried at different nesting depths. Flattening to
// dotted paths first means the projection below never has to care about
// the shape of any individual record.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// NORMALIZED RECORD
// ============================================================================

/// One flattened catalog record. Every field is always present; fields the
/// source document did not supply are explicit `None`, never missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub card_id: Option<String>,
    pub card_name: Option<String>,
    pub card_number: Option<String>,
    pub set_id: Option<String>,
    pub set_name: Option<String>,

    /// Market value: holofoil price if usable, else normal price, else 0.0.
    pub market_value: f64,
}

/// Result of loading one catalog directory.
#[derive(Debug, Clone, Default)]
pub struct CatalogLoad {
    pub records: Vec<CatalogRecord>,

    /// Documents skipped because they were unreadable, empty, or not valid
    /// structured data. Informational only.
    pub skipped_documents: usize,
}

// ============================================================================
// JSON FLATTENING
// ============================================================================

/// Flatten nested objects into dotted paths: `{"set": {"id": "x"}}` becomes
/// `{"set.id": "x"}`. Arrays and scalars stay leaf values; null leaves are
/// kept so projection can tell "present but null" from "absent".
pub fn flatten_json(value: &Value) -> BTreeMap<String, Value> {
    let mut flat = BTreeMap::new();
    flatten_into("", value, &mut flat);
    flat
}

fn flatten_into(prefix: &str, value: &Value, out: &mut BTreeMap<String, Value>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(&path, child, out);
            }
        }
        _ => {
            out.insert(prefix.to_string(), value.clone());
        }
    }
}

// ============================================================================
// FIELD COERCION
// ============================================================================

/// Best-effort string coercion. Card numbers are numeric in some dumps, so
/// JSON numbers are rendered as strings; anything else is absent.
fn coerce_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Best-effort price coercion. A usable price is a finite, non-negative
/// number (or a string parsing as one); anything else is absent so the
/// holofoil -> normal -> 0.0 chain falls through.
fn coerce_price(value: Option<&Value>) -> Option<f64> {
    let candidate = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if candidate.is_finite() && candidate >= 0.0 {
        Some(candidate)
    } else {
        None
    }
}

// ============================================================================
// NORMALIZATION
// ============================================================================

/// Normalize one raw card record into the flat shape.
pub fn normalize_record(record: &Value) -> CatalogRecord {
    let flat = flatten_json(record);

    let market_value = coerce_price(flat.get("tcgplayer.prices.holofoil.market"))
        .or_else(|| coerce_price(flat.get("tcgplayer.prices.normal.market")))
        .unwrap_or(0.0);

    CatalogRecord {
        card_id: coerce_string(flat.get("id")),
        card_name: coerce_string(flat.get("name")),
        card_number: coerce_string(flat.get("number")),
        set_id: coerce_string(flat.get("set.id")),
        set_name: coerce_string(flat.get("set.name")),
        market_value,
    }
}

/// Parse one catalog document. Returns `None` when the document should be
/// skipped: empty content, invalid JSON, neither a top-level list nor an
/// object with a `data` list, or an empty record list.
pub fn parse_document(raw: &str) -> Option<Vec<CatalogRecord>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let parsed: Value = serde_json::from_str(trimmed).ok()?;
    let records = match &parsed {
        Value::Array(items) => items,
        Value::Object(map) => map.get("data")?.as_array()?,
        _ => return None,
    };
    if records.is_empty() {
        return None;
    }

    Some(records.iter().map(normalize_record).collect())
}

// ============================================================================
// DIRECTORY LOADER
// ============================================================================

/// Load every catalog document in a directory.
///
/// Malformed documents are skipped, not fatal: the run proceeds with
/// whatever valid documents remain. A missing directory behaves like a
/// directory with no valid documents.
pub fn load_catalog(catalog_dir: &Path) -> CatalogLoad {
    let mut load = CatalogLoad::default();

    for path in sorted_source_files(catalog_dir, "json") {
        let document = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| parse_document(&raw));

        match document {
            Some(mut records) => load.records.append(&mut records),
            None => load.skipped_documents += 1,
        }
    }

    load
}

/// List files with the given extension, sorted by name. Listing order is
/// platform-dependent, so sorting keeps re-runs reproducible.
pub(crate) fn sorted_source_files(dir: &Path, extension: &str) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(), // missing directory = no sources
    };

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some(extension))
        .collect();
    files.sort();
    files
}

// ============================================================================
// TESTS
// ============================================================================
