use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{ExplorerError, Result};
use crate::record::{RecordStore, ShipRecord};

/// The `{"data": [...]}` layout.
#[derive(Deserialize)]
struct Wrapped {
    data: Vec<ShipRecord>,
}

/// Read the dataset at `path` into a [`RecordStore`].
pub fn load(path: &Path) -> Result<RecordStore> {
    let raw = fs::read_to_string(path).map_err(|source| ExplorerError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    let store = from_json(&raw).map_err(|source| ExplorerError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), records = store.len(), "dataset loaded");
    Ok(store)
}

/// Parse a dataset held in memory, either `{"data": [...]}` or a bare array.
pub fn from_json(raw: &str) -> serde_json::Result<RecordStore> {
    let records = if raw.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<ShipRecord>>(raw)?
    } else {
        serde_json::from_str::<Wrapped>(raw)?.data
    };
    Ok(RecordStore::new(records))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Blank or non-string values count as missing.
pub(crate) fn text<'de, D: Deserializer<'de>>(
    de: D,
) -> std::result::Result<Option<String>, D::Error> {
    Ok(match Option::<Scalar>::deserialize(de)? {
        Some(Scalar::Text(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Scalar::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Numbers may arrive as JSON numbers or as strings; empty and junk become `None`.
pub(crate) fn number<'de, D: Deserializer<'de>>(
    de: D,
) -> std::result::Result<Option<f64>, D::Error> {
    Ok(match Option::<Scalar>::deserialize(de)? {
        Some(Scalar::Number(n)) => Some(n),
        Some(Scalar::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                match s.parse::<f64>() {
                    Ok(n) => Some(n),
                    Err(e) => {
                        debug!(value = s, error = %e, "unparseable number treated as missing");
                        None
                    }
                }
            }
        }
        _ => None,
    })
}
