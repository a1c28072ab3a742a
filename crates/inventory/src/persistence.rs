//! JSON file persistence for the inventory mapping.
//!
//! On disk the inventory is a single JSON object, item name -> integer, keys in
//! ascending order, pretty-printed with 2-space indentation. Writes are plain
//! overwrites (no temp file + rename).

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use serde_json::Value as JsonValue;

use stockkeep_core::{InventoryError, InventoryResult, ItemName, Quantity};

/// File used when the caller does not name one.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.json";

/// Full inventory contents as persisted.
pub type Snapshot = BTreeMap<ItemName, Quantity>;

/// Read and validate a snapshot.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn read_snapshot(path: &Path) -> InventoryResult<Option<Snapshot>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let value: JsonValue =
        serde_json::from_reader(BufReader::new(file)).map_err(map_json_error)?;
    let snapshot = snapshot_from_value(value)?;

    tracing::debug!(path = %path.display(), items = snapshot.len(), "inventory snapshot read");
    Ok(Some(snapshot))
}

/// Overwrite `path` with the snapshot.
pub fn write_snapshot(path: &Path, snapshot: &Snapshot) -> InventoryResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, snapshot).map_err(map_json_error)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    tracing::debug!(path = %path.display(), items = snapshot.len(), "inventory snapshot written");
    Ok(())
}

/// Validate a decoded document as an item -> nonnegative integer mapping.
pub fn snapshot_from_value(value: JsonValue) -> InventoryResult<Snapshot> {
    let entries = match value {
        JsonValue::Object(entries) => entries,
        other => {
            return Err(InventoryError::invalid_format(format!(
                "expected a JSON object at the top level, found {}",
                json_kind(&other)
            )));
        }
    };

    let mut snapshot = Snapshot::new();
    for (key, value) in entries {
        let name = match ItemName::parse(&key) {
            Ok(name) if name.as_str() == key => name,
            _ => {
                return Err(InventoryError::invalid_format(format!(
                    "key {key:?} is not a valid item name"
                )));
            }
        };

        let qty = value
            .as_u64()
            .and_then(|n| Quantity::try_from(n).ok())
            .ok_or_else(|| {
                InventoryError::invalid_format(format!(
                    "value for {key:?} must be a nonnegative integer, found {}",
                    json_kind(&value)
                ))
            })?;

        snapshot.insert(name, qty);
    }

    Ok(snapshot)
}

fn map_json_error(err: serde_json::Error) -> InventoryError {
    if err.is_io() {
        InventoryError::Io(err.into())
    } else {
        InventoryError::invalid_format(err.to_string())
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(n) if n.is_i64() => "a negative integer",
        JsonValue::Number(n) if n.is_u64() => "an out-of-range integer",
        JsonValue::Number(_) => "a non-integer number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
