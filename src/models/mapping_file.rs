use crate::models::error::{ReportError, Result};
use crate::models::site_record::SiteMigrationRecord;
use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Reads the site mapping file and parses it as JSON.
///
/// Only the JSON syntax is checked here, the document shape is checked by
/// [`extract_mappings`] and [`parse_records`].
pub fn load_mapping_document(path: &Path) -> Result<Value> {
    info!("Loading site mapping from: {}", path.display());

    let contents = fs::read_to_string(path).map_err(|cause| ReportError::InputRead {
        path: path.to_path_buf(),
        cause,
    })?;

    serde_json::from_str(&contents).map_err(|cause| ReportError::InputParse {
        path: path.to_path_buf(),
        cause,
    })
}

/// Returns the `mappings` array of a site mapping document.
pub fn extract_mappings(document: &Value) -> Result<&[Value]> {
    let object = document.as_object().ok_or_else(|| {
        ReportError::malformed(format!(
            "expected a JSON object at the top level, found {}",
            json_type_name(document)
        ))
    })?;

    match object.get("mappings") {
        None => {
            warn!("Site mapping has no 'mappings' key, treating it as empty");
            Ok(&[])
        }
        Some(Value::Array(mappings)) => Ok(mappings.as_slice()),
        Some(other) => Err(ReportError::malformed(format!(
            "'mappings' must be an array, found {}",
            json_type_name(other)
        ))),
    }
}

/// Converts raw mapping entries into records.
///
/// Each entry must be a JSON object. Optional fields inside an entry never
/// fail the parse.
pub fn parse_records(values: &[Value]) -> Result<Vec<SiteMigrationRecord>> {
    let mut records = Vec::with_capacity(values.len());

    for (idx, value) in values.iter().enumerate() {
        if !value.is_object() {
            return Err(ReportError::malformed(format!(
                "mapping #{} must be an object, found {}",
                idx,
                json_type_name(value)
            )));
        }

        let record = SiteMigrationRecord::deserialize(value).map_err(|cause| {
            ReportError::malformed(format!("mapping #{} could not be read: {}", idx, cause))
        })?;
        debug!("Mapping #{}: {:?}", idx, record);
        records.push(record);
    }

    Ok(records)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
