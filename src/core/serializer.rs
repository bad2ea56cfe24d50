use crate::core::{OutputFormat, Storage};
use crate::utils::error::{ClientError, Result};
use serde_json::Value;

pub struct Serializer<S: Storage> {
    storage: S,
}

impl<S: Storage> Serializer<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Encodes `body` in `format` and writes it to `path`, overwriting any existing file.
    pub async fn save(&self, body: &Value, path: &str, format: OutputFormat) -> Result<String> {
        let data = match format {
            OutputFormat::Json => to_json_bytes(body)?,
            OutputFormat::Csv => to_csv_bytes(body)?,
        };

        tracing::debug!("Writing {} bytes as {:?} to {}", data.len(), format, path);
        self.storage.write_file(path, &data).await
    }
}

pub fn to_json_bytes(body: &Value) -> Result<Vec<u8>> {
    let mut data = serde_json::to_vec_pretty(body)?;
    data.push(b'\n');
    Ok(data)
}

/// Flattens an array of objects into CSV.
///
/// The header comes from the first element's keys. Every row is that element's
/// own values in its own key order, so records with a different shape come out
/// misaligned rather than rejected.
pub fn to_csv_bytes(body: &Value) -> Result<Vec<u8>> {
    let items = body.as_array().ok_or_else(|| ClientError::InvalidShape {
        message: format!("expected a JSON array, got {}", kind_of(body)),
    })?;

    let first = items.first().ok_or_else(|| ClientError::InvalidShape {
        message: "empty array has no header row".to_string(),
    })?;

    let header = first.as_object().ok_or_else(|| ClientError::InvalidShape {
        message: format!("element 0 is {}, not an object", kind_of(first)),
    })?;

    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    writer.write_record(header.keys())?;

    for (index, item) in items.iter().enumerate() {
        let record = item.as_object().ok_or_else(|| ClientError::InvalidShape {
            message: format!("element {} is {}, not an object", index, kind_of(item)),
        })?;
        writer.write_record(record.values().map(cell))?;
    }

    tracing::debug!("Flattened {} records into CSV", items.len());

    writer
        .into_inner()
        .map_err(|e| ClientError::IoError(e.into_error()))
}

fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
