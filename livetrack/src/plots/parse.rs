//! Parsing of series files into datapoints.

use super::Datapoint;
use crate::errors::PlotsError;
use std::path::Path;

/// Parses a plot file, choosing the format from its extension.
pub(crate) fn parse_plot_file(path: &Path) -> Result<Vec<Datapoint>, PlotsError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("json") => parse_json(path),
        Some("tsv") => parse_delimited(path, b'\t'),
        _ => parse_delimited(path, b','),
    }
}

fn parse_delimited(path: &Path, delimiter: u8) -> Result<Vec<Datapoint>, PlotsError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .map_err(|e| PlotsError::parse(path, e.to_string()))?;

    let headers = reader
        .headers()
        .map_err(|e| PlotsError::parse(path, e.to_string()))?
        .clone();

    let mut datapoints = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| PlotsError::parse(path, e.to_string()))?;
        let point = headers
            .iter()
            .zip(record.iter())
            .map(|(column, raw)| (column.to_string(), cell_value(raw)))
            .collect();
        datapoints.push(point);
    }
    Ok(datapoints)
}

fn parse_json(path: &Path) -> Result<Vec<Datapoint>, PlotsError> {
    let raw = std::fs::read_to_string(path)?;
    let value: serde_json::Value =
        serde_json::from_str(&raw).map_err(|e| PlotsError::parse(path, e.to_string()))?;

    // Either a bare list of rows or an object holding one.
    let rows = match value {
        serde_json::Value::Array(rows) => rows,
        serde_json::Value::Object(map) => map
            .into_iter()
            .find_map(|(_, v)| match v {
                serde_json::Value::Array(rows) => Some(rows),
                _ => None,
            })
            .ok_or_else(|| PlotsError::parse(path, "no list of datapoints found"))?,
        _ => return Err(PlotsError::parse(path, "expected a list of datapoints")),
    };

    rows.into_iter()
        .map(|row| match row {
            serde_json::Value::Object(map) => Ok(map.into_iter().collect::<Datapoint>()),
            _ => Err(PlotsError::parse(path, "datapoint is not an object")),
        })
        .collect()
}

fn cell_value(raw: &str) -> serde_json::Value {
    if let Ok(i) = raw.parse::<i64>() {
        return serde_json::json!(i);
    }
    raw.parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map_or_else(|| serde_json::Value::String(raw.to_string()), serde_json::Value::Number)
}
