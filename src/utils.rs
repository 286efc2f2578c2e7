// src/utils.rs
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::path::Path;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a form date. Empty means unset; timestamps are read by their date prefix.
pub fn parse_loose_date(value: &str) -> Result<Option<NaiveDate>, chrono::ParseError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).map(Some)
}

pub fn deserialize_loose_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(value) => parse_loose_date(&value).map_err(serde::de::Error::custom),
    }
}

/// Toggle inputs send "1"/"0"; JSON clients may send "true"/"false"
pub fn parse_toggle(value: &str) -> bool {
    matches!(value.trim(), "1" | "true")
}

/// Read file content as string with proper error context
pub async fn read_file_safe(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

pub async fn file_accessible(path: &Path) -> bool {
    tokio::fs::metadata(path).await.is_ok()
}
