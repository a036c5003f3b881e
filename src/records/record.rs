/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! A single table row keyed by column name

use super::errors::{RecordError, Result};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// One row of an experiment table
///
/// Deserializes from a JSON object of column name to cell. Numbers and
/// booleans keep their JSON text and `null` becomes an empty string,
/// matching how blank cells are exported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    #[serde(deserialize_with = "cells_as_text")]
    fields: HashMap<String, String>,
}

fn cells_as_text<'de, D>(deserializer: D) -> std::result::Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    HashMap::<String, Value>::deserialize(deserializer)?
        .into_iter()
        .map(|(field, value)| {
            let text = match value {
                Value::String(s) => s,
                Value::Null => String::new(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(de::Error::custom(format!(
                        "field {:?} holds a nested value",
                        field
                    )))
                }
                other => other.to_string(),
            };
            Ok((field, text))
        })
        .collect()
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, returning the previous value if there was one
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.fields.insert(field.into(), value.into())
    }

    /// Get a field value
    pub fn get(&self, field: &str) -> Result<&str> {
        self.fields
            .get(field)
            .map(String::as_str)
            .ok_or_else(|| RecordError::MissingField(field.to_string()))
    }

    /// Get a field and parse it as a float
    pub fn get_f64(&self, field: &str) -> Result<f64> {
        let value = self.get(field)?;
        value
            .trim()
            .parse::<f64>()
            .map_err(|_| RecordError::InvalidNumber {
                field: field.to_string(),
                value: value.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parse a row from a JSON object
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a row from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
