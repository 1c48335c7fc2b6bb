//! Column-oriented data sources handed to the page templates.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use crate::error::Result;

/// Named columns of equal length, serialized as
/// `{"<name>": [v0, v1, ...], ...}` in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ColumnData {
    columns: IndexMap<String, Vec<Value>>,
}

impl ColumnData {
    pub fn new() -> Self { Self::default() }

    /// Add (or replace) the column `name`.  Non-finite floats become
    /// `null`.
    pub fn insert<T: Serialize>(&mut self, name: impl Into<String>,
                                values: impl IntoIterator<Item = T>)
                                -> Result<()> {
        let values = values.into_iter().map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        self.columns.insert(name.into(), values);
        Ok(())
    }

    /// Pivot `rows`, each serialized as a JSON object, into columns.
    /// Columns appear in the order their keys are first met; a row
    /// without some key gets `null` there.
    pub fn from_rows<T: Serialize>(rows: &[T]) -> Result<Self> {
        let mut columns: IndexMap<String, Vec<Value>> = IndexMap::new();
        for (i, row) in rows.iter().enumerate() {
            let Value::Object(fields) = serde_json::to_value(row)? else {
                return Err(<serde_json::Error as serde::ser::Error>::custom(
                    "rows of a column data source must be objects").into())
            };
            for (key, value) in fields {
                let col = columns.entry(key)
                    .or_insert_with(|| vec![Value::Null; i]);
                col.push(value);
            }
            for col in columns.values_mut() {
                if col.len() == i { col.push(Value::Null) }
            }
        }
        Ok(ColumnData { columns })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.columns.values().next().map_or(0, |c| c.len())
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(|k| k.as_str())
    }

    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.columns.get(name).map(|c| c.as_slice())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
