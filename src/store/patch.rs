//! Partial record updates.
//!
//! A [`Patch`] is a set of top-level field replacements, named by their wire
//! (camelCase) names. Applying one never mutates the original record: the
//! record is serialized, the fields are overlaid, and a new record is
//! deserialized from the result. Nested values are replaced whole.

use crate::error::{StoreError, StoreResult};
use crate::models::Record;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Patch {
    fields: Map<String, Value>,
}

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one field.
    ///
    /// ```
    /// use vaic_store::Patch;
    ///
    /// let patch = Patch::new().set("score", 5).set("studentId", "SV009");
    /// assert_eq!(patch.len(), 2);
    /// ```
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Parse a patch from a JSON object.
    pub fn from_json(text: &str) -> StoreResult<Self> {
        let fields = serde_json::from_str(text).map_err(|source| StoreError::Deserialize {
            what: "patch".to_string(),
            source,
        })?;
        Ok(Self { fields })
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Copy of this patch with `field` dropped.
    pub(crate) fn without(&self, field: &str) -> Self {
        let mut fields = self.fields.clone();
        fields.remove(field);
        Self { fields }
    }

    /// Produce a new record with this patch overlaid on `record`.
    pub fn apply<T: Record>(&self, record: &T) -> StoreResult<T> {
        let mut snapshot =
            serde_json::to_value(record).map_err(|source| StoreError::Serialize {
                what: format!("{} {}", T::COLLECTION, record.id()),
                source,
            })?;

        if let Value::Object(fields) = &mut snapshot {
            for (field, value) in &self.fields {
                fields.insert(field.clone(), value.clone());
            }
        }

        serde_json::from_value(snapshot).map_err(|source| StoreError::Patch {
            id: record.id().to_string(),
            source,
        })
    }
}

impl From<Map<String, Value>> for Patch {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Replace the first record whose id matches with its patched copy.
///
/// Returns `Ok(false)` when no record matches. On error the slice is left
/// as it was.
pub(crate) fn patch_first<T: Record>(
    records: &mut [T],
    id: &str,
    patch: &Patch,
) -> StoreResult<bool> {
    let Some(slot) = records.iter_mut().find(|r| r.id() == id) else {
        return Ok(false);
    };
    *slot = patch.apply(slot)?;
    Ok(true)
}

/// Drop every record whose id matches. Returns how many went.
pub(crate) fn remove_all<T: Record>(records: &mut Vec<T>, id: &str) -> usize {
    let before = records.len();
    records.retain(|r| r.id() != id);
    before - records.len()
}
