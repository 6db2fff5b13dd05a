use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Whole-store snapshot keyed by the caller-supplied identifier.
pub type RecordMap = HashMap<String, Record>;

/// A named, priced item.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub price: i64,
    #[serde(default)]
    pub description: String,
}

impl Record {
    pub fn new(name: impl Into<String>, price: i64) -> Self {
        Self { name: name.into(), price, description: String::new() }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Both `name` and `price` must be truthy: an empty name or a zero price
    /// counts as not provided.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.name.is_empty() {
            return Err(ModelError::Validation("name required".into()));
        }
        if self.price == 0 {
            return Err(ModelError::Validation("price required".into()));
        }
        Ok(())
    }
}

/// Optional field overrides for a partial update.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordPatch {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub description: Option<String>,
}

impl RecordPatch {
    /// True when no field would change the record.
    pub fn is_empty(&self) -> bool {
        self.supplied_name().is_none()
            && self.supplied_price().is_none()
            && self.supplied_description().is_none()
    }

    /// Overwrite each supplied field in place. `""` and `0` are skipped.
    pub fn apply(&self, record: &mut Record) {
        if let Some(name) = self.supplied_name() {
            record.name = name.to_string();
        }
        if let Some(price) = self.supplied_price() {
            record.price = price;
        }
        if let Some(description) = self.supplied_description() {
            record.description = description.to_string();
        }
    }

    fn supplied_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.is_empty())
    }

    fn supplied_price(&self) -> Option<i64> {
        self.price.filter(|p| *p != 0)
    }

    fn supplied_description(&self) -> Option<&str> {
        self.description.as_deref().filter(|s| !s.is_empty())
    }
}
