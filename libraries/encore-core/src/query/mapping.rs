//! Property mapping registry
//!
//! Maps public, client-facing sort keys to the underlying storage columns
//! they order by. The registry is built once at startup and handed to the
//! components that need it; nothing here mutates after construction.

use crate::error::{CoreError, Result};
use std::any::TypeId;
use std::collections::HashMap;

/// The storage-side expansion of one client-facing sort key: one or more
/// column names, plus a revert flag. When `revert` is set, an ascending
/// request sorts the columns descending and vice versa (used for derived
/// keys such as "years since founding" over a stored founding year).
#[derive(Debug, Clone)]
pub struct PropertyMappingValue {
    pub targets: Vec<&'static str>,
    pub revert: bool,
}

impl PropertyMappingValue {
    /// Map a client key onto columns, keeping the requested direction.
    pub fn to(targets: Vec<&'static str>) -> Self {
        Self {
            targets,
            revert: false,
        }
    }

    /// Map a client key onto columns with the direction flipped.
    pub fn reverted(targets: Vec<&'static str>) -> Self {
        Self {
            targets,
            revert: true,
        }
    }
}

/// Client field name (case-insensitive) -> storage expansion, for one
/// DTO/entity pair.
#[derive(Debug, Clone, Default)]
pub struct PropertyMapping {
    entries: HashMap<String, PropertyMappingValue>,
}

impl PropertyMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a client-facing key. Keys are matched case-insensitively.
    pub fn insert(&mut self, name: &str, value: PropertyMappingValue) {
        self.entries.insert(name.to_ascii_lowercase(), value);
    }

    pub fn get(&self, name: &str) -> Option<&PropertyMappingValue> {
        self.entries.get(&name.to_ascii_lowercase())
    }

    /// Check an order-by string against this mapping.
    ///
    /// Splits on commas, takes the text before the first whitespace of each
    /// token as the field name, and requires every name to be a registered
    /// key. A blank string is always valid.
    pub fn is_valid_order_by(&self, order_by: &str) -> bool {
        if order_by.trim().is_empty() {
            return true;
        }

        order_by.split(',').all(|token| {
            let name = token.trim().split_whitespace().next().unwrap_or("");
            self.get(name).is_some()
        })
    }
}

/// Process-wide, read-only registry of property mappings keyed by a
/// (source DTO, destination entity) type pair.
#[derive(Debug, Default)]
pub struct MappingRegistry {
    mappings: Vec<((TypeId, TypeId), PropertyMapping)>,
}

impl MappingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<S: 'static, D: 'static>(&mut self, mapping: PropertyMapping) {
        self.mappings
            .push(((TypeId::of::<S>(), TypeId::of::<D>()), mapping));
    }

    /// Resolve the mapping for a type pair. Exactly one registration must
    /// exist; zero and multiple are both configuration errors.
    pub fn mapping_for<S: 'static, D: 'static>(&self) -> Result<&PropertyMapping> {
        let key = (TypeId::of::<S>(), TypeId::of::<D>());
        let mut matching = self
            .mappings
            .iter()
            .filter(|(k, _)| *k == key)
            .map(|(_, m)| m);

        match (matching.next(), matching.next()) {
            (Some(mapping), None) => Ok(mapping),
            _ => Err(CoreError::MappingNotFound),
        }
    }
}
