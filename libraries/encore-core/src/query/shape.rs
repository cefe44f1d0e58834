//! Field projection (data shaping)
//!
//! Produces a subset-of-fields view of a DTO for serialization. Instead of
//! runtime reflection, each shapeable type carries an explicit field
//! registry: the [`Shape`] trait lists canonical field names in declaration
//! order and hands out each field's value.

use crate::error::{CoreError, Result};
use serde_json::{Map, Value};

/// A type whose public fields can be projected by name.
pub trait Shape {
    /// Canonical field names, in declaration order.
    fn fields() -> &'static [&'static str];

    /// The value of one field. Only called with names from [`Shape::fields`].
    fn field_value(&self, field: &str) -> Value;
}

/// Project an object down to the requested fields.
///
/// A blank `fields` keeps every field in declaration order. Otherwise the
/// list is split on commas and each trimmed name resolved
/// case-insensitively to its canonical spelling; output entries keep the
/// position of a name's first occurrence, and a repeated name overwrites
/// the earlier value in place. An unresolvable name fails with
/// [`CoreError::UnknownField`].
pub fn shape<T: Shape>(source: &T, fields: Option<&str>) -> Result<Map<String, Value>> {
    let mut shaped = Map::new();

    let Some(fields) = fields.filter(|f| !f.trim().is_empty()) else {
        for field in T::fields() {
            shaped.insert((*field).to_string(), source.field_value(field));
        }
        return Ok(shaped);
    };

    for token in fields.split(',') {
        let name = token.trim();
        let canonical = resolve::<T>(name).ok_or_else(|| CoreError::UnknownField(name.to_string()))?;
        shaped.insert(canonical.to_string(), source.field_value(canonical));
    }

    Ok(shaped)
}

/// Check a projection list without shaping anything. Blank input is valid.
pub fn has_valid_fields<T: Shape>(fields: Option<&str>) -> bool {
    let Some(fields) = fields.filter(|f| !f.trim().is_empty()) else {
        return true;
    };

    fields
        .split(',')
        .all(|token| resolve::<T>(token.trim()).is_some())
}

fn resolve<T: Shape>(name: &str) -> Option<&'static str> {
    T::fields()
        .iter()
        .find(|field| field.eq_ignore_ascii_case(name))
        .copied()
}
