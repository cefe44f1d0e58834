//! Sort expression builder
//!
//! Translates a client-supplied comma-separated order-by string into the
//! ordered column/direction instructions the storage layer applies. Field
//! names must come from a [`PropertyMapping`]; directions are free text
//! where only an exact (case-insensitive) `desc` means descending.

use crate::error::{CoreError, Result};
use crate::query::mapping::PropertyMapping;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// One column to order by. The first instruction is the primary sort key;
/// later instructions break ties in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortInstruction {
    pub field: String,
    pub direction: SortDirection,
}

/// Build sort instructions from an order-by string.
///
/// Tokens are comma-separated `field [direction]` pairs. Any direction
/// token other than a case-insensitive `desc` sorts ascending - typos are
/// deliberately tolerated rather than rejected. A field absent from the
/// mapping fails with [`CoreError::InvalidSortField`]; callers are
/// expected to have run [`PropertyMapping::is_valid_order_by`] first, so
/// hitting that error means a caller skipped validation.
///
/// A mapping entry may expand to several columns; each becomes its own
/// instruction, and entries with the revert flag flip the requested
/// direction.
pub fn build_sort(order_by: &str, mapping: &PropertyMapping) -> Result<Vec<SortInstruction>> {
    let mut instructions = Vec::new();

    if order_by.trim().is_empty() {
        return Ok(instructions);
    }

    for token in order_by.split(',') {
        let token = token.trim();
        let (name, direction_token) = match token.find(' ') {
            Some(index) => (&token[..index], token[index + 1..].trim()),
            None => (token, ""),
        };

        let requested = if direction_token.eq_ignore_ascii_case("desc") {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };

        let value = mapping
            .get(name)
            .ok_or_else(|| CoreError::InvalidSortField(name.to_string()))?;

        let effective = if value.revert {
            requested.reversed()
        } else {
            requested
        };

        for target in &value.targets {
            instructions.push(SortInstruction {
                field: (*target).to_string(),
                direction: effective,
            });
        }
    }

    Ok(instructions)
}
