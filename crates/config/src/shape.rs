//! Declared field lists for configuration shapes.
//!
//! Responsibilities:
//! - Define the `ConfigShape` trait exposing a struct's fields as an
//!   ordered list of tagged accessors.
//! - Define the exclusion rule shared by the file and environment phases.
//!
//! Does NOT handle:
//! - Reading files or environment variables (see `loader` module).
//! - The concrete service configuration (see `types` module).
//!
//! Invariants:
//! - `fields()` returns every declared field in declaration order,
//!   excluded ones included; the loader decides what to skip.
//! - A field's tag doubles as its config-file key and its environment
//!   variable name.
//! - Supported leaves are text only; anything else must be declared
//!   `Unsupported` and is rejected during the environment phase.

/// Tag prefix that excludes a field from loading.
pub const EXCLUSION_MARKER: char = '-';

/// Mutable access to one declared field.
pub enum FieldValue<'a> {
    /// A text leaf, overwritable by file values and environment variables.
    Text(&'a mut String),
    /// A nested configuration group, walked recursively.
    Group(&'a mut dyn ConfigShape),
    /// A field of any other kind. Declaring one non-excluded is a defect
    /// in the shape itself; the environment phase reports it so the
    /// embedding process can fail fast.
    Unsupported {
        /// Rust type of the offending field, for diagnostics.
        type_name: &'static str,
    },
}

/// A declared field: its lookup tag plus access to its value.
pub struct Field<'a> {
    /// Config-file key and environment variable name for this field.
    /// An empty tag, or one starting with [`EXCLUSION_MARKER`], excludes
    /// the field from both phases.
    pub tag: &'a str,
    /// Accessor for the field's value.
    pub value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    /// A text leaf field.
    pub fn text(tag: &'a str, value: &'a mut String) -> Self {
        Self {
            tag,
            value: FieldValue::Text(value),
        }
    }

    /// A nested group field.
    pub fn group(tag: &'a str, value: &'a mut dyn ConfigShape) -> Self {
        Self {
            tag,
            value: FieldValue::Group(value),
        }
    }

    /// A declared field the loader cannot populate.
    pub fn unsupported(tag: &'a str, type_name: &'static str) -> Self {
        Self {
            tag,
            value: FieldValue::Unsupported { type_name },
        }
    }

    /// Whether both loading phases skip this field entirely.
    pub fn is_excluded(&self) -> bool {
        self.tag.is_empty() || self.tag.starts_with(EXCLUSION_MARKER)
    }
}

/// A configuration struct whose fields the loader can enumerate and fill.
///
/// Implementations list every field in declaration order, each with the
/// tag that names it in the config file and the process environment.
pub trait ConfigShape {
    /// The declared fields of this shape, in declaration order.
    fn fields(&mut self) -> Vec<Field<'_>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusion_rule_covers_empty_and_marked_tags() {
        let mut value = String::new();
        assert!(Field::text("", &mut value).is_excluded());
        assert!(Field::text("-SECRET", &mut value).is_excluded());
        assert!(!Field::text("RETHINKDB_ADDR", &mut value).is_excluded());

        // The marker only counts at the start of the tag.
        assert!(!Field::text("A-B", &mut value).is_excluded());
    }

    #[test]
    fn test_unsupported_fields_follow_the_same_exclusion_rule() {
        assert!(Field::unsupported("-retries", "u32").is_excluded());
        assert!(!Field::unsupported("retries", "u32").is_excluded());
    }
}
