//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test the file phase, the environment phase, and their combination.
//! - Provide shared sample shapes covering every field kind.
//!
//! Does NOT handle:
//! - Pure helper tests (env_var_or_none is tested inline in env.rs).
//!
//! Invariants:
//! - Tests that touch the environment use `serial_test` plus the global
//!   test lock to prevent variable pollution.
//! - Temporary files are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

use crate::shape::{ConfigShape, Field};


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Root sample shape covering text, excluded, and nested fields.
#[derive(Debug, Clone, Default)]
pub struct SampleConfig {
    pub addr: String,
    pub note: String,
    pub skipped: String,
    pub untagged: String,
    pub nested: SampleNested,
}

/// Nested sample group whose leaf answers to a bare tag.
#[derive(Debug, Clone, Default)]
pub struct SampleNested {
    pub port: String,
    pub skipped: String,
}

impl ConfigShape for SampleConfig {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::text("SAMPLE_ADDR", &mut self.addr),
            Field::text("sample_note", &mut self.note),
            Field::text("-SAMPLE_SKIPPED", &mut self.skipped),
            Field::text("", &mut self.untagged),
            Field::group("nested", &mut self.nested),
        ]
    }
}

impl ConfigShape for SampleNested {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::text("SAMPLE_PORT", &mut self.port),
            Field::text("-SAMPLE_NESTED_SKIPPED", &mut self.skipped),
        ]
    }
}

/// Sample shape declaring a field kind the loader cannot populate.
#[derive(Debug, Clone, Default)]
pub struct UnsupportedSample {
    pub name: String,
    pub retries: u32,
}

impl ConfigShape for UnsupportedSample {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::text("SAMPLE_NAME", &mut self.name),
            Field::unsupported("SAMPLE_RETRIES", "u32"),
        ]
    }
}

/// Same unsupported field as `UnsupportedSample`, excluded by its tag.
#[derive(Debug, Clone, Default)]
pub struct ExcludedUnsupportedSample {
    pub name: String,
    pub retries: u32,
}

impl ConfigShape for ExcludedUnsupportedSample {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::text("SAMPLE_NAME", &mut self.name),
            Field::unsupported("-SAMPLE_RETRIES", "u32"),
        ]
    }
}
