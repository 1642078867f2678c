//! Domain models for the student registry.
//!
//! There is a single entity, [`Student`], keyed by its roll number, plus the
//! request schemas for each mutating operation. All wire field names are
//! camelCase (`rollNumber`).

mod student;

pub use student::*;
