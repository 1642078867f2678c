//! Student registry: a small CRUD HTTP service over an in-memory collection
//! of student records.
//!
//! - [`store`]: the in-memory record store, seeded at startup.
//! - [`models`]: the `Student` entity and request schemas.
//! - [`api`]: axum router, handlers, and error responses.

pub mod api;
pub mod models;
pub mod store;
