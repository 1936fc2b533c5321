//! Browser side effects.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers keep web-sys glue out of the components. Each one has a
//! native fallback so the crate builds and tests without the `csr` feature.

pub mod console;
pub mod download;
