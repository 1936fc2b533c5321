//! # param-table
//!
//! Leptos + WASM editable table of parameters. Rows can be added, edited and
//! removed, the table can be exported as CSV and dumped to the developer
//! console.
//!
//! The data model lives in the `params` crate; this crate only renders it
//! and wires browser side effects (downloads, console output). Everything
//! that needs a browser is gated behind the `csr` feature so the crate
//! builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod util;
