//! Library interface for the `ide-macros` stub generation tooling.
//!
//! This crate turns a macro manifest (a JSON description of the callable
//! macros registered on host classes at runtime) into IDE helper stub
//! files: deterministic PHP declaration text grouped by namespace and
//! class, with one artifact per stub variant.

pub mod cli;
pub mod config;
pub mod error;
mod fs_helpers;
pub mod manifest;
pub mod model;
pub mod stub;
