//! Core library for the eo-tools command line application.
//!
//! The library downloads executive-order metadata from the Federal Register
//! document search API and writes it out as CSV. Responsibilities are kept
//! narrow and composable: network and file adapters live under [`io`], the
//! API payload and output row types inside [`model`], the record reshaping in
//! [`flatten`], and the pipeline orchestration under [`sync`].

pub mod error;
pub mod flatten;
pub mod io;
pub mod logging;
pub mod model;
pub mod sync;

pub use error::{Result, ToolError};
