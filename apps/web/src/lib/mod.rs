//! Shared frontend utilities for API access, configuration, errors, logging and
//! build metadata.
//!
//! Views never build URLs or decode responses themselves; they go through the
//! feature clients, which go through [`api`]. Everything except the HTTP and
//! console glue is plain Rust and tested on the host.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod logging;
pub(crate) mod theme;

#[cfg(target_arch = "wasm32")]
pub(crate) use api::get_json;
pub(crate) use errors::AppError;
