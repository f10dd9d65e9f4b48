//! Route handlers for the REST API
//!
//! Handlers are organized by domain:
//! - [`scale`] - File generation and upload to a scale
//! - [`system`] - Health, OpenAPI, root redirect

mod scale;
mod system;

pub use scale::*;
pub use system::*;
