//! Core definitions (errors and numeric coercions), relied upon by all stride-* crates.

pub mod error;
pub mod num;
pub mod result;

pub use result::Result;
