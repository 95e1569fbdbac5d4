//! Test utilities shared by the fieldcache-* crates.
//!
//! - [`data_gen`]: synthetic columns and ordinal fields.
//! - [`checks`]: verification that every access pattern of a
//!   [`StringValues`](fieldcache_values::StringValues) instance agrees.

pub mod checks;
pub mod data_gen;
