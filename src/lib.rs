//! # Language Feature Samples
//!
//! Small, independent samples, each showing one language feature, with unit
//! tests asserting the expected output of each.
//!
//! ## Samples
//! - `max_finder` - borrowed reference to the largest element of a slice
//! - `numeric` - generic numeric bounds and pointer-sized integers
//! - `patterns` - slice patterns and string constant matching
//! - `strings` - raw string literals and multi-line formatting
//! - `visibility` - module-private types and short type names
//! - `functions` - function items as arguments, optional arguments
//! - `types` - type aliases, typestate builders, const-generic buffers
//!
//! Run the tour with: `cargo run --bin feature-tour -- run`

pub mod catalog;
pub mod config;
pub mod error;
pub mod samples;

pub use config::TourConfig;
pub use error::{SampleError, SampleResult};
pub use samples::max_finder::{find_max, find_max_in, find_max_position, MaxCalculator};
