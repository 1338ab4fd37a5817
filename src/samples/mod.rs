pub mod functions;
pub mod max_finder;
pub mod numeric;
pub mod patterns;
pub mod strings;
pub mod types;
pub mod visibility;
