//! Read-only references into caller-owned storage.
//!
//! `find_max` hands back a `&T` pointing at the largest element instead of a
//! copy. The borrow keeps the slice alive and frozen for as long as the
//! caller holds on to the result.

use log::debug;

use crate::error::{SampleError, SampleResult};

/// Index of the first maximum in `values`.
///
/// Elements that do not compare (e.g. `NaN`) never replace the current
/// maximum.
pub fn find_max_position<T: PartialOrd>(values: &[T]) -> SampleResult<usize> {
    if values.is_empty() {
        return Err(SampleError::invalid_argument("sequence cannot be empty"));
    }

    let mut max_index = 0;
    for (i, value) in values.iter().enumerate().skip(1) {
        // strict comparison keeps the first occurrence on ties
        if *value > values[max_index] {
            max_index = i;
        }
    }

    debug!("maximum of {} elements found at index {}", values.len(), max_index);
    Ok(max_index)
}

/// Borrow the largest element of `values`; ties resolve to the earliest index.
pub fn find_max<T: PartialOrd>(values: &[T]) -> SampleResult<&T> {
    let index = find_max_position(values)?;
    Ok(&values[index])
}

/// Same as [`find_max`], with `None` standing in for a missing sequence.
pub fn find_max_in<T: PartialOrd>(values: Option<&[T]>) -> SampleResult<&T> {
    match values {
        Some(values) => find_max(values),
        None => Err(SampleError::invalid_argument("sequence cannot be null")),
    }
}

/// MaxCalculator: method-style entry point for the finder
#[derive(Debug, Default, Clone, Copy)]
pub struct MaxCalculator;

impl MaxCalculator {
    pub fn new() -> Self {
        MaxCalculator
    }

    pub fn find_max<'a, T: PartialOrd>(&self, values: &'a [T]) -> SampleResult<&'a T> {
        find_max(values)
    }
}
