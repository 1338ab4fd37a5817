// Property-based tests for the borrowed maximum finder

use language_feature_samples::{find_max, find_max_in, find_max_position, SampleError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_max_is_not_smaller_than_any_element(values in prop::collection::vec(any::<i32>(), 1..200)) {
        let max = find_max(&values).unwrap();
        for value in &values {
            prop_assert!(max >= value);
        }
    }

    #[test]
    fn test_position_is_first_occurrence(values in prop::collection::vec(-5i32..5, 1..50)) {
        let index = find_max_position(&values).unwrap();
        let max = values[index];

        // nothing before the returned index reaches the maximum
        prop_assert!(values[..index].iter().all(|&v| v < max));
        prop_assert!(values[index..].iter().all(|&v| v <= max));
    }

    #[test]
    fn test_reference_points_into_input(values in prop::collection::vec(any::<u16>(), 1..100)) {
        let max = find_max(&values).unwrap();
        let index = find_max_position(&values).unwrap();
        prop_assert!(std::ptr::eq(max, &values[index]));
    }

    #[test]
    fn test_idempotent(values in prop::collection::vec(any::<i64>(), 1..100)) {
        let first = find_max(&values).unwrap();
        let second = find_max(&values).unwrap();
        prop_assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_finite_floats(values in prop::collection::vec(-1.0e6f64..1.0e6, 1..100)) {
        let max = *find_max(&values).unwrap();
        let expected = values.iter().cloned().fold(f64::MIN, f64::max);
        prop_assert_eq!(max, expected);
    }
}

#[test]
fn test_scenarios() {
    assert_eq!(*find_max(&[3, 6, 2, 8, 4]).unwrap(), 8);
    assert_eq!(find_max_position(&[3, 6, 2, 8, 4]).unwrap(), 3);
    assert_eq!(*find_max(&[5]).unwrap(), 5);
    assert_eq!(find_max_position(&[8, 3, 8, 1]).unwrap(), 0);
}

#[test]
fn test_null_and_empty_fail_with_invalid_argument() {
    let empty: Vec<i32> = Vec::new();
    assert!(matches!(find_max(&empty), Err(SampleError::InvalidArgument(_))));
    assert!(matches!(find_max_in::<i32>(None), Err(SampleError::InvalidArgument(_))));
}
