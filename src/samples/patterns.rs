//! Slice and string patterns.
//!
//! Slice patterns match on the shape of a sequence; string slices match
//! directly against constants without allocating.

// =============================================================================
// Slice patterns
// =============================================================================

pub fn starts_with_one_two_three(numbers: &[i32]) -> bool {
    matches!(numbers, [1, 2, 3, ..])
}

pub fn is_exactly_one_two_three(numbers: &[i32]) -> bool {
    matches!(numbers, [1, 2, 3])
}

pub fn describe(numbers: &[i32]) -> String {
    match numbers {
        [] => "empty".to_string(),
        [only] => format!("one element: {}", only),
        [first, .., last] if first == last => format!("bookended by {}", first),
        [first, rest @ ..] => format!("starts with {} followed by {} more", first, rest.len()),
    }
}

// =============================================================================
// String slice patterns
// =============================================================================

pub fn is_123(s: &str) -> bool {
    matches!(s, "123")
}

pub fn is_abc(s: &str) -> bool {
    match s {
        "ABC" => true,
        _ => false,
    }
}

/// Provinces where French is an official language.
pub fn speaks_french(province: &str) -> bool {
    match province {
        "QC" | "NB" => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_matching_list() {
        let numbers = vec![1, 2, 3, 4, 5];
        assert!(starts_with_one_two_three(&numbers));
    }

    #[test]
    fn test_starts_with_non_matching_list() {
        let numbers = vec![4, 5, 6];
        assert!(!starts_with_one_two_three(&numbers));
        assert!(!starts_with_one_two_three(&[1, 2]));
    }

    #[test]
    fn test_exact_match() {
        assert!(is_exactly_one_two_three(&[1, 2, 3]));
        assert!(!is_exactly_one_two_three(&[1, 2, 3, 4]));
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(&[]), "empty");
        assert_eq!(describe(&[7]), "one element: 7");
        assert_eq!(describe(&[4, 1, 4]), "bookended by 4");
        assert_eq!(describe(&[1, 2, 3]), "starts with 1 followed by 2 more");
    }

    #[test]
    fn test_string_constants() {
        assert!(is_123("123"));
        assert!(!is_123("1234"));
        assert!(is_abc("ABC"));
        assert!(!is_abc("abc"));
    }

    #[test]
    fn test_provinces() {
        assert!(speaks_french("QC"));
        assert!(speaks_french("NB"));
        assert!(!speaks_french("ON"));
    }
}
