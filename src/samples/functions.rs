//! Functions as values, optional arguments and optional results.

pub fn add(a: i32, b: i32) -> i32 {
    a + b
}

pub fn add_f64(a: f64, b: f64) -> f64 {
    a + b
}

/// Accepts a function item or a closure; `add` is passed without wrapping.
pub fn calculate<F>(x: i32, y: i32, f: F) -> i32
where
    F: Fn(i32, i32) -> i32,
{
    f(x, y)
}

pub fn increment_by(value: i32, increment: Option<i32>) -> i32 {
    let increment_by = |v: i32, inc: i32| v + inc;
    increment_by(value, increment.unwrap_or(1))
}

/// `None` for a missing or empty name instead of a null string.
pub fn greeting(name: Option<&str>) -> Option<String> {
    match name {
        Some(name) if !name.is_empty() => Some(format!("Hello, {}", name)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_with_function_item() {
        let cases = [(20, 10, 30), (15, 5, 20), (0, 0, 0)];
        for (x, y, expected) in cases {
            assert_eq!(calculate(x, y, add), expected);
        }
    }

    #[test]
    fn test_calculate_with_closure() {
        assert_eq!(calculate(6, 7, |a, b| a * b), 42);
    }

    #[test]
    fn test_add_f64() {
        assert_eq!(add_f64(1.25, 0.75), 2.0);
    }

    #[test]
    fn test_increment_default() {
        assert_eq!(increment_by(3, None), 4);
    }

    #[test]
    fn test_increment_provided() {
        assert_eq!(increment_by(3, Some(2)), 5);
    }

    #[test]
    fn test_greeting() {
        assert_eq!(greeting(Some("Alice")), Some("Hello, Alice".to_string()));
        assert_eq!(greeting(Some("")), None);
        assert_eq!(greeting(None), None);
    }
}
