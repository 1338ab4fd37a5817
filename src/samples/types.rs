//! Type aliases, constructors, required fields and fixed-size buffers.

use std::ops::Index;

use crate::error::{SampleError, SampleResult};

// =============================================================================
// Type alias
// =============================================================================

pub type StringList = Vec<String>;

pub fn names() -> StringList {
    vec!["Alice".to_string(), "Bob".to_string(), "Charlie".to_string()]
}

pub fn numbers_list() -> Vec<i32> {
    (1..=5).collect()
}

// =============================================================================
// Constructor taking every field
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Person {
            name: name.into(),
            age,
        }
    }
}

// =============================================================================
// Required fields enforced by the type system
// =============================================================================

pub struct Missing;

/// Each slot is `Missing` until set; `build()` only exists for
/// `RequiredPersonBuilder<String, u32>`.
pub struct RequiredPersonBuilder<Name, Age> {
    name: Name,
    age: Age,
}

impl RequiredPersonBuilder<Missing, Missing> {
    pub fn new() -> Self {
        RequiredPersonBuilder {
            name: Missing,
            age: Missing,
        }
    }
}

impl Default for RequiredPersonBuilder<Missing, Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> RequiredPersonBuilder<Missing, A> {
    pub fn name(self, name: impl Into<String>) -> RequiredPersonBuilder<String, A> {
        RequiredPersonBuilder {
            name: name.into(),
            age: self.age,
        }
    }
}

impl<N> RequiredPersonBuilder<N, Missing> {
    pub fn age(self, age: u32) -> RequiredPersonBuilder<N, u32> {
        RequiredPersonBuilder {
            name: self.name,
            age,
        }
    }
}

impl RequiredPersonBuilder<String, u32> {
    pub fn build(self) -> Person {
        Person {
            name: self.name,
            age: self.age,
        }
    }
}

// =============================================================================
// Zero-initialised struct
// =============================================================================

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

// =============================================================================
// InlineBuffer: fixed-size storage, size is part of the type
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct InlineBuffer<T, const N: usize> {
    data: [T; N],
}

pub type Buffer10<T> = InlineBuffer<T, 10>;

impl<T: Default, const N: usize> InlineBuffer<T, N> {
    pub fn new() -> Self {
        InlineBuffer {
            data: std::array::from_fn(|_| T::default()),
        }
    }
}

impl<T: Default, const N: usize> Default for InlineBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> InlineBuffer<T, N> {
    pub fn from_array(data: [T; N]) -> Self {
        InlineBuffer { data }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    pub fn set(&mut self, index: usize, value: T) -> SampleResult<()> {
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(SampleError::invalid_argument(format!(
                "index {} out of range for buffer of {}",
                index, N
            ))),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T, const N: usize> Index<usize> for InlineBuffer<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a InlineBuffer<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

pub fn create_buffer10() -> Buffer10<i32> {
    Buffer10::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        let names = names();
        assert_eq!(names.len(), 3);
        assert!(names.contains(&"Alice".to_string()));
        assert!(names.contains(&"Bob".to_string()));
        assert!(names.contains(&"Charlie".to_string()));
    }

    #[test]
    fn test_numbers_list() {
        assert_eq!(numbers_list(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_person_constructor() {
        let person = Person::new("John Doe", 30);
        assert_eq!(person.name, "John Doe");
        assert_eq!(person.age, 30);
    }

    #[test]
    fn test_required_builder_any_order() {
        let a = RequiredPersonBuilder::new().name("Bob").age(25).build();
        let b = RequiredPersonBuilder::new().age(25).name("Bob").build();
        assert_eq!(a, b);
        assert_eq!(a.name, "Bob");
        assert_eq!(a.age, 25);
    }

    #[test]
    fn test_required_builder_keeps_given_values() {
        let person = RequiredPersonBuilder::default().age(0).name("").build();
        assert_eq!(person, Person::new("", 0));

        let person = RequiredPersonBuilder::new().name("Dana").age(41).build();
        assert_eq!(person, Person::new("Dana", 41));
    }

    #[test]
    fn test_point_defaults_to_zero() {
        let p = Point::default();
        assert_eq!(p.x, 0);
        assert_eq!(p.y, 0);
    }

    #[test]
    fn test_buffer10_creation() {
        let buffer = create_buffer10();
        assert_eq!(buffer.len(), 10);
        assert!(buffer.iter().all(|&v| v == 0));
        assert_eq!(std::mem::size_of::<Buffer10<i32>>(), 10 * std::mem::size_of::<i32>());
    }

    #[test]
    fn test_buffer_set_and_index() {
        let mut buffer: InlineBuffer<i32, 4> = InlineBuffer::new();
        for i in 0..buffer.len() {
            buffer.set(i, i as i32 * 2).unwrap();
        }
        assert_eq!(buffer[3], 6);
        assert_eq!(buffer.get(4), None);
        assert_eq!((&buffer).into_iter().sum::<i32>(), 12);
    }

    #[test]
    fn test_buffer_set_out_of_range() {
        let mut buffer: InlineBuffer<u8, 2> = InlineBuffer::from_array([1, 2]);
        let err = buffer.set(2, 9).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(buffer.as_slice(), &[1, 2]);
    }
}
