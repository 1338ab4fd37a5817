//! Generic numeric bounds and pointer-sized integer arithmetic.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Add;

use crate::error::{SampleError, SampleResult};

// =============================================================================
// Generic math over any addable, comparable number
// =============================================================================

/// Capability set shared by the built-in numeric types.
pub trait Number: Copy + PartialOrd + Add<Output = Self> {}

// Blanket impl: every type with the right operators is a Number
impl<T> Number for T where T: Copy + PartialOrd + Add<Output = T> {}

#[derive(Debug, Default, Clone, Copy)]
pub struct MathOperations<T: Number> {
    _marker: PhantomData<T>,
}

impl<T: Number> MathOperations<T> {
    pub fn new() -> Self {
        MathOperations { _marker: PhantomData }
    }

    pub fn add(&self, a: T, b: T) -> T {
        a + b
    }

    pub fn larger(&self, a: T, b: T) -> T {
        if b > a {
            b
        } else {
            a
        }
    }
}

// =============================================================================
// NativeInt: pointer-sized integer newtype
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NativeInt(pub isize);

impl NativeInt {
    pub fn new(value: isize) -> Self {
        NativeInt(value)
    }

    pub fn get(self) -> isize {
        self.0
    }

    pub fn checked_add(self, rhs: NativeInt) -> SampleResult<NativeInt> {
        self.0
            .checked_add(rhs.0)
            .map(NativeInt)
            .ok_or(SampleError::Overflow { lhs: self.0, rhs: rhs.0 })
    }
}

// Wraps on overflow, like unchecked native-int arithmetic
impl Add for NativeInt {
    type Output = NativeInt;

    fn add(self, rhs: NativeInt) -> NativeInt {
        NativeInt(self.0.wrapping_add(rhs.0))
    }
}

impl From<isize> for NativeInt {
    fn from(value: isize) -> Self {
        NativeInt(value)
    }
}

impl fmt::Display for NativeInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn add_native(a: NativeInt, b: NativeInt) -> NativeInt {
    a + b
}
