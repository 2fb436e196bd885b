// Copyright 2015-2024 Swim Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::Semigroup;

/// Types with a distinguished identity element for their [`Semigroup`] operation.
pub trait Zero: Sized {
    fn zero() -> Self;

    fn is_zero(&self) -> bool;
}

/// Trait for types with an associative binary operator and a zero element. Implementors are
/// responsible for ensuring that:
/// * The operation is associative.
/// * Applying the operator to some value `v` of the type and the zero element (in both directions)
///   results in a value that is identical to `v`.
pub trait Monoid: Zero + Semigroup {
    /// Combine all values of an iterator, starting from the zero element.
    fn concat_all<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        items.into_iter().fold(Self::zero(), Semigroup::op)
    }
}

impl<T: Zero + Semigroup> Monoid for T {}

impl<T> Zero for Vec<T> {
    fn zero() -> Self {
        vec![]
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Zero for String {
    fn zero() -> Self {
        String::new()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Zero for Option<T> {
    fn zero() -> Self {
        None
    }

    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

macro_rules! number_zero {
    ($($t:ty),*) => {
        $(
            impl Zero for $t {
                fn zero() -> Self {
                    0
                }

                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

number_zero!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
