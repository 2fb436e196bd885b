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

/// Trait for types with an associative binary operator. Implementors are responsible for ensuring
/// that the operation is associative. For sequence-like types the operator must keep the elements
/// of the left operand before those of the right operand.
pub trait Semigroup: Sized {
    fn op(mut left: Self, right: Self) -> Self {
        left.op_in_place(right);
        left
    }

    fn op_in_place(&mut self, right: Self);

    /// Combine all values of an iterator, returning nothing if it is empty.
    fn op_all<I>(items: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        items.into_iter().reduce(Semigroup::op)
    }
}

impl<T> Semigroup for Vec<T> {
    fn op_in_place(&mut self, right: Self) {
        self.extend(right);
    }
}

impl Semigroup for String {
    fn op_in_place(&mut self, right: Self) {
        self.push_str(&right);
    }
}

impl<T: Semigroup> Semigroup for Option<T> {
    fn op(left: Self, right: Self) -> Self {
        match (left, right) {
            (Some(l), Some(r)) => Some(T::op(l, r)),
            (l @ Some(_), None) => l,
            (None, r) => r,
        }
    }

    fn op_in_place(&mut self, right: Self) {
        *self = Semigroup::op(self.take(), right);
    }
}

/// It is not appropriate to implement [`Semigroup`] for every type that is [`std::ops::Add`] as
/// some implementations are not associative (floating point addition, for example).
macro_rules! number_semigroup {
    ($($t:ty),*) => {
        $(
            impl Semigroup for $t {
                fn op(left: Self, right: Self) -> Self {
                    left + right
                }

                fn op_in_place(&mut self, right: Self) {
                    *self += right
                }
            }
        )*
    };
}

number_semigroup!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
