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

//! Algebraic traits used to combine accumulated values. [`Semigroup`] describes how two values are
//! merged and [`Zero`] provides an identity for that merge. Error accumulation relies on the
//! [`Semigroup`] instances of the list types to concatenate errors in order.

mod monoid;
mod semigroup;

pub use monoid::{Monoid, Zero};
pub use semigroup::Semigroup;

#[cfg(test)]
mod tests;
