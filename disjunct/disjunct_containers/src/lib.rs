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

//! # Algebraic Containers
//!
//! Closed sum types describing the result of a computation without resorting to panics for
//! control flow:
//!
//! * [`Maybe`]: a value that may be absent.
//! * [`Outcome`]: a success or an error. Combinators stop at the first error.
//! * [`Either`]: one of two values, neither of which is privileged.
//! * [`Try`]: the result of a computation that may panic, with the panic captured as a [`Fault`].
//! * [`Validated`]: a success or a non-empty list of errors. Combinators accumulate every error.
//!
//! Each container converts to the others and to the standard library [`Option`] and [`Result`].
//! Whether failures short circuit ([`Outcome`], [`Either`]) or accumulate ([`Validated`]) is
//! decided by the choice of type; no operation silently switches between the two behaviours.

mod attempt;
mod either;
mod maybe;
mod outcome;
mod validated;

#[cfg(test)]
mod trace;

pub use attempt::Try;
pub use either::Either;
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use validated::Validated;

pub use disjunct_errors::{Fault, UsageError, Variant};
pub use disjunct_list::{NonEmptyList, PersistentList};
