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

use crate::{Maybe, Outcome, Try, Validated};
use disjunct_errors::{Fault, UsageError, Variant};

#[cfg(test)]
mod tests;

/// A value of one of two types. Neither side is privileged, although the single-sided combinators
/// ([`Either::map`], [`Either::flat_map`]) and the conversions to [`Outcome`], [`Maybe`] and
/// [`Try`] treat the right side as the success.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    /// An error becomes [`Either::Left`] and a success [`Either::Right`].
    pub fn from_outcome(outcome: Outcome<R, L>) -> Self {
        match outcome {
            Outcome::Ok(v) => Either::Right(v),
            Outcome::Err(e) => Either::Left(e),
        }
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    pub fn try_unwrap_left(self) -> Result<L, UsageError> {
        match self {
            Either::Left(l) => Ok(l),
            Either::Right(_) => Err(UsageError::illegal_unwrap(Variant::Left, Variant::Right)),
        }
    }

    pub fn try_unwrap_right(self) -> Result<R, UsageError> {
        match self {
            Either::Right(r) => Ok(r),
            Either::Left(_) => Err(UsageError::illegal_unwrap(Variant::Right, Variant::Left)),
        }
    }

    #[track_caller]
    pub fn unwrap_left(self) -> L {
        match self.try_unwrap_left() {
            Ok(l) => l,
            Err(err) => err.raise(),
        }
    }

    #[track_caller]
    pub fn unwrap_right(self) -> R {
        match self.try_unwrap_right() {
            Ok(r) => r,
            Err(err) => err.raise(),
        }
    }

    pub fn get_or_else(self, fallback: R) -> R {
        match self {
            Either::Right(r) => r,
            Either::Left(_) => fallback,
        }
    }

    pub fn get_or_else_get<F>(self, f: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Either::Right(r) => r,
            Either::Left(l) => f(l),
        }
    }

    pub fn map<U, F>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        self.map_both(|l| l, f)
    }

    pub fn map_left<M, F>(self, f: F) -> Either<M, R>
    where
        F: FnOnce(L) -> M,
    {
        self.map_both(f, |r| r)
    }

    pub fn map_both<M, U, F1, F2>(self, on_left: F1, on_right: F2) -> Either<M, U>
    where
        F1: FnOnce(L) -> M,
        F2: FnOnce(R) -> U,
    {
        match self {
            Either::Left(l) => Either::Left(on_left(l)),
            Either::Right(r) => Either::Right(on_right(r)),
        }
    }

    pub fn flat_map<U, F>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Either<L, U>,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => f(r),
        }
    }

    pub fn flat_map_left<M, F>(self, f: F) -> Either<M, R>
    where
        F: FnOnce(L) -> Either<M, R>,
    {
        match self {
            Either::Left(l) => f(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    pub fn fold<U, F1, F2>(self, on_left: F1, on_right: F2) -> U
    where
        F1: FnOnce(L) -> U,
        F2: FnOnce(R) -> U,
    {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    /// Exchange the sides. The payload is unchanged.
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    pub fn peek<F>(self, f: F) -> Self
    where
        F: FnOnce(&R),
    {
        self.tap_both(|_| {}, f)
    }

    pub fn peek_left<F>(self, f: F) -> Self
    where
        F: FnOnce(&L),
    {
        self.tap_both(f, |_| {})
    }

    /// Observe whichever side is present without changing the container.
    pub fn tap_both<F1, F2>(self, on_left: F1, on_right: F2) -> Self
    where
        F1: FnOnce(&L),
        F2: FnOnce(&R),
    {
        match &self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
        self
    }

    pub fn into_outcome(self) -> Outcome<R, L> {
        match self {
            Either::Left(l) => Outcome::Err(l),
            Either::Right(r) => Outcome::Ok(r),
        }
    }

    pub fn into_maybe(self) -> Maybe<R> {
        self.fold(|_| Maybe::None, Maybe::Some)
    }

    pub fn into_maybe_left(self) -> Maybe<L> {
        self.fold(Maybe::Some, |_| Maybe::None)
    }

    pub fn into_try_with<F>(self, f: F) -> Try<R>
    where
        F: FnOnce(L) -> Fault,
    {
        self.into_outcome().into_try_with(f)
    }

    pub fn into_validated(self) -> Validated<R, L> {
        Validated::from_either(self)
    }
}

impl<L, R> From<Outcome<R, L>> for Either<L, R> {
    fn from(outcome: Outcome<R, L>) -> Self {
        Either::from_outcome(outcome)
    }
}

impl<L, R> From<Either<L, R>> for Outcome<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_outcome()
    }
}
