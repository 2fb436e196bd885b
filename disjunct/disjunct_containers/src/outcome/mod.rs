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

use crate::{Either, Maybe, Try, Validated};
use disjunct_errors::{Fault, UsageError, Variant};
use std::error::Error;


/// The result of a computation that either succeeds with a value or fails with an error.
///
/// Combinators are biased towards success and stop at the first error that they encounter: a
/// function passed to [`Outcome::map`] or [`Outcome::flat_map`] is never called on an error and
/// [`Outcome::sequence`] stops consuming its input at the first error. Use [`crate::Validated`] to
/// collect every error instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome<T, E> {
    Ok(T),
    Err(E),
}

impl<T, E> Outcome<T, E> {
    pub fn ok(value: T) -> Self {
        Outcome::Ok(value)
    }

    pub fn err(error: E) -> Self {
        Outcome::Err(error)
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }

    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(v) => Outcome::Ok(v),
            Outcome::Err(e) => Outcome::Err(e),
        }
    }

    pub fn try_unwrap(self) -> Result<T, UsageError> {
        match self {
            Outcome::Ok(v) => Ok(v),
            Outcome::Err(_) => Err(UsageError::illegal_unwrap(Variant::Ok, Variant::Err)),
        }
    }

    pub fn try_unwrap_err(self) -> Result<E, UsageError> {
        match self {
            Outcome::Err(e) => Ok(e),
            Outcome::Ok(_) => Err(UsageError::illegal_unwrap(Variant::Err, Variant::Ok)),
        }
    }

    /// # Panics
    /// If this is an error.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(v) => v,
            Err(err) => err.raise(),
        }
    }

    /// # Panics
    /// If this is a success.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self.try_unwrap_err() {
            Ok(e) => e,
            Err(err) => err.raise(),
        }
    }

    pub fn get_or_else(self, fallback: T) -> T {
        match self {
            Outcome::Ok(v) => v,
            Outcome::Err(_) => fallback,
        }
    }

    pub fn get_or_else_get<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Ok(v) => v,
            Outcome::Err(e) => f(e),
        }
    }

    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(v) => Outcome::Ok(f(v)),
            Outcome::Err(e) => Outcome::Err(e),
        }
    }

    pub fn map_err<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Outcome::Ok(v) => Outcome::Ok(v),
            Outcome::Err(e) => Outcome::Err(f(e)),
        }
    }

    pub fn map_both<U, G, F1, F2>(self, on_ok: F1, on_err: F2) -> Outcome<U, G>
    where
        F1: FnOnce(T) -> U,
        F2: FnOnce(E) -> G,
    {
        match self {
            Outcome::Ok(v) => Outcome::Ok(on_ok(v)),
            Outcome::Err(e) => Outcome::Err(on_err(e)),
        }
    }

    pub fn flat_map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Ok(v) => f(v),
            Outcome::Err(e) => Outcome::Err(e),
        }
    }

    /// Alias for [`Outcome::flat_map`].
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.flat_map(f)
    }

    /// Turn an error into a success.
    pub fn recover<F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Err(e) => Outcome::Ok(f(e)),
            ok => ok,
        }
    }

    /// Replace an error with the result of another computation.
    pub fn recover_with<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Outcome::Ok(v) => Outcome::Ok(v),
            Outcome::Err(e) => f(e),
        }
    }

    /// Pair the values of two successes. If either is an error, the first error is returned.
    pub fn zip<U>(self, other: Outcome<U, E>) -> Outcome<(T, U), E> {
        self.combine(other, |left, right| (left, right))
    }

    /// Combine the values of two successes. If either is an error, the first error is returned.
    pub fn combine<U, V, F>(self, other: Outcome<U, E>, f: F) -> Outcome<V, E>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (Outcome::Ok(left), Outcome::Ok(right)) => Outcome::Ok(f(left, right)),
            (Outcome::Err(e), _) => Outcome::Err(e),
            (_, Outcome::Err(e)) => Outcome::Err(e),
        }
    }

    /// The other outcome if this is a success, otherwise this error.
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Outcome::Ok(_) => other,
            Outcome::Err(e) => Outcome::Err(e),
        }
    }

    /// This outcome if it is a success, otherwise the other.
    pub fn or<G>(self, other: Outcome<T, G>) -> Outcome<T, G> {
        match self {
            Outcome::Ok(v) => Outcome::Ok(v),
            Outcome::Err(_) => other,
        }
    }

    /// Turn a success that does not satisfy the predicate into an error.
    pub fn filter_or_else<P, F>(self, predicate: P, error: F) -> Outcome<T, E>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> E,
    {
        match self {
            Outcome::Ok(v) if !predicate(&v) => Outcome::Err(error(v)),
            other => other,
        }
    }

    pub fn fold<U, F1, F2>(self, on_err: F1, on_ok: F2) -> U
    where
        F1: FnOnce(E) -> U,
        F2: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(v) => on_ok(v),
            Outcome::Err(e) => on_err(e),
        }
    }

    pub fn peek<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Outcome::Ok(v) = &self {
            f(v);
        }
        self
    }

    pub fn peek_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Outcome::Err(e) = &self {
            f(e);
        }
        self
    }

    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Outcome::Ok(v) => predicate(v),
            Outcome::Err(_) => false,
        }
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.exists(|v| v == value)
    }

    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Ok(v) => Ok(v),
            Outcome::Err(e) => Err(e),
        }
    }

    /// The value of a success; the error is discarded.
    pub fn into_option(self) -> Option<T> {
        self.into_result().ok()
    }

    /// The value of a success; the error is discarded.
    pub fn into_maybe(self) -> Maybe<T> {
        Maybe::from_option(self.into_option())
    }

    pub fn into_maybe_err(self) -> Maybe<E> {
        Maybe::from_option(self.into_result().err())
    }

    /// A success becomes [`Either::Right`] and an error [`Either::Left`].
    pub fn into_either(self) -> Either<E, T> {
        Either::from_outcome(self)
    }

    pub fn into_validated(self) -> Validated<T, E> {
        Validated::from_outcome(self)
    }

    pub fn into_try_with<F>(self, f: F) -> Try<T>
    where
        F: FnOnce(E) -> Fault,
    {
        match self {
            Outcome::Ok(v) => Try::Success(v),
            Outcome::Err(e) => Try::Failure(f(e)),
        }
    }

    pub fn into_try(self) -> Try<T>
    where
        E: Error + Send + Sync + 'static,
    {
        self.into_try_with(Fault::from_error)
    }

    /// Split outcomes into their success values and errors, preserving their order.
    pub fn partition<I>(outcomes: I) -> (Vec<T>, Vec<E>)
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        let mut values = vec![];
        let mut errors = vec![];
        for outcome in outcomes {
            match outcome {
                Outcome::Ok(v) => values.push(v),
                Outcome::Err(e) => errors.push(e),
            }
        }
        (values, errors)
    }

    /// Collect the values of a sequence of outcomes, stopping at the first error.
    pub fn sequence<I>(outcomes: I) -> Outcome<Vec<T>, E>
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        outcomes.into_iter().collect()
    }

    /// Apply a fallible function to a sequence of values, stopping at the first error. The function
    /// is not called on any of the values after the one that failed.
    pub fn traverse<A, I, F>(values: I, f: F) -> Outcome<Vec<T>, E>
    where
        I: IntoIterator<Item = A>,
        F: FnMut(A) -> Outcome<T, E>,
    {
        values.into_iter().map(f).collect()
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    pub fn flatten(self) -> Outcome<T, E> {
        self.flat_map(|inner| inner)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => Outcome::Ok(v),
            Err(e) => Outcome::Err(e),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E, C> FromIterator<Outcome<T, E>> for Outcome<C, E>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Outcome::into_result)
            .collect::<Result<C, E>>()
            .into()
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}
