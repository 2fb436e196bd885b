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

use crate::{Either, Maybe, Outcome};
use disjunct_algebra::{Monoid, Semigroup};
use disjunct_errors::{UsageError, Variant};
use disjunct_list::NonEmptyList;
use tracing::trace;

#[cfg(test)]
mod tests;

/// The result of a validation: either a value or a non-empty list of errors.
///
/// Unlike [`Outcome`], combining validations never stops at the first failure. [`Validated::zip`]
/// (and everything built on it) evaluates both operands and, when both have failed, concatenates
/// their errors with those of the left operand first. The bulk operations ([`Validated::sequence`],
/// [`Validated::traverse`], [`Validated::partition`] and [`Validated::combine_all`]) likewise
/// collect the errors of every element in input order.
///
/// [`Validated::flat_map`] is the exception: the next validation depends on the value of the
/// previous one so it cannot run after a failure.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Validated<T, E> {
    Ok(T),
    Err(NonEmptyList<E>),
}

/// Collects the errors of a sequence of validations. The error list is only built once all of the
/// elements have been recorded.
struct ErrorAccumulator<E> {
    errors: Vec<E>,
    elements: usize,
}

impl<E> Default for ErrorAccumulator<E> {
    fn default() -> Self {
        ErrorAccumulator {
            errors: vec![],
            elements: 0,
        }
    }
}

impl<E: Clone> ErrorAccumulator<E> {
    /// Record a validation, returning its value if it succeeded.
    fn record<T>(&mut self, validated: Validated<T, E>) -> Option<T> {
        self.elements += 1;
        match validated {
            Validated::Ok(v) => Some(v),
            Validated::Err(errors) => {
                self.errors.extend(errors);
                None
            }
        }
    }

    fn has_failed(&self) -> bool {
        !self.errors.is_empty()
    }

    fn finish<T>(self, value: T) -> Validated<T, E> {
        let ErrorAccumulator { errors, elements } = self;
        match NonEmptyList::from_vec(errors) {
            Some(errors) => {
                trace!(
                    elements,
                    errors = errors.len(),
                    "Accumulated errors from a sequence of validations."
                );
                Validated::Err(errors)
            }
            None => Validated::Ok(value),
        }
    }
}

impl<T, E> Validated<T, E> {
    pub fn ok(value: T) -> Self {
        Validated::Ok(value)
    }

    /// A failure with a single error.
    pub fn err(error: E) -> Self {
        Validated::Err(NonEmptyList::singleton(error))
    }

    pub fn errs(errors: NonEmptyList<E>) -> Self {
        Validated::Err(errors)
    }

    pub fn from_outcome(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(v) => Validated::Ok(v),
            Outcome::Err(e) => Validated::err(e),
        }
    }

    /// The right side is the value and the left side the error.
    pub fn from_either(either: Either<E, T>) -> Self {
        Validated::from_outcome(either.into_outcome())
    }

    pub fn from_maybe<F>(maybe: Maybe<T>, error: F) -> Self
    where
        F: FnOnce() -> E,
    {
        Validated::from_outcome(maybe.into_outcome_with(error))
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Validated::Ok(_))
    }

    pub fn is_err(&self) -> bool {
        matches!(self, Validated::Err(_))
    }

    pub fn try_unwrap(self) -> Result<T, UsageError> {
        match self {
            Validated::Ok(v) => Ok(v),
            Validated::Err(_) => Err(UsageError::illegal_unwrap(Variant::Ok, Variant::Err)),
        }
    }

    pub fn try_unwrap_errs(self) -> Result<NonEmptyList<E>, UsageError> {
        match self {
            Validated::Err(errors) => Ok(errors),
            Validated::Ok(_) => Err(UsageError::illegal_unwrap(Variant::Err, Variant::Ok)),
        }
    }

    /// # Panics
    /// If the validation failed.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(v) => v,
            Err(err) => err.raise(),
        }
    }

    /// # Panics
    /// If the validation succeeded.
    #[track_caller]
    pub fn unwrap_errs(self) -> NonEmptyList<E> {
        match self.try_unwrap_errs() {
            Ok(errors) => errors,
            Err(err) => err.raise(),
        }
    }

    pub fn get_or_else(self, fallback: T) -> T {
        match self {
            Validated::Ok(v) => v,
            Validated::Err(_) => fallback,
        }
    }

    pub fn get_or_else_get<F>(self, f: F) -> T
    where
        F: FnOnce(NonEmptyList<E>) -> T,
    {
        match self {
            Validated::Ok(v) => v,
            Validated::Err(errors) => f(errors),
        }
    }

    pub fn map<U, F>(self, f: F) -> Validated<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validated::Ok(v) => Validated::Ok(f(v)),
            Validated::Err(errors) => Validated::Err(errors),
        }
    }

    /// Transform each of the errors.
    pub fn map_err<G, F>(self, f: F) -> Validated<T, G>
    where
        F: FnMut(&E) -> G,
    {
        self.map_errs(|errors| errors.map(f))
    }

    /// Transform the list of errors as a whole.
    pub fn map_errs<G, F>(self, f: F) -> Validated<T, G>
    where
        F: FnOnce(NonEmptyList<E>) -> NonEmptyList<G>,
    {
        match self {
            Validated::Ok(v) => Validated::Ok(v),
            Validated::Err(errors) => Validated::Err(f(errors)),
        }
    }

    /// Chain a validation that depends on the value of this one. This stops at the first failure.
    pub fn flat_map<U, F>(self, f: F) -> Validated<U, E>
    where
        F: FnOnce(T) -> Validated<U, E>,
    {
        match self {
            Validated::Ok(v) => f(v),
            Validated::Err(errors) => Validated::Err(errors),
        }
    }

    /// Fail with the produced error if the value does not satisfy the predicate.
    pub fn ensure<P, F>(self, predicate: P, error: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> E,
    {
        match self {
            Validated::Ok(v) if !predicate(&v) => Validated::err(error(&v)),
            other => other,
        }
    }

    pub fn fold<U, F1, F2>(self, on_err: F1, on_ok: F2) -> U
    where
        F1: FnOnce(NonEmptyList<E>) -> U,
        F2: FnOnce(T) -> U,
    {
        match self {
            Validated::Ok(v) => on_ok(v),
            Validated::Err(errors) => on_err(errors),
        }
    }

    pub fn peek<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Validated::Ok(v) = &self {
            f(v);
        }
        self
    }

    /// The error side holds every accumulated error.
    pub fn into_outcome(self) -> Outcome<T, NonEmptyList<E>> {
        match self {
            Validated::Ok(v) => Outcome::Ok(v),
            Validated::Err(errors) => Outcome::Err(errors),
        }
    }

    pub fn into_result(self) -> Result<T, NonEmptyList<E>> {
        self.into_outcome().into_result()
    }

    pub fn into_either(self) -> Either<NonEmptyList<E>, T> {
        Either::from_outcome(self.into_outcome())
    }

    /// The errors are discarded.
    pub fn into_option(self) -> Option<T> {
        self.into_result().ok()
    }

    /// The errors are discarded.
    pub fn into_maybe(self) -> Maybe<T> {
        Maybe::from_option(self.into_option())
    }
}

impl<T, E: Clone> Validated<T, E> {
    /// Combine two validations. If both succeeded, the combiner is applied to their values.
    /// Otherwise the errors of both are returned, those of this validation first.
    pub fn zip<U, V, F>(self, other: Validated<U, E>, combiner: F) -> Validated<V, E>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (Validated::Ok(left), Validated::Ok(right)) => Validated::Ok(combiner(left, right)),
            (Validated::Err(errors), Validated::Ok(_))
            | (Validated::Ok(_), Validated::Err(errors)) => Validated::Err(errors),
            (Validated::Err(left), Validated::Err(right)) => {
                Validated::Err(Semigroup::op(left, right))
            }
        }
    }

    pub fn zip3<U, W, V, F>(
        self,
        second: Validated<U, E>,
        third: Validated<W, E>,
        combiner: F,
    ) -> Validated<V, E>
    where
        F: FnOnce(T, U, W) -> V,
    {
        self.zip(second, |a, b| (a, b))
            .zip(third, |(a, b), c| combiner(a, b, c))
    }

    /// Apply a validated function to the value of this validation. Errors of this validation come
    /// before those of the function. Curried functions can be applied to any number of arguments by
    /// chaining.
    pub fn ap<U, F>(self, function: Validated<F, E>) -> Validated<U, E>
    where
        F: FnOnce(T) -> U,
    {
        self.zip(function, |value, f| f(value))
    }

    /// Add a contextual error in front of the existing errors. No effect on a success.
    pub fn with_context<F>(self, context: F) -> Self
    where
        F: FnOnce() -> E,
    {
        self.map_errs(|errors| errors.prepend(context()))
    }

    /// Split validations into their values and all of their errors, preserving order.
    pub fn partition<I>(items: I) -> (Vec<T>, Vec<E>)
    where
        I: IntoIterator<Item = Validated<T, E>>,
    {
        let mut values = vec![];
        let mut errors = vec![];
        for item in items {
            match item {
                Validated::Ok(v) => values.push(v),
                Validated::Err(errs) => errors.extend(errs),
            }
        }
        (values, errors)
    }

    /// Collect the values of all of the validations. Fails with the errors of every failed element,
    /// in input order, if any failed.
    pub fn sequence<I>(items: I) -> Validated<Vec<T>, E>
    where
        I: IntoIterator<Item = Validated<T, E>>,
    {
        items.into_iter().collect()
    }

    /// Validate every value. The function is applied to all values, even after a failure.
    pub fn traverse<A, I, F>(values: I, f: F) -> Validated<Vec<T>, E>
    where
        I: IntoIterator<Item = A>,
        F: FnMut(A) -> Validated<T, E>,
    {
        values.into_iter().map(f).collect()
    }

    /// Fold the values of the successful elements, from left to right, while collecting the errors
    /// of the failed elements. The folded value is only returned if no element failed. An empty
    /// input produces the default value.
    pub fn combine_all<I, F>(items: I, combiner: F) -> Validated<T, E>
    where
        T: Default,
        I: IntoIterator<Item = Validated<T, E>>,
        F: FnMut(T, T) -> T,
    {
        let (value, accumulator) = fold_values(items, None, combiner);
        accumulator.finish(value.unwrap_or_default())
    }

    /// As [`Validated::combine_all`], using the monoid of the value type.
    pub fn combine_all_monoid<I>(items: I) -> Validated<T, E>
    where
        T: Monoid,
        I: IntoIterator<Item = Validated<T, E>>,
    {
        let (value, accumulator) = fold_values(items, Some(T::zero()), Semigroup::op);
        accumulator.finish(value.unwrap_or_else(T::zero))
    }
}

fn fold_values<T, E, I, F>(
    items: I,
    init: Option<T>,
    mut combiner: F,
) -> (Option<T>, ErrorAccumulator<E>)
where
    E: Clone,
    I: IntoIterator<Item = Validated<T, E>>,
    F: FnMut(T, T) -> T,
{
    let mut accumulator = ErrorAccumulator::default();
    let mut acc = init;
    for item in items {
        if let Some(value) = accumulator.record(item) {
            acc = Some(match acc {
                Some(prev) => combiner(prev, value),
                None => value,
            });
        }
    }
    (acc, accumulator)
}

impl<T, E: Clone, C> FromIterator<Validated<T, E>> for Validated<C, E>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Validated<T, E>>>(iter: I) -> Self {
        let mut accumulator = ErrorAccumulator::default();
        let mut values = vec![];
        for item in iter {
            if let Some(value) = accumulator.record(item) {
                if !accumulator.has_failed() {
                    values.push(value);
                }
            }
        }
        accumulator.finish(values).map(|values| values.into_iter().collect())
    }
}

impl<T, E> From<Outcome<T, E>> for Validated<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        Validated::from_outcome(outcome)
    }
}

impl<T, E> From<Validated<T, E>> for Outcome<T, NonEmptyList<E>> {
    fn from(validated: Validated<T, E>) -> Self {
        validated.into_outcome()
    }
}
