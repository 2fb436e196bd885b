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

use crate::{Either, Outcome, Try, Validated};
use disjunct_errors::{Fault, UsageError};


/// An optional value: either [`Maybe::Some`] holding a value or [`Maybe::None`].
///
/// Presence is tracked independently of the payload. A payload that is itself absent, such as
/// `Maybe::Some(None::<i32>)`, is a present value and is distinct from `Maybe::None`;
/// [`Maybe::normalize`] folds the former into the latter.
///
/// Two `None` values of the same payload type are always equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Maybe<T> {
    None,
    Some(T),
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::None
    }
}

impl<T> Maybe<T> {
    pub fn some(value: T) -> Self {
        Maybe::Some(value)
    }

    pub fn none() -> Self {
        Maybe::None
    }

    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Maybe::Some(v),
            None => Maybe::None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Maybe::None)
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Some(v) => Maybe::Some(v),
            Maybe::None => Maybe::None,
        }
    }

    /// Take the value, failing if it is absent.
    pub fn get(self) -> Result<T, UsageError> {
        match self {
            Maybe::Some(v) => Ok(v),
            Maybe::None => Err(UsageError::NoSuchElement),
        }
    }

    /// Take the value.
    ///
    /// # Panics
    /// If the value is absent.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.get() {
            Ok(v) => v,
            Err(err) => err.raise(),
        }
    }

    pub fn get_or_else(self, fallback: T) -> T {
        match self {
            Maybe::Some(v) => v,
            Maybe::None => fallback,
        }
    }

    pub fn get_or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Some(v) => v,
            Maybe::None => supplier(),
        }
    }

    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(v) => Maybe::Some(f(v)),
            Maybe::None => Maybe::None,
        }
    }

    pub fn flat_map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Some(v) => f(v),
            Maybe::None => Maybe::None,
        }
    }

    /// Keep the value only if it satisfies the predicate.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Some(v) if predicate(&v) => Maybe::Some(v),
            _ => Maybe::None,
        }
    }

    /// Keep the value only if it does not satisfy the predicate.
    pub fn filter_not<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.filter(|v| !predicate(v))
    }

    pub fn fold<U, E, F>(self, if_empty: E, if_present: F) -> U
    where
        E: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(v) => if_present(v),
            Maybe::None => if_empty(),
        }
    }

    pub fn or_else(self, other: Maybe<T>) -> Self {
        match self {
            Maybe::None => other,
            present => present,
        }
    }

    pub fn or_else_get<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Maybe<T>,
    {
        match self {
            Maybe::None => supplier(),
            present => present,
        }
    }

    /// Observe the value, if present, without changing the container.
    pub fn peek<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        self.if_present(f);
        self
    }

    pub fn if_present<F>(&self, f: F)
    where
        F: FnOnce(&T),
    {
        if let Maybe::Some(v) = self {
            f(v);
        }
    }

    pub fn if_present_or_else<F, G>(&self, f: F, otherwise: G)
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        match self {
            Maybe::Some(v) => f(v),
            Maybe::None => otherwise(),
        }
    }

    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Some(v) => predicate(v),
            Maybe::None => false,
        }
    }

    /// True if there is no value or the value satisfies the predicate.
    pub fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Some(v) => predicate(v),
            Maybe::None => true,
        }
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.exists(|v| v == value)
    }

    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Maybe::Some(left), Maybe::Some(right)) => Maybe::Some((left, right)),
            _ => Maybe::None,
        }
    }

    /// An iterator over the zero or one values of the container. It can be requested any number of
    /// times.
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Some(v) => Some(v),
            Maybe::None => None,
        }
    }

    pub fn into_outcome<E>(self, error: E) -> Outcome<T, E> {
        self.into_outcome_with(|| error)
    }

    pub fn into_outcome_with<E, F>(self, error: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Maybe::Some(v) => Outcome::Ok(v),
            Maybe::None => Outcome::Err(error()),
        }
    }

    /// A present value becomes [`Either::Right`].
    pub fn into_either<L, F>(self, left: F) -> Either<L, T>
    where
        F: FnOnce() -> L,
    {
        match self {
            Maybe::Some(v) => Either::Right(v),
            Maybe::None => Either::Left(left()),
        }
    }

    pub fn into_validated<E, F>(self, error: F) -> Validated<T, E>
    where
        F: FnOnce() -> E,
    {
        Validated::from_maybe(self, error)
    }

    pub fn into_try<F>(self, fault: F) -> Try<T>
    where
        F: FnOnce() -> Fault,
    {
        match self {
            Maybe::Some(v) => Try::Success(v),
            Maybe::None => Try::Failure(fault()),
        }
    }
}

impl<T> Maybe<Option<T>> {
    /// A present value with an absent payload becomes [`Maybe::None`].
    pub fn normalize(self) -> Maybe<T> {
        self.flat_map(Maybe::from_option)
    }
}

impl<T> Maybe<Maybe<T>> {
    pub fn flatten(self) -> Maybe<T> {
        self.flat_map(|inner| inner)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Maybe::from_option(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
