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
use disjunct_errors::{Fault, UsageError, Variant};
use std::error::Error;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::debug;


const REJECTED: &str = "The value did not satisfy the predicate.";

/// The result of a computation that may fail by panicking. The panic is captured as a [`Fault`]
/// in the [`Try::Failure`] variant instead of unwinding into the caller.
///
/// Every combinator that runs caller supplied logic to produce a new container ([`Try::map`],
/// [`Try::flat_map`], [`Try::filter`], [`Try::recover`] and [`Try::recover_with`]) captures a panic
/// raised by that logic in the same way. Functions that leave the container ([`Try::fold`],
/// [`Try::get_or_else_get`]) and the observers ([`Try::peek`], [`Try::on_failure`]) do not.
///
/// Panics can only be captured when the crate is built with `panic = "unwind"` (the default).
#[derive(Clone, Debug, PartialEq)]
pub enum Try<T> {
    Success(T),
    Failure(Fault),
}

fn capture<T, F>(f: F) -> Try<T>
where
    F: FnOnce() -> T,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Try::Success(value),
        Err(payload) => captured(Fault::from_panic(payload)),
    }
}

fn captured<T>(fault: Fault) -> Try<T> {
    debug!(fault = %fault, "Captured a fault raised by a computation.");
    Try::Failure(fault)
}

impl<T> Try<T> {
    /// Evaluate a computation immediately, capturing a panic.
    pub fn of<F>(supplier: F) -> Self
    where
        F: FnOnce() -> T,
    {
        capture(supplier)
    }

    /// Evaluate a fallible computation immediately, capturing a returned error or a panic.
    pub fn of_result<E, F>(supplier: F) -> Self
    where
        E: Error + Send + Sync + 'static,
        F: FnOnce() -> Result<T, E>,
    {
        capture(supplier).flat_map(|result| match result {
            Ok(v) => Try::Success(v),
            Err(e) => captured(Fault::from_error(e)),
        })
    }

    pub fn success(value: T) -> Self {
        Try::Success(value)
    }

    pub fn failure(fault: Fault) -> Self {
        Try::Failure(fault)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Try::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Try::Failure(_))
    }

    pub fn get(self) -> Result<T, UsageError> {
        match self {
            Try::Success(v) => Ok(v),
            Try::Failure(_) => Err(UsageError::illegal_state(Variant::Success, Variant::Failure)),
        }
    }

    pub fn cause(self) -> Result<Fault, UsageError> {
        match self {
            Try::Failure(fault) => Ok(fault),
            Try::Success(_) => Err(UsageError::illegal_state(Variant::Failure, Variant::Success)),
        }
    }

    /// # Panics
    /// If this is a failure.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.get() {
            Ok(v) => v,
            Err(err) => err.raise(),
        }
    }

    pub fn get_or_else(self, fallback: T) -> T {
        match self {
            Try::Success(v) => v,
            Try::Failure(_) => fallback,
        }
    }

    pub fn get_or_else_get<F>(self, f: F) -> T
    where
        F: FnOnce(Fault) -> T,
    {
        match self {
            Try::Success(v) => v,
            Try::Failure(fault) => f(fault),
        }
    }

    pub fn map<U, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Try::Success(v) => capture(move || f(v)),
            Try::Failure(fault) => Try::Failure(fault),
        }
    }

    pub fn flat_map<U, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(T) -> Try<U>,
    {
        match self {
            Try::Success(v) => match capture(move || f(v)) {
                Try::Success(inner) => inner,
                Try::Failure(fault) => Try::Failure(fault),
            },
            Try::Failure(fault) => Try::Failure(fault),
        }
    }

    /// A success that does not satisfy the predicate becomes a failure.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.flat_map(|v| {
            if predicate(&v) {
                Try::Success(v)
            } else {
                Try::Failure(Fault::message(REJECTED))
            }
        })
    }

    pub fn recover<F>(self, f: F) -> Self
    where
        F: FnOnce(Fault) -> T,
    {
        match self {
            Try::Failure(fault) => capture(move || f(fault)),
            success => success,
        }
    }

    pub fn recover_with<F>(self, f: F) -> Self
    where
        F: FnOnce(Fault) -> Try<T>,
    {
        match self {
            Try::Failure(fault) => match capture(move || f(fault)) {
                Try::Success(inner) => inner,
                Try::Failure(fault) => Try::Failure(fault),
            },
            success => success,
        }
    }

    pub fn fold<U, F1, F2>(self, on_failure: F1, on_success: F2) -> U
    where
        F1: FnOnce(Fault) -> U,
        F2: FnOnce(T) -> U,
    {
        match self {
            Try::Success(v) => on_success(v),
            Try::Failure(fault) => on_failure(fault),
        }
    }

    pub fn peek<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Try::Success(v) = &self {
            f(v);
        }
        self
    }

    pub fn on_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&Fault),
    {
        if let Try::Failure(fault) = &self {
            f(fault);
        }
        self
    }

    /// The fault becomes the error.
    pub fn into_outcome(self) -> Outcome<T, Fault> {
        match self {
            Try::Success(v) => Outcome::Ok(v),
            Try::Failure(fault) => Outcome::Err(fault),
        }
    }

    pub fn into_result(self) -> Result<T, Fault> {
        self.into_outcome().into_result()
    }

    /// The fault is discarded.
    pub fn into_option(self) -> Option<T> {
        self.into_result().ok()
    }

    /// The fault is discarded.
    pub fn into_maybe(self) -> Maybe<T> {
        Maybe::from_option(self.into_option())
    }

    pub fn into_either(self) -> Either<Fault, T> {
        Either::from_outcome(self.into_outcome())
    }
}

impl Try<()> {
    /// Run a computation for its effects, capturing a panic.
    pub fn run<F>(f: F) -> Self
    where
        F: FnOnce(),
    {
        capture(f)
    }
}

impl<T> From<Try<T>> for Result<T, Fault> {
    fn from(attempt: Try<T>) -> Self {
        attempt.into_result()
    }
}
