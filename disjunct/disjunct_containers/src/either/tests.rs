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

use crate::{Either, Fault, Maybe, Outcome, Try, UsageError, Validated, Variant};
use static_assertions::assert_impl_all;
use std::cell::Cell;

assert_impl_all!(Either<String, Vec<u8>>: Send, Sync, Clone);

type Choice = Either<&'static str, i32>;

#[test]
fn sides() {
    let left: Choice = Either::left("l");
    let right: Choice = Either::right(1);
    assert!(left.is_left());
    assert!(!left.is_right());
    assert!(right.is_right());
    assert!(!right.is_left());
    assert_eq!(left.as_ref(), Either::Left(&"l"));
    assert_eq!(right.as_ref(), Either::Right(&1));
}

#[test]
fn unwrapping() {
    assert_eq!(Choice::left("l").try_unwrap_left(), Ok("l"));
    assert_eq!(Choice::right(1).try_unwrap_right(), Ok(1));
    assert_eq!(
        Choice::right(1).try_unwrap_left(),
        Err(UsageError::illegal_unwrap(Variant::Left, Variant::Right))
    );
    assert_eq!(
        Choice::left("l").try_unwrap_right(),
        Err(UsageError::illegal_unwrap(Variant::Right, Variant::Left))
    );
    assert_eq!(Choice::left("l").unwrap_left(), "l");
    assert_eq!(Choice::right(1).unwrap_right(), 1);
}

#[test]
#[should_panic(expected = "Attempted to unwrap Right from Left.")]
fn unwrap_right_of_left() {
    Choice::left("l").unwrap_right();
}

#[test]
fn get_or_else() {
    assert_eq!(Choice::right(1).get_or_else(0), 1);
    assert_eq!(Choice::left("l").get_or_else(0), 0);
    assert_eq!(Choice::left("abc").get_or_else_get(|l| l.len() as i32), 3);
}

#[test]
fn mapping() {
    assert_eq!(Choice::right(1).map(|n| n + 1), Either::right(2));
    assert_eq!(Choice::left("l").map(|n| n + 1), Either::left("l"));
    assert_eq!(Choice::left("ll").map_left(str::len), Either::left(2));
    assert_eq!(Choice::right(1).map_left(str::len), Either::right(1));
    assert_eq!(
        Choice::left("ll").map_both(str::len, |n| n * 2),
        Either::<usize, i32>::left(2)
    );
    assert_eq!(
        Choice::right(4).map_both(str::len, |n| n * 2),
        Either::<usize, i32>::right(8)
    );
}

#[test]
fn flat_mapping() {
    let calls = Cell::new(0);
    let skipped = Choice::left("l").flat_map(|n| {
        calls.set(calls.get() + 1);
        Choice::right(n)
    });
    assert_eq!(skipped, Either::left("l"));
    assert_eq!(calls.get(), 0);
    assert_eq!(
        Choice::right(1).flat_map(|_| Choice::left("x")),
        Either::left("x")
    );
    assert_eq!(
        Choice::left("l").flat_map_left(|l| Either::<usize, i32>::left(l.len())),
        Either::left(1)
    );
    assert_eq!(
        Choice::left("l").flat_map_left(|_| Either::<usize, i32>::right(7)),
        Either::right(7)
    );
    assert_eq!(
        Choice::right(3).flat_map_left(|_| Either::<usize, i32>::right(7)),
        Either::right(3)
    );
}

#[test]
fn fold_and_swap() {
    assert_eq!(Choice::left("abc").fold(str::len, |n| n as usize), 3);
    assert_eq!(Choice::right(5).fold(str::len, |n| n as usize), 5);
    assert_eq!(Choice::left("l").swap(), Either::right("l"));
    assert_eq!(Choice::right(1).swap(), Either::left(1));
    assert_eq!(Choice::right(1).swap().swap(), Choice::right(1));
}

#[test]
fn hooks_leave_container_unchanged() {
    let seen = Cell::new(0);
    let right = Choice::right(3)
        .peek(|n| seen.set(*n))
        .peek_left(|_| seen.set(-1));
    assert_eq!(right, Either::right(3));
    assert_eq!(seen.get(), 3);

    let left = Choice::left("abcd")
        .peek(|n| seen.set(*n))
        .peek_left(|l| seen.set(l.len() as i32));
    assert_eq!(left, Either::left("abcd"));
    assert_eq!(seen.get(), 4);

    let tapped = Choice::right(9).tap_both(|_| seen.set(-1), |n| seen.set(*n));
    assert_eq!(tapped, Either::right(9));
    assert_eq!(seen.get(), 9);
}

#[test]
fn outcome_conversions() {
    assert_eq!(Choice::right(1).into_outcome(), Outcome::ok(1));
    assert_eq!(Choice::left("l").into_outcome(), Outcome::err("l"));
    assert_eq!(
        Either::from_outcome(Outcome::<i32, &str>::ok(1)),
        Choice::right(1)
    );
    assert_eq!(Choice::from(Outcome::err("e")), Choice::left("e"));
    assert_eq!(
        Outcome::<i32, &str>::from(Choice::right(2)),
        Outcome::<i32, &str>::ok(2)
    );
    assert_eq!(
        Either::from_outcome(Outcome::<i32, &str>::ok(5))
            .into_outcome()
            .unwrap(),
        5
    );
}

#[test]
fn other_conversions() {
    assert_eq!(Choice::right(1).into_maybe(), Maybe::some(1));
    assert_eq!(Choice::left("l").into_maybe(), Maybe::none());
    assert_eq!(Choice::left("l").into_maybe_left(), Maybe::some("l"));
    assert_eq!(Choice::right(1).into_maybe_left(), Maybe::none());
    assert_eq!(Choice::right(1).into_validated(), Validated::ok(1));
    assert_eq!(Choice::left("l").into_validated(), Validated::err("l"));
    assert_eq!(
        Choice::left("l").into_try_with(Fault::message),
        Try::failure(Fault::message("l"))
    );
    assert_eq!(
        Choice::right(1).into_try_with(Fault::message),
        Try::success(1)
    );
}
