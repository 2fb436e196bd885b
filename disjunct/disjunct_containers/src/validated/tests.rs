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

use crate::trace::init_trace;
use crate::{Either, Maybe, NonEmptyList, Outcome, UsageError, Validated, Variant};
use static_assertions::assert_impl_all;
use std::cell::Cell;

assert_impl_all!(Validated<String, String>: Send, Sync, Clone);

type Checked = Validated<String, &'static str>;

fn errs(errors: &[&'static str]) -> NonEmptyList<&'static str> {
    NonEmptyList::from_vec(errors.to_vec()).expect("At least one error required.")
}

fn ok(s: &str) -> Checked {
    Validated::ok(s.to_string())
}

fn non_empty(field: &'static str, value: &str) -> Checked {
    if value.is_empty() {
        Validated::err(field)
    } else {
        ok(value)
    }
}

fn concat(left: String, right: String) -> String {
    left + &right
}

#[test]
fn variants() {
    assert!(ok("a").is_ok());
    assert!(!ok("a").is_err());
    let failed = Checked::err("e");
    assert!(failed.is_err());
    assert!(!failed.is_ok());
    assert_eq!(failed, Validated::errs(errs(&["e"])));
}

#[test]
fn unwrapping() {
    assert_eq!(ok("a").try_unwrap(), Ok("a".to_string()));
    assert_eq!(
        Checked::err("e").try_unwrap(),
        Err(UsageError::illegal_unwrap(Variant::Ok, Variant::Err))
    );
    assert_eq!(Checked::err("e").try_unwrap_errs(), Ok(errs(&["e"])));
    assert_eq!(
        ok("a").try_unwrap_errs(),
        Err(UsageError::illegal_unwrap(Variant::Err, Variant::Ok))
    );
    assert_eq!(Checked::err("e").unwrap_errs(), errs(&["e"]));
}

#[test]
#[should_panic(expected = "Attempted to unwrap Err from Ok.")]
fn unwrap_errs_of_ok() {
    ok("a").unwrap_errs();
}

#[test]
fn zip_both_ok() {
    assert_eq!(ok("a").zip(ok("b"), concat), ok("ab"));
}

#[test]
fn zip_single_err_propagates() {
    assert_eq!(Checked::err("x").zip(ok("b"), concat), Validated::err("x"));
    assert_eq!(ok("a").zip(Checked::err("y"), concat), Validated::err("y"));
}

#[test]
fn zip_accumulates_in_operand_order() {
    let combined = Checked::err("a").zip(Checked::err("b"), concat);
    assert_eq!(combined.unwrap_errs(), errs(&["a", "b"]));

    let longer = Checked::errs(errs(&["a", "b"])).zip(Checked::errs(errs(&["c", "d"])), concat);
    assert_eq!(longer.unwrap_errs(), errs(&["a", "b", "c", "d"]));
}

#[test]
fn zip_does_not_call_combiner_on_failure() {
    let calls = Cell::new(0);
    let combined = Checked::err("a").zip(ok("b"), |l, r| {
        calls.set(calls.get() + 1);
        concat(l, r)
    });
    assert!(combined.is_err());
    assert_eq!(calls.get(), 0);
}

#[test]
fn zip3() {
    let all = ok("a").zip3(ok("b"), ok("c"), |a, b, c| a + &b + &c);
    assert_eq!(all, ok("abc"));
    let failed = Checked::err("x").zip3(ok("b"), Checked::err("z"), |a, b, c| a + &b + &c);
    assert_eq!(failed.unwrap_errs(), errs(&["x", "z"]));
}

#[test]
fn ap_applies_function() {
    let length = Validated::<fn(String) -> usize, &str>::ok(|s: String| s.len());
    assert_eq!(ok("abc").ap(length), Validated::ok(3));
}

#[test]
fn ap_chains_accumulate() {
    let curried = Validated::ok(|first: String| move |last: String| format!("{} {}", first, last));

    let person = ok("Smith").ap(ok("Jane").ap(curried));
    assert_eq!(person, ok("Jane Smith"));

    let curried = Validated::ok(|first: String| move |last: String| format!("{} {}", first, last));
    let invalid = non_empty("last", "").ap(non_empty("first", "").ap(curried));
    assert_eq!(invalid.unwrap_errs(), errs(&["last", "first"]));
}

#[test]
fn ap_errors_of_receiver_come_first() {
    let failed_fn = Validated::<fn(String) -> String, &str>::err("function");
    let combined = Checked::err("value").ap(failed_fn);
    assert_eq!(combined.unwrap_errs(), errs(&["value", "function"]));
}

#[test]
fn with_context() {
    let failed = Checked::errs(errs(&["a", "b"])).with_context(|| "ctx");
    assert_eq!(failed.unwrap_errs(), errs(&["ctx", "a", "b"]));
    assert_eq!(ok("v").with_context(|| panic!("Not expected.")), ok("v"));
}

#[test]
fn map_and_map_err() {
    assert_eq!(ok("a").map(|s| s.len()), Validated::ok(1));
    assert_eq!(Checked::err("e").map(|s| s.len()), Validated::err("e"));
    assert_eq!(
        Checked::errs(errs(&["a", "bb"])).map_err(|e| e.len()),
        Validated::errs(NonEmptyList::new(1, vec![2]))
    );
    assert_eq!(
        Checked::errs(errs(&["a", "bb"])).map_errs(|es| es.reverse()),
        Validated::errs(errs(&["bb", "a"]))
    );
}

#[test]
fn flat_map_short_circuits() {
    let calls = Cell::new(0);
    let failed = Checked::err("e").flat_map(|s| {
        calls.set(calls.get() + 1);
        Checked::ok(s)
    });
    assert_eq!(failed, Validated::err("e"));
    assert_eq!(calls.get(), 0);
    assert_eq!(ok("a").flat_map(|s| Checked::ok(s + "b")), ok("ab"));
}

#[test]
fn ensure() {
    assert_eq!(ok("abc").ensure(|s| s.len() > 2, |_| "short"), ok("abc"));
    assert_eq!(
        ok("a").ensure(|s| s.len() > 2, |_| "short"),
        Validated::err("short")
    );
    assert_eq!(
        Checked::err("e").ensure(|_| false, |_| "short"),
        Validated::err("e")
    );
}

#[test]
fn fold_peek_and_get_or_else() {
    assert_eq!(ok("ab").fold(|es| es.len(), |s| s.len() * 10), 20);
    assert_eq!(
        Checked::errs(errs(&["a", "b", "c"])).fold(|es| es.len(), |s| s.len() * 10),
        3
    );
    let seen = Cell::new(0);
    assert_eq!(ok("abc").peek(|s| seen.set(s.len())), ok("abc"));
    assert_eq!(seen.get(), 3);
    assert_eq!(ok("a").get_or_else("z".to_string()), "a");
    assert_eq!(Checked::err("e").get_or_else("z".to_string()), "z");
    assert_eq!(
        Checked::errs(errs(&["a", "b"])).get_or_else_get(|es| es.len().to_string()),
        "2"
    );
}

#[test]
fn conversions_out() {
    assert_eq!(ok("a").into_outcome(), Outcome::ok("a".to_string()));
    assert_eq!(
        Checked::errs(errs(&["a", "b"])).into_outcome(),
        Outcome::err(errs(&["a", "b"]))
    );
    assert_eq!(ok("a").into_either(), Either::right("a".to_string()));
    assert_eq!(Checked::err("e").into_either(), Either::left(errs(&["e"])));
    assert_eq!(ok("a").into_maybe(), Maybe::some("a".to_string()));
    assert_eq!(Checked::err("e").into_maybe(), Maybe::none());
    assert_eq!(Checked::err("e").into_option(), None);
    assert_eq!(Checked::err("e").into_result(), Err(errs(&["e"])));
}

#[test]
fn conversions_in() {
    assert_eq!(
        Validated::from_outcome(Outcome::<i32, &str>::err("e"))
            .into_outcome()
            .unwrap_err(),
        errs(&["e"])
    );
    assert_eq!(
        Validated::<i32, &str>::from(Outcome::ok(1)),
        Validated::ok(1)
    );
    assert_eq!(
        Validated::from_either(Either::<&str, i32>::left("l")),
        Validated::err("l")
    );
    assert_eq!(
        Validated::from_either(Either::<&str, i32>::right(1)),
        Validated::ok(1)
    );
    assert_eq!(
        Validated::from_maybe(Maybe::<i32>::none(), || "missing"),
        Validated::err("missing")
    );
    assert_eq!(
        Validated::from_maybe(Maybe::some(2), || -> &'static str { panic!("Not expected.") }),
        Validated::ok(2)
    );
}

#[test]
fn sequence_accumulates_all_errors() {
    init_trace(&["disjunct_containers=trace"]);
    let failed = Validated::sequence(vec![ok("a"), Checked::err("x"), Checked::err("y")]);
    assert_eq!(failed.unwrap_errs(), errs(&["x", "y"]));

    let all_ok = Validated::sequence(vec![ok("a"), ok("b")]);
    assert_eq!(
        all_ok,
        Validated::ok(vec!["a".to_string(), "b".to_string()])
    );

    let empty: Validated<Vec<String>, &str> = Validated::sequence(Vec::<Checked>::new());
    assert_eq!(empty, Validated::ok(vec![]));
}

#[test]
fn traverse_visits_every_value() {
    let calls = Cell::new(0);
    let result = Validated::traverse(vec!["a", "", "b", ""], |s| {
        calls.set(calls.get() + 1);
        non_empty("blank", s)
    });
    assert_eq!(result.unwrap_errs(), errs(&["blank", "blank"]));
    assert_eq!(calls.get(), 4);

    let all_ok = Validated::traverse(vec!["a", "b"], |s| non_empty("blank", s));
    assert_eq!(
        all_ok,
        Validated::ok(vec!["a".to_string(), "b".to_string()])
    );
}

#[test]
fn partition() {
    let (values, errors) = Validated::partition(vec![
        ok("a"),
        Checked::errs(errs(&["x", "y"])),
        ok("b"),
        Checked::err("z"),
    ]);
    assert_eq!(values, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(errors, vec!["x", "y", "z"]);
}

#[test]
fn combine_all() {
    let combined = Validated::combine_all(vec![ok("a"), ok("b")], concat);
    assert_eq!(combined.unwrap(), "ab");

    let failed = Validated::combine_all(
        vec![ok("a"), Checked::err("x"), ok("b"), Checked::err("y")],
        concat,
    );
    assert_eq!(failed.unwrap_errs(), errs(&["x", "y"]));

    let empty = Validated::combine_all(Vec::<Checked>::new(), concat);
    assert_eq!(empty, ok(""));
}

#[test]
fn combine_all_monoid() {
    let summed = Validated::<u32, &str>::combine_all_monoid(vec![
        Validated::ok(1),
        Validated::ok(2),
        Validated::ok(3),
    ]);
    assert_eq!(summed, Validated::ok(6));

    let empty = Validated::<u32, &str>::combine_all_monoid(vec![]);
    assert_eq!(empty, Validated::ok(0));

    let failed = Validated::<u32, &str>::combine_all_monoid(vec![
        Validated::ok(1),
        Validated::err("e"),
    ]);
    assert_eq!(failed, Validated::err("e"));
}

#[test]
fn bulk_operations_scale_with_many_failures() {
    const N: u32 = 50_000;

    let failed = Validated::sequence((0..N).map(Validated::<u32, u32>::err));
    let errors = failed.unwrap_errs();
    assert_eq!(errors.len(), N as usize);
    assert_eq!(errors.head(), &0);
    assert_eq!(errors.last(), &(N - 1));
    assert!(errors.iter().copied().eq(0..N));

    let traversed = Validated::traverse(0..N, |n| {
        if n % 2 == 0 {
            Validated::ok(n)
        } else {
            Validated::errs(NonEmptyList::new(n, vec![n]))
        }
    });
    assert_eq!(traversed.unwrap_errs().len(), N as usize);

    let combined = Validated::<u32, u32>::combine_all_monoid((0..N).map(Validated::err));
    assert_eq!(combined.unwrap_errs().len(), N as usize);
}

#[test]
fn collect_accumulates() {
    let collected: Validated<Vec<String>, &str> = vec!["", "a", ""]
        .into_iter()
        .map(|s| non_empty("blank", s))
        .collect();
    assert_eq!(collected.unwrap_errs(), errs(&["blank", "blank"]));

    let joined: Validated<String, &str> = vec![ok("a"), ok("b")].into_iter().collect();
    assert_eq!(joined, ok("ab"));
}
