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

use crate::{Monoid, Semigroup, Zero};

#[test]
fn vec_op_keeps_left_elements_first() {
    let combined = Semigroup::op(vec![1, 2], vec![3]);
    assert_eq!(combined, vec![1, 2, 3]);
}

#[test]
fn string_op_concatenates() {
    let mut s = "ab".to_string();
    s.op_in_place("cd".to_string());
    assert_eq!(s, "abcd");
}

#[test]
fn option_op() {
    assert_eq!(Semigroup::op(Some(1), Some(2)), Some(3));
    assert_eq!(Semigroup::op(Some(1), None), Some(1));
    assert_eq!(Semigroup::op(None, Some(2)), Some(2));
    assert_eq!(Semigroup::op(None::<i32>, None), None);
}

#[test]
fn op_all_of_empty_is_none() {
    assert_eq!(<i32 as Semigroup>::op_all(vec![]), None);
    assert_eq!(<i32 as Semigroup>::op_all(vec![1, 2, 3]), Some(6));
}

#[test]
fn concat_all_starts_from_zero() {
    assert_eq!(String::concat_all(Vec::<String>::new()), "");
    assert!(String::zero().is_zero());
    assert_eq!(
        String::concat_all(vec!["a".to_string(), "b".to_string()]),
        "ab"
    );
    assert_eq!(u64::concat_all(vec![1, 2, 3]), 6);
}
