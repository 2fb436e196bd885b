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

use crate::PersistentList;
use disjunct_algebra::Semigroup;
use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};
use std::hash::Hash;
use std::iter::{once, Chain, Once};


/// A [`PersistentList`] that is guaranteed to contain at least one element. The first element is
/// held separately so that it can always be accessed without a check.
///
/// Constructing a non-empty list from a source that may be empty never fails; it produces nothing
/// instead (see [`NonEmptyList::from_vec`] and [`NonEmptyList::from_list`]).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NonEmptyList<T> {
    head: T,
    tail: PersistentList<T>,
}

pub type Iter<'a, T> = Chain<Once<&'a T>, std::slice::Iter<'a, T>>;

impl<T> NonEmptyList<T> {
    pub fn new<I>(head: T, tail: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        NonEmptyList {
            head,
            tail: tail.into_iter().collect(),
        }
    }

    pub fn singleton(head: T) -> Self {
        NonEmptyList {
            head,
            tail: PersistentList::new(),
        }
    }

    pub fn from_vec(elements: Vec<T>) -> Option<Self> {
        NonEmptyList::from_iter_opt(elements)
    }

    /// Collect the elements of an iterator. Nothing if the iterator is empty.
    pub fn from_iter_opt<I>(elements: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut it = elements.into_iter();
        let head = it.next()?;
        Some(NonEmptyList::new(head, it))
    }

    pub fn head(&self) -> &T {
        &self.head
    }

    pub fn tail(&self) -> &PersistentList<T> {
        &self.tail
    }

    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.head)
    }

    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// Always false. Provided for consistency with other collections.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        match index {
            0 => Some(&self.head),
            n => self.tail.get(n - 1),
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        once(&self.head).chain(self.tail.iter())
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.head == *value || self.tail.contains(value)
    }

    pub fn map<U, F>(&self, mut f: F) -> NonEmptyList<U>
    where
        F: FnMut(&T) -> U,
    {
        let head = f(&self.head);
        NonEmptyList {
            head,
            tail: self.tail.map(f),
        }
    }

    pub fn fold<B, F>(&self, init: B, f: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(init, f)
    }
}

impl<T: Clone> NonEmptyList<T> {
    /// Nothing if the list is empty.
    pub fn from_list(list: &PersistentList<T>) -> Option<Self> {
        let head = list.head()?.clone();
        let tail = list.drop(1);
        Some(NonEmptyList { head, tail })
    }

    pub fn append(&self, value: T) -> Self {
        NonEmptyList {
            head: self.head.clone(),
            tail: self.tail.append(value),
        }
    }

    pub fn prepend(&self, value: T) -> Self {
        NonEmptyList {
            head: value,
            tail: self.tail.prepend(self.head.clone()),
        }
    }

    pub fn concat(&self, other: &NonEmptyList<T>) -> Self {
        let tail = self.tail.iter().chain(other.iter()).cloned().collect();
        NonEmptyList {
            head: self.head.clone(),
            tail,
        }
    }

    pub fn concat_list(&self, other: &PersistentList<T>) -> Self {
        NonEmptyList {
            head: self.head.clone(),
            tail: self.tail.concat(other),
        }
    }

    pub fn flat_map<U, F>(&self, mut f: F) -> NonEmptyList<U>
    where
        U: Clone,
        F: FnMut(&T) -> NonEmptyList<U>,
    {
        let NonEmptyList { head, tail } = f(&self.head);
        let mut rest = tail.to_vec();
        for value in self.tail.iter() {
            rest.extend(f(value));
        }
        NonEmptyList {
            head,
            tail: PersistentList::from_vec(rest),
        }
    }

    pub fn filter<F>(&self, predicate: F) -> PersistentList<T>
    where
        F: FnMut(&T) -> bool,
    {
        self.to_list().filter(predicate)
    }

    /// The first `n` elements, or all of them if there are fewer.
    pub fn take(&self, n: usize) -> PersistentList<T> {
        self.to_list().take(n)
    }

    /// All but the first `n` elements. Empty if there are no more than `n`.
    pub fn drop(&self, n: usize) -> PersistentList<T> {
        match n {
            0 => self.to_list(),
            n => self.tail.drop(n - 1),
        }
    }

    pub fn take_while<F>(&self, predicate: F) -> PersistentList<T>
    where
        F: FnMut(&T) -> bool,
    {
        self.to_list().take_while(predicate)
    }

    pub fn drop_while<F>(&self, predicate: F) -> PersistentList<T>
    where
        F: FnMut(&T) -> bool,
    {
        self.to_list().drop_while(predicate)
    }

    /// Combine the elements from left to right, starting with the first element.
    pub fn reduce<F>(&self, f: F) -> T
    where
        F: FnMut(T, &T) -> T,
    {
        self.tail.fold(self.head.clone(), f)
    }

    pub fn reverse(&self) -> Self {
        self.rebuild(self.to_list().reverse())
    }

    /// Remove repeated elements, keeping the first occurrence of each.
    pub fn distinct(&self) -> Self
    where
        T: Eq + Hash,
    {
        self.rebuild(self.to_list().distinct())
    }

    pub fn sorted_by<F>(&self, compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.rebuild(self.to_list().sorted_by(compare))
    }

    pub fn sorted(&self) -> Self
    where
        T: Ord,
    {
        self.sorted_by(|left, right| left.cmp(right))
    }

    pub fn to_list(&self) -> PersistentList<T> {
        self.tail.prepend(self.head.clone())
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    // Reverse, distinct and sort never produce an empty list from a non-empty one.
    fn rebuild(&self, list: PersistentList<T>) -> Self {
        NonEmptyList::from_list(&list).unwrap_or_else(|| self.clone())
    }
}

impl<T: Debug> Debug for NonEmptyList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> IntoIterator for NonEmptyList<T> {
    type Item = T;
    type IntoIter = Chain<Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        let NonEmptyList { head, tail } = self;
        once(head).chain(tail)
    }
}

impl<T: Clone> From<NonEmptyList<T>> for PersistentList<T> {
    fn from(list: NonEmptyList<T>) -> Self {
        list.to_list()
    }
}

impl<T: Clone> Semigroup for NonEmptyList<T> {
    fn op(left: Self, right: Self) -> Self {
        let NonEmptyList { head, tail } = left;
        let mut rest = Vec::with_capacity(tail.len() + right.len());
        rest.extend(tail);
        rest.extend(right);
        NonEmptyList {
            head,
            tail: PersistentList::from_vec(rest),
        }
    }

    fn op_in_place(&mut self, right: Self) {
        let mut rest = Vec::with_capacity(self.len() - 1 + right.len());
        rest.extend(self.tail.iter().cloned());
        rest.extend(right);
        self.tail = PersistentList::from_vec(rest);
    }
}
