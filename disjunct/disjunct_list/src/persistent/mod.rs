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

use disjunct_algebra::{Semigroup, Zero};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;


/// An immutable sequence of elements. The elements are held in a shared buffer that is never
/// modified after construction; operations that change the contents of the list copy the elements
/// that they keep into a new buffer. Cloning a list is cheap as the buffer is shared.
///
/// Equality, ordering and hashing are structural: two lists are equal if they hold equal elements
/// in the same order.
pub struct PersistentList<T> {
    elements: Arc<[T]>,
}

impl<T> Clone for PersistentList<T> {
    fn clone(&self) -> Self {
        PersistentList {
            elements: self.elements.clone(),
        }
    }
}

impl<T> Default for PersistentList<T> {
    fn default() -> Self {
        PersistentList::new()
    }
}

impl<T> PersistentList<T> {
    pub fn new() -> Self {
        PersistentList::from_vec(vec![])
    }

    pub fn singleton(value: T) -> Self {
        PersistentList::from_vec(vec![value])
    }

    pub fn from_vec(elements: Vec<T>) -> Self {
        PersistentList {
            elements: Arc::from(elements),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn head(&self) -> Option<&T> {
        self.elements.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.elements.contains(value)
    }

    pub fn map<U, F>(&self, f: F) -> PersistentList<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(f).collect()
    }

    pub fn flat_map<U, I, F>(&self, f: F) -> PersistentList<U>
    where
        I: IntoIterator<Item = U>,
        F: FnMut(&T) -> I,
    {
        self.iter().flat_map(f).collect()
    }

    pub fn fold<B, F>(&self, init: B, f: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(init, f)
    }
}

impl<T: Clone> PersistentList<T> {
    /// All elements after the first. Nothing if the list is empty.
    pub fn tail(&self) -> Option<PersistentList<T>> {
        match self.elements.split_first() {
            Some((_, rest)) => Some(PersistentList::from(rest)),
            None => None,
        }
    }

    pub fn append(&self, value: T) -> Self {
        let mut elements = Vec::with_capacity(self.len() + 1);
        elements.extend_from_slice(&self.elements);
        elements.push(value);
        PersistentList::from_vec(elements)
    }

    pub fn prepend(&self, value: T) -> Self {
        let mut elements = Vec::with_capacity(self.len() + 1);
        elements.push(value);
        elements.extend_from_slice(&self.elements);
        PersistentList::from_vec(elements)
    }

    pub fn concat(&self, other: &PersistentList<T>) -> Self {
        if other.is_empty() {
            self.clone()
        } else if self.is_empty() {
            other.clone()
        } else {
            let mut elements = Vec::with_capacity(self.len() + other.len());
            elements.extend_from_slice(&self.elements);
            elements.extend_from_slice(&other.elements);
            PersistentList::from_vec(elements)
        }
    }

    /// Replace the element at an index. Nothing if the index is out of range.
    pub fn updated(&self, index: usize, value: T) -> Option<Self> {
        if index < self.len() {
            let mut elements = self.to_vec();
            elements[index] = value;
            Some(PersistentList::from_vec(elements))
        } else {
            None
        }
    }

    /// Remove the element at an index. Nothing if the index is out of range.
    pub fn removed(&self, index: usize) -> Option<Self> {
        if index < self.len() {
            let mut elements = self.to_vec();
            elements.remove(index);
            Some(PersistentList::from_vec(elements))
        } else {
            None
        }
    }

    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|v| predicate(v)).cloned().collect()
    }

    pub fn take(&self, n: usize) -> Self {
        if n >= self.len() {
            self.clone()
        } else {
            PersistentList::from(&self.elements[..n])
        }
    }

    pub fn drop(&self, n: usize) -> Self {
        if n == 0 {
            self.clone()
        } else {
            PersistentList::from(&self.elements[n.min(self.len())..])
        }
    }

    pub fn take_while<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().take_while(|v| predicate(v)).cloned().collect()
    }

    pub fn drop_while<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().skip_while(|v| predicate(v)).cloned().collect()
    }

    /// Remove repeated elements, keeping the first occurrence of each.
    pub fn distinct(&self) -> Self
    where
        T: Eq + Hash,
    {
        let mut seen = HashSet::with_capacity(self.len());
        self.iter()
            .filter(|v| seen.insert(*v))
            .cloned()
            .collect()
    }

    pub fn reverse(&self) -> Self {
        self.iter().rev().cloned().collect()
    }

    /// Sort the elements with a comparator. The sort is stable.
    pub fn sorted_by<F>(&self, compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut elements = self.to_vec();
        elements.sort_by(compare);
        PersistentList::from_vec(elements)
    }

    pub fn sorted(&self) -> Self
    where
        T: Ord,
    {
        self.sorted_by(|left, right| left.cmp(right))
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.elements.to_vec()
    }
}

impl<T> From<Vec<T>> for PersistentList<T> {
    fn from(elements: Vec<T>) -> Self {
        PersistentList::from_vec(elements)
    }
}

impl<T: Clone> From<&[T]> for PersistentList<T> {
    fn from(elements: &[T]) -> Self {
        PersistentList {
            elements: Arc::from(elements),
        }
    }
}

impl<T> FromIterator<T> for PersistentList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        PersistentList::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a PersistentList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> IntoIterator for PersistentList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_vec().into_iter()
    }
}

impl<T: Debug> Debug for PersistentList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for PersistentList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements[..] == other.elements[..]
    }
}

impl<T: Eq> Eq for PersistentList<T> {}

impl<T: PartialOrd> PartialOrd for PersistentList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.elements[..].partial_cmp(&other.elements[..])
    }
}

impl<T: Ord> Ord for PersistentList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.elements[..].cmp(&other.elements[..])
    }
}

impl<T: Hash> Hash for PersistentList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements[..].hash(state)
    }
}

impl<T: Clone> Semigroup for PersistentList<T> {
    fn op(left: Self, right: Self) -> Self {
        left.concat(&right)
    }

    fn op_in_place(&mut self, right: Self) {
        *self = self.concat(&right);
    }
}

impl<T: Clone> Zero for PersistentList<T> {
    fn zero() -> Self {
        PersistentList::new()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}
