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

//! # Persistent Lists
//!
//! Immutable, order preserving sequences. Every operation that would modify a list instead returns
//! a new list and leaves the original untouched, so lists can be shared freely (including between
//! threads).
//!
//! * [`PersistentList`] may be empty.
//! * [`NonEmptyList`] always holds at least one element. It is used to carry the errors
//!   accumulated by a failed validation.

mod non_empty;
mod persistent;

pub use non_empty::NonEmptyList;
pub use persistent::PersistentList;
