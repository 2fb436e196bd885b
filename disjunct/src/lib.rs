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

//! Closed sum types for optional values, fallible computations, captured panics and accumulated
//! validation errors, together with the persistent lists that carry accumulated errors. Each part
//! is enabled by a Cargo feature (all are enabled by default).

#[cfg(feature = "algebra")]
pub mod algebra {
    pub use disjunct_algebra::*;
}

#[cfg(feature = "errors")]
pub use disjunct_errors as errors;

#[cfg(feature = "list")]
pub use disjunct_list as list;

#[cfg(feature = "containers")]
pub use disjunct_containers::{Either, Maybe, Outcome, Try, Validated};
