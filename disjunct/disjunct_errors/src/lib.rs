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

//! # Library Failure Types
//!
//! The containers in this workspace carry caller-defined errors as opaque payloads. Independently
//! of those, the library itself can fail in two ways:
//!
//! 1. [`UsageError`]: a caller asked for something that the container does not hold, such as the
//!    error of a successful outcome or the value of an empty optional. These are caller bugs and
//!    are never recovered by the library.
//! 2. [`Fault`]: a panic or error raised by caller-supplied logic and captured as data by `Try`.

mod fault;
mod usage;

pub use fault::Fault;
pub use usage::{UsageError, Variant};
