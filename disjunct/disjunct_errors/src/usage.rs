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

use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Names of the variants of all of the containers. Used to describe usage errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Some,
    None,
    Ok,
    Err,
    Left,
    Right,
    Success,
    Failure,
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Variant::Some => "Some",
            Variant::None => "None",
            Variant::Ok => "Ok",
            Variant::Err => "Err",
            Variant::Left => "Left",
            Variant::Right => "Right",
            Variant::Success => "Success",
            Variant::Failure => "Failure",
        };
        f.write_str(name)
    }
}

/// Errors raised when a container is used incorrectly by its caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum UsageError {
    /// A value was requested from an empty optional.
    #[error("No value is present.")]
    NoSuchElement,
    /// A one sided accessor was called on the other side of the container.
    #[error("Attempted to unwrap {expected} from {found}.")]
    IllegalUnwrap { expected: Variant, found: Variant },
    /// The value or cause of a captured computation was requested from the wrong variant.
    #[error("Illegal state: expected {expected} but was {found}.")]
    IllegalState { expected: Variant, found: Variant },
}

impl UsageError {
    pub fn illegal_unwrap(expected: Variant, found: Variant) -> Self {
        UsageError::IllegalUnwrap { expected, found }
    }

    pub fn illegal_state(expected: Variant, found: Variant) -> Self {
        UsageError::IllegalState { expected, found }
    }

    /// Raise the error as a panic. Used by the panicking accessors of the containers.
    #[track_caller]
    pub fn raise(self) -> ! {
        panic!("{}", self)
    }
}
