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

use std::any::Any;
use std::error::Error;
use std::sync::Arc;
use thiserror::Error;

/// A failure raised by a computation and captured as data rather than propagated. A [`Fault`] is
/// always present in the failure variant of a captured computation.
#[derive(Debug, Clone, Error)]
pub enum Fault {
    /// The computation panicked. Holds the panic message (if the payload was a string).
    #[error("A computation panicked: {0}")]
    Panic(String),
    /// The computation returned an error.
    #[error("{0}")]
    Error(Arc<dyn Error + Send + Sync + 'static>),
    /// A fault described only by a message.
    #[error("{0}")]
    Message(String),
}

const OPAQUE_PAYLOAD: &str = "Box<dyn Any>";

impl Fault {
    pub fn from_error<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Fault::Error(Arc::new(error))
    }

    pub fn message(message: impl Into<String>) -> Self {
        Fault::Message(message.into())
    }

    /// Create a fault from the payload of a caught panic.
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let message = if let Some(msg) = payload.downcast_ref::<&'static str>() {
            (*msg).to_string()
        } else if let Some(msg) = payload.downcast_ref::<String>() {
            msg.clone()
        } else {
            OPAQUE_PAYLOAD.to_string()
        };
        Fault::Panic(message)
    }

    pub fn is_panic(&self) -> bool {
        matches!(self, Fault::Panic(_))
    }

    /// Attempt to view the captured error as a specific error type.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        match self {
            Fault::Error(err) => err.downcast_ref::<E>(),
            _ => None,
        }
    }
}

impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Fault::Panic(left), Fault::Panic(right)) => left == right,
            (Fault::Message(left), Fault::Message(right)) => left == right,
            (Fault::Error(left), Fault::Error(right)) => {
                Arc::ptr_eq(left, right) || left.to_string() == right.to_string()
            }
            _ => false,
        }
    }
}
