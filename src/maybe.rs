//! # Maybe
//!
//! A wrapper around a value that may be absent.
//!
//! A [`Maybe`] is built once and never changes state afterwards. It offers
//! two ways of getting at the value:
//!
//! - **Checked extraction**: [`Maybe::just`] and [`Maybe::into_just`] return
//!   an [`AbsentValueError`] when there is nothing to extract, so callers can
//!   propagate the failure with `?`.
//! - **Continuations**: [`Maybe::on_just`] and [`Maybe::on_nothing`] run a
//!   closure only under the matching condition and hand the wrapper back,
//!   so inspections can be chained inside a single expression.
//!
//! ## Example
//!
//! ```
//! use maybe::Maybe;
//!
//! let mut seen = Vec::new();
//! Maybe::of("a")
//!     .on_just(|v| seen.push(*v))
//!     .on_nothing(|| seen.push("none"));
//! assert_eq!(seen, vec!["a"]);
//! ```

use std::fmt;

use tracing::debug;

use crate::error::{AbsentValueError, Result};

/// A value of type `T` that is either present ("just") or absent ("nothing").
#[derive(Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Maybe<T> {
    target: Option<T>,
}

impl<T> Maybe<T> {
    /// Wraps a value that may be absent. Never fails.
    ///
    /// Accepts either a bare `T` or an `Option<T>`; `None` produces an
    /// absent wrapper.
    pub fn of(value: impl Into<Option<T>>) -> Self {
        Maybe { target: value.into() }
    }

    /// Wraps a value the caller declares to be present.
    ///
    /// # Errors
    ///
    /// Returns [`AbsentValueError::RequiredWasAbsent`] if `value` is `None`.
    pub fn from_just(value: impl Into<Option<T>>) -> Result<Self> {
        match value.into() {
            Some(v) => Ok(Maybe { target: Some(v) }),
            None => {
                debug!("rejecting absent value passed to Maybe::from_just");
                Err(AbsentValueError::RequiredWasAbsent)
            }
        }
    }

    /// An absent wrapper.
    pub fn from_nothing() -> Self {
        Maybe { target: None }
    }

    pub fn is_just(&self) -> bool {
        self.target.is_some()
    }

    pub fn is_nothing(&self) -> bool {
        !self.is_just()
    }

    /// Borrows the held value.
    ///
    /// Repeated calls return the same value and have no side effects.
    ///
    /// # Errors
    ///
    /// Returns [`AbsentValueError::UnwrappedAbsent`] if the wrapper is absent.
    pub fn just(&self) -> Result<&T> {
        self.target.as_ref().ok_or(AbsentValueError::UnwrappedAbsent)
    }

    /// Consumes the wrapper and returns the held value.
    ///
    /// # Errors
    ///
    /// Returns [`AbsentValueError::UnwrappedAbsent`] if the wrapper is absent.
    pub fn into_just(self) -> Result<T> {
        self.target.ok_or(AbsentValueError::UnwrappedAbsent)
    }

    /// Runs `f` with the held value if present, then returns `self`.
    pub fn on_just<F>(&self, f: F) -> &Self
    where
        F: FnOnce(&T),
    {
        if let Some(v) = &self.target {
            f(v);
        }
        self
    }

    /// Runs `f` if the wrapper is absent, then returns `self`.
    pub fn on_nothing<F>(&self, f: F) -> &Self
    where
        F: FnOnce(),
    {
        if self.is_nothing() {
            f();
        }
        self
    }

    pub fn as_option(&self) -> Option<&T> {
        self.target.as_ref()
    }

    pub fn into_option(self) -> Option<T> {
        self.target
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::from_nothing()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Maybe { target: value }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.target
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            Some(v) => f.debug_tuple("Just").field(v).finish(),
            None => f.write_str("Nothing"),
        }
    }
}
