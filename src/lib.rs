//! # Maybe
//!
//! A wrapper for values that may be absent, plus helpers for flattening
//! sequences of such values.
//!
//! - [`Maybe`] holds either a present value or nothing, fixed at construction.
//! - [`AbsentValueError`] is returned whenever code asserts a presence that
//!   does not hold.
//! - [`cat_maybes`] and [`map_maybes`] (or [`MaybeIterExt`]) collect the
//!   present values of a sequence in order.

pub mod error;
pub mod maybe;
pub mod collect;

pub use error::AbsentValueError;
pub use maybe::*;
pub use collect::*;
