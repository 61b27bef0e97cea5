//! Helpers that flatten sequences of [`Maybe`] values.
//!
//! Both helpers walk the whole input once, in order, and drop absent
//! entries. Absence here is filtering, never an error.

use tracing::trace;

use crate::maybe::Maybe;

/// Collects the present values, in input order.
///
/// ```
/// use maybe::{cat_maybes, Maybe};
///
/// let items = vec![Maybe::of("a"), Maybe::of("b"), Maybe::of(None), Maybe::of("d")];
/// assert_eq!(cat_maybes(items), vec!["a", "b", "d"]);
/// ```
pub fn cat_maybes<T, I>(items: I) -> Vec<T>
where
    I: IntoIterator<Item = Maybe<T>>,
{
    let mut out = Vec::new();
    let mut scanned = 0usize;
    for item in items {
        scanned += 1;
        if let Ok(v) = item.into_just() {
            out.push(v);
        }
    }
    trace!(scanned, kept = out.len(), "cat_maybes");
    out
}

/// Maps every present value through `mapper` and collects the present results.
///
/// Absent inputs are skipped without calling `mapper`. A mapping that yields
/// an absent `Maybe` contributes nothing to the output.
///
/// ```
/// use maybe::{map_maybes, Maybe};
///
/// let items = vec![Maybe::of(1), Maybe::of(2), Maybe::of(None), Maybe::of(4)];
/// let evens = map_maybes(
///     |x: i32| if x % 2 == 0 { Maybe::of(x) } else { Maybe::from_nothing() },
///     items,
/// );
/// assert_eq!(evens, vec![2, 4]);
/// ```
pub fn map_maybes<T, U, F, I>(mut mapper: F, items: I) -> Vec<U>
where
    F: FnMut(T) -> Maybe<U>,
    I: IntoIterator<Item = Maybe<T>>,
{
    let mut out = Vec::new();
    let mut scanned = 0usize;
    for (index, item) in items.into_iter().enumerate() {
        scanned += 1;
        let Ok(v) = item.into_just() else {
            continue;
        };
        match mapper(v).into_just() {
            Ok(mapped) => out.push(mapped),
            Err(_) => trace!(index, "mapped entry produced no value"),
        }
    }
    trace!(scanned, kept = out.len(), "map_maybes");
    out
}

/// Iterator adapters mirroring [`cat_maybes`] and [`map_maybes`].
pub trait MaybeIterExt<T>: Iterator<Item = Maybe<T>> + Sized {
    fn cat_maybes(self) -> Vec<T> {
        cat_maybes(self)
    }

    fn map_maybes<U, F>(self, mapper: F) -> Vec<U>
    where
        F: FnMut(T) -> Maybe<U>,
    {
        map_maybes(mapper, self)
    }
}

impl<T, I> MaybeIterExt<T> for I where I: Iterator<Item = Maybe<T>> {}
