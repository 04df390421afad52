//! This module defines folds over chains of cells.
//!
//! Both folds accept any [`Chain`], i.e. eager [`Cons`] chains as well as [`crate::LazyCons`]
//! chains, and take the chain as an `Option` so that the empty chain can be folded too.
//! Neither of them recurses, a chain of any length can be folded without exhausting the
//! call stack.
//!
//! Together with [`flip`] and [`cons`] the folds express the usual list transformations:
//!
//! ```
//! use conslist::{fold::{cons, flip, foldl, foldr}, Cons};
//!
//! let xs = Cons::from_sequence(vec![1, 2, 3]);
//!
//! let reversed = foldl(flip(cons), xs.clone(), None);
//! let copied = foldr(cons, xs, None);
//!
//! assert_eq!(reversed.unwrap().iter().collect::<Vec<_>>(), [3, 2, 1]);
//! assert_eq!(copied.unwrap().iter().collect::<Vec<_>>(), [1, 2, 3]);
//! ```

use tracing::trace;

use crate::{chain::Chain, Cons};

/// Left fold.
///
/// Returns `start` for the empty chain, otherwise folds the tail with `combine(start, head)` as
/// the new accumulator. Values are combined from the first to the last one.
pub fn foldl<C, A, F>(mut combine: F, chain: Option<C>, start: A) -> A
where
    C: Chain,
    F: FnMut(A, C::Item) -> A,
{
    let mut folded = 0usize;
    let mut acc = start;
    let mut cell = chain;

    while let Some(current) = cell {
        acc = combine(acc, current.head());
        cell = current.rest();
        folded += 1;
    }

    trace!(%folded, "left fold complete");
    acc
}

/// Right fold.
///
/// Returns `start` for the empty chain, otherwise returns `combine(head, foldr(tail))`. The head
/// is combined only once the fold of its tail is complete, so `combine` sees the values from the
/// last to the first one.
///
/// The whole chain is traversed before the first call to `combine`.
pub fn foldr<C, A, F>(mut combine: F, chain: Option<C>, start: A) -> A
where
    C: Chain,
    F: FnMut(C::Item, A) -> A,
{
    let mut values = Vec::new();
    let mut cell = chain;

    while let Some(current) = cell {
        values.push(current.head());
        cell = current.rest();
    }

    trace!(folded = values.len(), "right fold complete");

    values
        .into_iter()
        .rev()
        .fold(start, |acc, value| combine(value, acc))
}

/// Swap the order of the arguments of a two-argument function.
pub fn flip<A, B, R, F>(mut f: F) -> impl FnMut(B, A) -> R
where
    F: FnMut(A, B) -> R,
{
    move |b, a| f(a, b)
}

/// Prepend `value` to `tail`, as a function suitable for folds.
pub fn cons<T>(value: T, tail: Option<Cons<T>>) -> Option<Cons<T>> {
    Some(Cons::new(value, tail))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::{cons, flip, foldl, foldr};
    use crate::{Cons, LazyCons};

    fn values(chain: Option<Cons<i32>>) -> Vec<i32> {
        chain.map(|c| c.iter().collect()).unwrap_or_default()
    }

    #[test]
    fn foldl_with_flipped_cons_reverses() {
        let xs = Cons::from_sequence(vec![1, 2, 3]);

        assert_eq!(values(foldl(flip(cons), xs, None)), [3, 2, 1]);
    }

    #[test]
    fn foldr_with_cons_copies() {
        let xs = Cons::from_sequence(vec![1, 2, 3]).unwrap();
        let copy = foldr(cons, Some(xs.clone()), None).unwrap();

        assert_eq!(copy.iter().collect::<Vec<_>>(), [1, 2, 3]);
        assert!(!copy.ptr_eq(&xs));

        xs.set_value(100);
        assert_eq!(copy.value(), 1);
    }

    #[test]
    fn folding_empty_chain_returns_start() {
        assert_eq!(foldl(|acc, x: i32| acc + x, None::<Cons<i32>>, 7), 7);
        assert_eq!(foldr(|x: i32, acc| acc * x, None::<Cons<i32>>, 7), 7);
        assert!(values(foldl(flip(cons), None::<Cons<i32>>, None)).is_empty());
        assert!(values(foldr(cons, Cons::from_sequence(Vec::new()), None)).is_empty());
    }

    #[test]
    fn foldl_combines_first_to_last() {
        let xs = Cons::from_sequence(vec!["a", "b", "c"]);

        let joined = foldl(|acc: String, x| acc + x, xs, String::from(">"));

        assert_eq!(joined, ">abc");
    }

    #[test]
    fn foldr_combines_last_to_first() {
        let calls = RefCell::new(Vec::new());
        let xs = Cons::from_sequence(vec![1, 2, 3]);

        let result = foldr(
            |x, acc: String| {
                calls.borrow_mut().push(x);
                format!("({} {})", x, acc)
            },
            xs,
            String::from("nil"),
        );

        assert_eq!(result, "(1 (2 (3 nil)))");
        assert_eq!(*calls.borrow(), [3, 2, 1]);
    }

    #[test]
    fn folds_accept_lazy_chains() {
        let xs = LazyCons::from_sequence(1..=4);

        assert_eq!(foldl(|acc, x| acc + x, xs.clone(), 0), 10);
        assert_eq!(
            foldr(|x, acc: Vec<i32>| [vec![x], acc].concat(), xs, Vec::new()),
            [1, 2, 3, 4]
        );
    }

    #[test]
    fn folding_long_chain_does_not_overflow() {
        let xs = Cons::from_sequence(0..500_000u64);

        assert_eq!(foldl(|acc, x| acc + x, xs.clone(), 0), 124_999_750_000);
        assert_eq!(foldr(|x, acc| acc + x, xs, 0), 124_999_750_000);
    }

    #[test]
    fn flip_swaps_arguments() {
        let mut minus = flip(|a: i32, b: i32| a - b);

        assert_eq!(minus(1, 10), 9);
    }
}
